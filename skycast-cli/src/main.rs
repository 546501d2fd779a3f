//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the geocode → fetch → format pipeline
//! - Mapping failures to exit codes

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cmd = cli::Cli::parse();

    let code = tokio::select! {
        res = cmd.run() => match res {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("❌ Error: {err}");
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n⏹️  Operation cancelled by user");
            1
        }
    };

    std::process::exit(code);
}
