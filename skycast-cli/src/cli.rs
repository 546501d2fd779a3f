use clap::Parser;
use skycast_core::{WeatherService, format};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current weather and 3-day forecast for any city worldwide",
    after_help = "Examples:\n  skycast --city \"Puchong\" --country \"MY\"\n  skycast --city \"London\" --country \"GB\""
)]
pub struct Cli {
    /// City name (e.g., "Puchong").
    #[arg(long)]
    pub city: String,

    /// Two-letter country code (e.g., "MY").
    #[arg(long)]
    pub country: String,
}

impl Cli {
    pub async fn run(&self) -> anyhow::Result<()> {
        // Fails before any HTTP when OPENWEATHER_API_KEY is absent.
        let service = WeatherService::from_env()?;
        let bundle = service.weather_bundle(&self.city, &self.country).await?;
        println!("{}", format::render(&bundle));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_required_flags() {
        let cli = Cli::try_parse_from(["skycast", "--city", "Puchong", "--country", "MY"])
            .expect("both flags given");
        assert_eq!(cli.city, "Puchong");
        assert_eq!(cli.country, "MY");
    }

    #[test]
    fn country_is_required() {
        let err = Cli::try_parse_from(["skycast", "--city", "Puchong"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
