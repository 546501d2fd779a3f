//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - A thin HTTP client over the OpenWeatherMap endpoints
//! - The geocode → fetch → normalize → format pipeline
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod format;
pub mod model;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Coordinates, DailyRecord, WeatherBundle};
pub use service::WeatherService;
