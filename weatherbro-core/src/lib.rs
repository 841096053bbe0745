//! Core library for the `weatherbro` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-weather client
//! - The shared domain model and error types
//!
//! It is used by the `weatherbro` binary, but can also be reused by other
//! binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherRecord;
