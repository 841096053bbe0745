use chrono::Utc;
use clap::Parser;
use weatherbro_core::{Config, WeatherClient};

use crate::{format, select::FieldSelection};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbro", version, about = "Show current weather for a city")]
pub struct Cli {
    /// City name, e.g. "London" or "New York".
    pub city: String,

    /// Comma-separated list of details to display
    /// (e.g. 'temperature,humidity,time,all'). If omitted, all details are shown.
    #[arg(long)]
    pub show: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let selection = FieldSelection::parse(self.show.as_deref());

        let config = Config::load()?;
        let api_key = config.resolve_api_key()?;
        let client = WeatherClient::new(api_key);

        println!("Fetching weather for {}...", self.city);
        let record = client.current(&self.city).await?;

        println!("{}", format::render(&record, &selection, Utc::now()));

        Ok(())
    }
}
