use anyhow::{Result, anyhow};
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use vdl_parking_store::DEFAULT_STATUS_FILE;

/// Notify a chat webhook when a Ville de Luxembourg parking changes occupancy tier.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Discord or Teams webhook URL
    #[arg(long = "webhook", env = "VDL_PARKING_WEBHOOK_URL")]
    pub webhook_url: String,

    /// Comma-separated garages to monitor (e.g. "Bouillon,Gëlle Fra")
    #[arg(long, env = "VDL_PARKING_TITLES")]
    pub titles: String,

    /// URL of the parking occupancy JSON document
    #[arg(long = "data-url", env = "VDL_PARKING_DATA_URL")]
    pub data_url: String,

    /// Where the last snapshot is kept between runs
    #[arg(long = "status-file", env = "VDL_PARKING_STATUS_FILE", default_value = DEFAULT_STATUS_FILE)]
    pub status_file: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 10)]
    pub timeout_secs: u64,
}

/// Garage titles to watch. Titles are trimmed and blank entries dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitoredTitles(HashSet<String>);

impl MonitoredTitles {
    pub fn parse(raw: &str) -> Result<Self> {
        let titles: HashSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .collect();
        if titles.is_empty() {
            return Err(anyhow!("no garage titles to monitor in {raw:?}"));
        }
        Ok(Self(titles))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub webhook_url: String,
    pub data_url: String,
    pub titles: MonitoredTitles,
    pub status_file: PathBuf,
    pub timeout: Duration,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            titles: MonitoredTitles::parse(&cli.titles)?,
            webhook_url: cli.webhook_url,
            data_url: cli.data_url,
            status_file: cli.status_file,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_trimmed_and_blank_entries_dropped() {
        let titles = MonitoredTitles::parse(" Bouillon, Gëlle Fra ,,").unwrap();
        assert_eq!(titles.iter().count(), 2);
        assert!(titles.contains("Bouillon"));
        assert!(titles.contains("Gëlle Fra"));
        assert!(!titles.contains(" Bouillon"));
    }

    #[test]
    fn only_blank_titles_is_an_error() {
        assert!(MonitoredTitles::parse(" , ,").is_err());
    }

    #[test]
    fn cli_requires_webhook_titles_and_data_url() {
        let result = Cli::try_parse_from(["vdl-parking-fetcher", "--titles", "Bouillon"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_defaults_status_file() {
        let cli = Cli::try_parse_from([
            "vdl-parking-fetcher",
            "--webhook",
            "https://discord.example/hook",
            "--titles",
            "Bouillon,Gëlle Fra",
            "--data-url",
            "https://data.example/parkings.json",
        ])
        .unwrap();
        let config = Config::try_from(cli).unwrap();
        assert_eq!(config.status_file, PathBuf::from("status.json"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.titles.iter().count(), 2);
    }
}
