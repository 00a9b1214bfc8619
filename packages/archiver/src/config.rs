use anyhow::{Context, Result};
use chrono::NaiveDate;
use dotenvy::dotenv;
use secrecy::SecretString;
use standings::calendar::DATE_FORMAT;
use standings::types::race::{DEFAULT_RACE_SLUG, DEFAULT_RACE_YEAR, DEFAULT_RESULTS_BASE_URL};
use standings::{RaceSource, S3Config};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Application configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    /// Object storage settings; missing values fail the upload, not startup
    pub storage: S3Config,
    pub race: RaceSource,
    pub chrome_executable: Option<PathBuf>,
    /// Run as if today were this date
    pub date_override: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = var("RESULTS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_RESULTS_BASE_URL.to_string());
        let race = RaceSource::new(
            Url::parse(&base_url).context("RESULTS_BASE_URL must be a valid URL")?,
            var("RACE_SLUG").unwrap_or_else(|| DEFAULT_RACE_SLUG.to_string()),
            match var("RACE_YEAR") {
                Some(year) => year.trim().parse::<i32>().context("RACE_YEAR must be a valid year")?,
                None => DEFAULT_RACE_YEAR,
            },
        );

        let date_override = var("ARCHIVER_DATE")
            .map(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT))
            .transpose()
            .context("ARCHIVER_DATE must be formatted YYYY-MM-DD")?;

        Ok(Self {
            storage: S3Config {
                region: var("AWS_REGION"),
                bucket: var("S3_BUCKET_NAME"),
                access_key_id: var("AWS_ACCESS_KEY_ID"),
                secret_access_key: var("AWS_SECRET_ACCESS_KEY").map(SecretString::from),
            },
            race,
            chrome_executable: var("CHROME_EXECUTABLE").map(PathBuf::from),
            date_override,
        })
    }
}
