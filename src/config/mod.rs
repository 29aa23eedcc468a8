use crate::config::cli::Args;
use crate::error::{DrawError, Result};
use crate::infrastructure::build_client;
use reqwest::Client;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        if args.timeout_secs == 0 {
            return Err(DrawError::Config("--timeout-secs must be at least 1".into()));
        }

        let http_client = build_client(Duration::from_secs(args.timeout_secs))?;

        Ok(Self { args, http_client })
    }
}

pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim())
        .map_err(|_| DrawError::Config(format!("unknown log level {level:?}")))
}
