use crate::infrastructure::Layout;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_URL: &str = "https://www.mainelottery.com/cgi/all.results.pl";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Results page to scrape
    #[arg(long, env = "DRAWSYNC_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// JSON file holding the draw history, newest first
    #[arg(long, env = "DRAWSYNC_DATA_FILE", default_value = "gimme5_data.json")]
    pub data_file: PathBuf,

    /// Draws dated before this day are discarded
    #[arg(long, default_value = "2013-05-12")]
    pub launch_date: NaiveDate,

    /// Page layout of the results page
    #[arg(long, value_enum, default_value_t = Layout::PreTable)]
    pub layout: Layout,

    /// CSS selector of the element holding result rows (results-page layout)
    #[arg(long, default_value = "table")]
    pub container_selector: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
