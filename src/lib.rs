pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

pub use config::{cli::Args, Config};
pub use domain::{DrawRecord, FetchOutcome, PageFetcher, RecordStore};
pub use error::{DrawError, Result};
pub use services::{SyncOutcome, Synchronizer};
