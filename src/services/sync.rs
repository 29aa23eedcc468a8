use crate::domain::{is_newest_first, DrawRecord, FetchOutcome, PageFetcher, RecordStore};
use crate::error::Result;
use crate::infrastructure::DrawParser;
use std::sync::Arc;
use tracing::{info, warn};

/// What a single [`Synchronizer::update`] run did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The page could not be fetched; the store was left alone.
    FetchFailed,
    /// The store was empty, so everything parsed was written as-is.
    Bootstrapped { count: usize },
    /// `count` draws newer than the stored head were prepended.
    Added { count: usize },
    NoNewData,
}

/// Draws from `parsed` dated strictly after the head of `existing`, in parser order.
///
/// A draw on the same day as the stored head is never considered new, even
/// when its numbers differ from the stored ones.
pub fn merge_new_records(existing: &[DrawRecord], parsed: Vec<DrawRecord>) -> Vec<DrawRecord> {
    let Some(latest) = existing.first().map(|r| r.date) else {
        return parsed;
    };

    parsed.into_iter().filter(|r| r.date > latest).collect()
}

pub struct Synchronizer {
    url: String,
    store: Arc<dyn RecordStore>,
    fetcher: Arc<dyn PageFetcher>,
    parser: Box<dyn DrawParser>,
}

impl Synchronizer {
    pub fn new(
        url: impl Into<String>,
        store: Arc<dyn RecordStore>,
        fetcher: Arc<dyn PageFetcher>,
        parser: Box<dyn DrawParser>,
    ) -> Self {
        Self {
            url: url.into(),
            store,
            fetcher,
            parser,
        }
    }

    /// Fetches the results page once and folds any newer draws into the store.
    ///
    /// Only a failed write is returned as an error; fetch and parse problems
    /// end the run early with the store untouched.
    pub async fn update(&self) -> Result<SyncOutcome> {
        let existing = self.store.load();
        let latest_existing_date = existing.first().map(|r| r.date);

        let page = match self.fetcher.fetch(&self.url).await {
            FetchOutcome::Fetched(page) => page,
            FetchOutcome::FetchFailed(reason) => {
                warn!("No update possible this run: {}", reason);
                return Ok(SyncOutcome::FetchFailed);
            }
        };

        let all_parsed = self.parser.parse(&page);

        let Some(latest) = latest_existing_date else {
            let count = all_parsed.len();
            self.store.save(&all_parsed)?;
            info!("Initial data downloaded ({} draws)", count);
            return Ok(SyncOutcome::Bootstrapped { count });
        };

        let new_records = merge_new_records(&existing, all_parsed);
        if new_records.is_empty() {
            info!("No new data found (latest stored draw {})", latest);
            return Ok(SyncOutcome::NoNewData);
        }

        let count = new_records.len();
        let mut updated = new_records;
        updated.extend(existing);

        if !is_newest_first(&updated) {
            warn!("Merged draws are not in newest-first order; the parsed page was out of order");
        }

        self.store.save(&updated)?;
        info!("Added {} new entries", count);
        Ok(SyncOutcome::Added { count })
    }
}
