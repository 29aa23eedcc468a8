use crate::domain::{DrawRecord, NUMBERS_PER_DRAW};
use crate::error::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use regex::Captures;
use scraper::Selector;
use tracing::{debug, warn};

pub(crate) mod pre_table;
pub(crate) mod results_page;

pub use pre_table::PreTableParser;
pub use results_page::ResultsPageParser;

pub trait DrawParser: Send + Sync {
    /// Extracts draws in page order. Never fails: unusable rows are dropped.
    fn parse(&self, page: &str) -> Vec<DrawRecord>;

    /// Element a usable page always contains, if the layout has one.
    fn page_marker(&self) -> Option<&Selector> {
        None
    }
}

/// Page structure the parser targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Plain-text table inside a `<pre>` element, dates as `MM/DD/YY`.
    PreTable,
    /// Styled results page with table rows, dates as `DD Mon YYYY`.
    ResultsPage,
}

pub fn build_parser(
    layout: Layout,
    launch_date: NaiveDate,
    container_selector: &str,
) -> Result<Box<dyn DrawParser>> {
    match layout {
        Layout::PreTable => Ok(Box::new(PreTableParser::new(launch_date))),
        Layout::ResultsPage => Ok(Box::new(ResultsPageParser::new(
            launch_date,
            container_selector,
        )?)),
    }
}

/// Turns one matched row into a record.
///
/// `date_group` is the capture index of the date token; the numbers are the
/// `NUMBERS_PER_DRAW` groups starting at `first_number_group`.
pub(crate) fn record_from_captures(
    caps: &Captures<'_>,
    date_group: usize,
    first_number_group: usize,
    parse_date: fn(&str) -> chrono::ParseResult<NaiveDate>,
    launch_date: NaiveDate,
) -> Option<DrawRecord> {
    let date_str = caps.get(date_group)?.as_str();

    let date = match parse_date(date_str) {
        Ok(date) => date,
        Err(e) => {
            warn!("Error parsing date {:?}: {}", date_str, e);
            return None;
        }
    };

    if date < launch_date {
        debug!("Skipping draw dated {} (before launch {})", date, launch_date);
        return None;
    }

    let mut numbers = Vec::with_capacity(NUMBERS_PER_DRAW);
    for group in first_number_group..first_number_group + NUMBERS_PER_DRAW {
        let token = caps.get(group)?.as_str();
        match token.parse::<u32>() {
            Ok(n) => numbers.push(n),
            Err(e) => {
                warn!("Error parsing number {:?} on {}: {}", token, date, e);
                return None;
            }
        }
    }

    Some(DrawRecord::new(date, numbers))
}
