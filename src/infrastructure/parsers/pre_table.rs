use super::{record_from_captures, DrawParser};
use crate::domain::DrawRecord;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};

static PRE: Lazy<Selector> = Lazy::new(|| Selector::parse("pre").unwrap());

// date, weekday, five numbers
static ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}/\d{1,2}/\d{2})\s+([A-Z]{3})\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)")
        .unwrap()
});

const DATE_FORMAT: &str = "%m/%d/%y";

/// `MM/DD/YY` with `69` read as 1969; chrono alone would give 2069.
fn parse_date(token: &str) -> chrono::ParseResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT)?;
    if date.year() == 2069 {
        return Ok(date.with_year(1969).unwrap_or(date));
    }
    Ok(date)
}

/// Parser for the plain-text "all results" export, one draw per line:
///
/// ```text
/// 05/10/24  FRI   3  12  19  27  31
/// ```
pub struct PreTableParser {
    launch_date: NaiveDate,
}

impl PreTableParser {
    pub fn new(launch_date: NaiveDate) -> Self {
        Self { launch_date }
    }
}

impl DrawParser for PreTableParser {
    fn parse(&self, page: &str) -> Vec<DrawRecord> {
        let document = Html::parse_document(page);

        let Some(pre) = document.select(&PRE).next() else {
            warn!("Could not find the <pre> element containing lottery data");
            return Vec::new();
        };

        let text = pre.text().collect::<String>();
        let draws: Vec<DrawRecord> = text
            .trim()
            .lines()
            .filter_map(|line| ROW.captures(line))
            .filter_map(|caps| record_from_captures(&caps, 1, 3, parse_date, self.launch_date))
            .collect();

        debug!("Parsed {} draws from <pre> table", draws.len());
        draws
    }

    fn page_marker(&self) -> Option<&Selector> {
        Some(&*PRE)
    }
}
