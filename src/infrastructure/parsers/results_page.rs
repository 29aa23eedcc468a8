use super::{record_from_captures, DrawParser};
use crate::domain::DrawRecord;
use crate::error::{DrawError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};

static ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tr, li").unwrap());

static ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2} [A-Za-z]{3} \d{4})\D+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").unwrap()
});

const DATE_FORMAT: &str = "%d %b %Y";

fn parse_date(token: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(token, DATE_FORMAT)
}

/// Parser for the styled results page where each draw is a table row
/// (or list item) reading like `10 May 2024 | 3 12 19 27 31`.
pub struct ResultsPageParser {
    launch_date: NaiveDate,
    container: Selector,
}

impl ResultsPageParser {
    pub fn new(launch_date: NaiveDate, container_selector: &str) -> Result<Self> {
        let container = Selector::parse(container_selector)
            .map_err(|e| DrawError::Selector(format!("{container_selector:?}: {e}")))?;

        Ok(Self {
            launch_date,
            container,
        })
    }
}

/// Cell text joined with single spaces, so the row regex sees one flat line.
fn flatten_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

impl DrawParser for ResultsPageParser {
    fn parse(&self, page: &str) -> Vec<DrawRecord> {
        let document = Html::parse_document(page);

        let containers: Vec<_> = document.select(&self.container).collect();
        if containers.is_empty() {
            warn!("Could not find the results container on the page");
            return Vec::new();
        }

        let draws: Vec<DrawRecord> = containers
            .iter()
            .flat_map(|container| container.select(&ROWS))
            .map(|row| flatten_text(row.text()))
            .filter_map(|line| {
                ROW.captures(&line)
                    .and_then(|caps| record_from_captures(&caps, 1, 2, parse_date, self.launch_date))
            })
            .collect();

        debug!("Parsed {} draws from results page", draws.len());
        draws
    }

    fn page_marker(&self) -> Option<&Selector> {
        Some(&self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 5, 12).unwrap()
    }

    const PAGE: &str = r#"<html><body>
<table class="results">
  <thead><tr><th>Date</th><th>Numbers</th></tr></thead>
  <tbody>
    <tr><td>10 May 2024</td><td><span>3</span><span>12</span><span>19</span><span>27</span><span>31</span></td></tr>
    <tr><td>03 May 2024</td><td><span>4</span><span>4</span><span>17</span><span>23</span><span>31</span></td></tr>
    <tr><td>Draw cancelled</td><td></td></tr>
    <tr><td>10 May 2013</td><td><span>1</span><span>2</span><span>3</span><span>4</span><span>5</span></td></tr>
  </tbody>
</table>
</body></html>"#;

    #[test]
    fn parses_rows_inside_container() {
        let parser = ResultsPageParser::new(launch(), "table.results").unwrap();
        let draws = parser.parse(PAGE);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(draws[0].numbers, vec![3, 12, 19, 27, 31]);
        assert_eq!(draws[1].numbers, vec![4, 4, 17, 23, 31]);
    }

    #[test]
    fn list_items_are_rows_too() {
        let page = r#"<ul id="draws">
<li>10 May 2024 - 3 12 19 27 31</li>
<li>3 May 2024 - 4 4 17 23 31</li>
</ul>"#;
        let parser = ResultsPageParser::new(launch(), "#draws").unwrap();
        let draws = parser.parse(page);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn ignores_rows_outside_container() {
        let page = r#"<table class="ads"><tr><td>10 May 2024</td><td>1 2 3 4 5</td></tr></table>
<table class="results"><tr><td>03 May 2024</td><td>4 4 17 23 31</td></tr></table>"#;
        let parser = ResultsPageParser::new(launch(), "table.results").unwrap();
        let draws = parser.parse(page);

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn unknown_month_is_skipped() {
        let page = r#"<table><tr><td>10 Mai 2024</td><td>1 2 3 4 5</td></tr></table>"#;
        let parser = ResultsPageParser::new(launch(), "table").unwrap();
        assert!(parser.parse(page).is_empty());
    }

    #[test]
    fn missing_container_yields_nothing() {
        let parser = ResultsPageParser::new(launch(), "table.results").unwrap();
        assert!(parser.parse("<html><body></body></html>").is_empty());
    }

    #[test]
    fn page_marker_is_the_container() {
        let parser = ResultsPageParser::new(launch(), "table.results").unwrap();
        let marker = parser.page_marker().unwrap();

        let page = Html::parse_document(PAGE);
        assert_eq!(page.select(marker).count(), 1);
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let result = ResultsPageParser::new(launch(), "table[");
        assert!(matches!(result, Err(DrawError::Selector(_))));
    }
}
