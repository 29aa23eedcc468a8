use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Count of numbers drawn in one Gimme 5 drawing.
pub const NUMBERS_PER_DRAW: usize = 5;

/// One drawing as it is persisted: `{ "date": "YYYY-MM-DD", "numbers": [..] }`.
///
/// `numbers` keeps the literal source values in source order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub numbers: Vec<u32>,
}

impl DrawRecord {
    pub fn new(date: NaiveDate, numbers: Vec<u32>) -> Self {
        Self { date, numbers }
    }
}

/// True when every record is dated no later than the one before it.
pub fn is_newest_first(records: &[DrawRecord]) -> bool {
    records.windows(2).all(|pair| pair[0].date >= pair[1].date)
}
