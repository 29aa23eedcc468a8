mod draw;
pub(crate) mod fetch;
pub(crate) mod storage;

pub use draw::{is_newest_first, DrawRecord, NUMBERS_PER_DRAW};
pub use fetch::{FetchOutcome, PageFetcher};
pub use storage::RecordStore;
