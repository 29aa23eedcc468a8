pub(crate) mod sync;

pub use sync::{merge_new_records, SyncOutcome, Synchronizer};
