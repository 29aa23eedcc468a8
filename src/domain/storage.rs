use super::DrawRecord;
use crate::error::Result;

pub trait RecordStore: Send + Sync {
    /// Newest-first records; empty when nothing usable is persisted.
    fn load(&self) -> Vec<DrawRecord>;
    fn save(&self, records: &[DrawRecord]) -> Result<()>;
}
