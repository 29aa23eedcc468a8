use crate::domain::{DrawRecord, RecordStore};
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Draw history kept as one pretty-printed JSON array, newest first.
///
/// The file is read and rewritten wholesale; writes are not atomic.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn to_json(records: &[DrawRecord]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Vec<DrawRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not read {}: {}. Starting empty.", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error decoding JSON data in {}: {}. Starting empty.", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[DrawRecord]) -> Result<()> {
        self.ensure_parent_dir()?;
        fs::write(&self.path, Self::to_json(records)?)?;
        debug!("Wrote {} draws to {}", records.len(), self.path.display());
        Ok(())
    }
}
