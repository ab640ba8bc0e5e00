use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lrs_core::export::ExportDocument;
use tracing::info;

/// Writes exported plans as JSON files into one directory.
#[derive(Debug, Clone)]
pub struct ExportSink {
    dir: PathBuf,
}

impl ExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `doc` next to its suggested file name, with a `.json` extension.
    /// An existing file of the same name is replaced.
    pub fn write(&self, doc: &ExportDocument) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(Path::new(&doc.file_name).with_extension("json"));
        let body = serde_json::to_vec_pretty(doc)?;
        fs::write(&path, body)?;
        info!(path = %path.display(), title = %doc.title, "plan exported");
        Ok(path)
    }
}
