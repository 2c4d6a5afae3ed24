use super::DataStore;
use crate::error::{MagpieError, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| unavailable(&self.root, e))?;
        }
        Ok(())
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> MagpieError {
    MagpieError::StoreUnavailable(format!("{}: {}", path.display(), err))
}

impl DataStore for FileStore {
    fn get(&self) -> Result<Document> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!(path = %data_file.display(), "no document yet");
            return Ok(Document::default());
        }
        let content = fs::read_to_string(&data_file).map_err(|e| unavailable(&data_file, e))?;
        if content.trim().is_empty() {
            return Ok(Document::default());
        }
        let document: Document =
            serde_json::from_str(&content).map_err(|e| unavailable(&data_file, e))?;
        debug!(files = document.files.len(), "document loaded");
        Ok(document)
    }

    fn set(&mut self, document: &Document) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let content =
            serde_json::to_string_pretty(document).map_err(|e| unavailable(&data_file, e))?;

        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(|e| unavailable(&tmp_file, e))?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(unavailable(&data_file, e));
        }

        debug!(files = document.files.len(), "document written");
        Ok(())
    }
}
