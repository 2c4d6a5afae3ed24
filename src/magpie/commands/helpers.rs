use crate::error::Result;
use crate::model::{Document, Files};
use crate::store::DataStore;

pub fn load_files<S: DataStore>(store: &S) -> Result<Files> {
    Ok(store.get()?.files)
}

pub fn persist<S: DataStore>(store: &mut S, files: Files) -> Result<Files> {
    let document = Document::new(files);
    store.set(&document)?;
    Ok(document.files)
}

/// Name of the file holding the quote with `quote_id`, if any.
pub fn owner_of(files: &Files, quote_id: &str) -> Option<String> {
    files
        .iter()
        .find(|(_, file)| file.quotes.iter().any(|q| q.id == quote_id))
        .map(|(name, _)| name.clone())
}

/// Drop files whose last quote is gone.
pub fn prune_empty(files: &mut Files) {
    files.retain(|_, file| !file.quotes.is_empty());
}
