//! # Storage Layer
//!
//! The whole persisted state is one [`Document`] stored under a single key.
//! [`DataStore`] is the only way the rest of the crate touches it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The document lives in `data.json` inside the data directory
//!   - Writes go to a temporary file that is renamed over `data.json`
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts round trips and can simulate failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/magpie/
//! ├── data.json     # {"files": {"<name>": {"name", "createdAt", "quotes": [...]}}}
//! └── config.json   # Configuration
//! ```
//!
//! There are no partial updates and no version field: every mutation reads the
//! full document and writes it back. Two processes writing at the same time
//! resolve as last writer wins.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DataStore {
    /// Read the full document. A store that was never written yields an empty one.
    fn get(&self) -> Result<Document>;

    /// Replace the full document.
    fn set(&mut self, document: &Document) -> Result<()>;
}
