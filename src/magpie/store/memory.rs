use super::DataStore;
use crate::error::{MagpieError, Result};
use crate::model::Document;
use std::cell::Cell;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `Cell` for the read counter so `get` can stay `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    document: Document,
    gets: Cell<usize>,
    sets: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of `get` calls served so far.
    pub fn reads(&self) -> usize {
        self.gets.get()
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.sets
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DataStore for InMemoryStore {
    fn get(&self) -> Result<Document> {
        if self.simulate_read_error {
            return Err(MagpieError::StoreUnavailable(
                "Simulated read error".to_string(),
            ));
        }
        self.gets.set(self.gets.get() + 1);
        Ok(self.document.clone())
    }

    fn set(&mut self, document: &Document) -> Result<()> {
        if self.simulate_write_error {
            return Err(MagpieError::StoreUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.document = document.clone();
        self.sets += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Quote, QuoteFile};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Add a quote with an explicit id and timestamp, creating the file if needed.
        pub fn with_quote(
            mut self,
            file: &str,
            id: &str,
            text: &str,
            url: &str,
            saved_at: &str,
        ) -> Self {
            let entry = self
                .store
                .document
                .files
                .entry(file.to_string())
                .or_insert_with(|| QuoteFile::new(file.to_string()));
            entry.quotes.push(Quote {
                id: id.to_string(),
                text: text.to_string(),
                url: url.to_string(),
                title: format!("Title of {}", url),
                saved_at: saved_at.to_string(),
            });
            self
        }

        /// Add `count` quotes to `file`, one day apart starting 2024-01-01.
        pub fn with_quotes(mut self, file: &str, count: usize) -> Self {
            for i in 0..count {
                let id = format!("{}-{}", file.to_lowercase().replace(' ', "-"), i + 1);
                let saved_at = format!("2024-01-{:02}T12:00:00.000Z", (i % 28) + 1);
                self = self.with_quote(
                    file,
                    &id,
                    &format!("Quote {} of {}", i + 1, file),
                    &format!("https://example.com/{}", i + 1),
                    &saved_at,
                );
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
