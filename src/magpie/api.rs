//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all magpie operations, regardless of the UI in front of it.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills in configured defaults** (fallback file, export grouping, export directory)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no state besides the store handle: every call
//! reloads the document, so a long-lived API never serves a stale copy.
//!
//! `MagpieApi<S: DataStore>` is generic over the storage backend:
//! - Production: `MagpieApi<FileStore>`
//! - Testing: `MagpieApi<InMemoryStore>`

use crate::commands;
use crate::commands::confirm::{Confirmation, PendingAction};
use crate::commands::helpers::{load_files, owner_of};
use crate::config::MagpieConfig;
use crate::error::{MagpieError, Result};
use crate::model::Files;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for magpie operations.
pub struct MagpieApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> MagpieApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_config(&self) -> Result<MagpieConfig> {
        MagpieConfig::load(&self.config_dir)
    }

    pub fn load_all(&self) -> Result<Files> {
        load_files(&self.store)
    }

    pub fn list_files(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_file(&self, file_name: &str) -> Result<commands::CmdResult> {
        commands::list::run_file(&self.store, file_name)
    }

    pub fn list_quotes(&self, filter: &QuoteFilter) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, filter)
    }

    pub fn suggest(&self, input: &str) -> Result<Suggestions> {
        commands::suggest::run(&self.store, input)
    }

    pub fn save_quote(
        &mut self,
        file_name: &str,
        text: &str,
        url: &str,
        title: &str,
    ) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, file_name, text, url, title)
    }

    /// Save into the configured fallback file.
    pub fn save_unsorted(
        &mut self,
        text: &str,
        url: &str,
        title: &str,
    ) -> Result<commands::CmdResult> {
        let config = self.load_config()?;
        commands::save::run_unsorted(&mut self.store, &config.default_file, text, url, title)
    }

    pub fn delete_quote(&mut self, file_name: &str, quote_id: &str) -> Result<commands::CmdResult> {
        commands::delete::run_quote(&mut self.store, file_name, quote_id)
    }

    pub fn delete_quotes<I: AsRef<str>>(&mut self, quote_ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run_quotes(&mut self.store, quote_ids)
    }

    pub fn delete_file(&mut self, file_name: &str) -> Result<commands::CmdResult> {
        commands::delete::run_file(&mut self.store, file_name)
    }

    pub fn delete_files<I: AsRef<str>>(&mut self, file_names: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run_files(&mut self.store, file_names)
    }

    pub fn delete_all(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run_all(&mut self.store)
    }

    /// Build the pending action for deleting quotes by id. A single id is
    /// resolved to its owning file.
    pub fn quote_deletion<I: AsRef<str>>(&self, quote_ids: &[I]) -> Result<PendingAction> {
        if let [only] = quote_ids {
            let files = load_files(&self.store)?;
            if let Some(file_name) = owner_of(&files, only.as_ref()) {
                return Ok(PendingAction::DeleteQuote {
                    file_name,
                    quote_id: only.as_ref().to_string(),
                });
            }
        }
        Ok(PendingAction::DeleteQuotes(
            quote_ids.iter().map(|id| id.as_ref().to_string()).collect(),
        ))
    }

    pub fn confirmation(&self, action: PendingAction) -> Result<Option<Confirmation>> {
        commands::confirm::confirmation(&self.store, action)
    }

    pub fn apply(&mut self, action: &PendingAction) -> Result<commands::CmdResult> {
        commands::confirm::apply(&mut self.store, action)
    }

    /// Markdown for one file; `grouped` falls back to the configured default.
    pub fn render_markdown(&self, file_name: &str, grouped: Option<bool>) -> Result<String> {
        let grouped = self.resolve_grouping(grouped)?;
        let files = load_files(&self.store)?;
        let file = files
            .get(file_name)
            .ok_or_else(|| MagpieError::Api(format!("File not found: {}", file_name)))?;
        Ok(commands::export::render(file_name, file, grouped))
    }

    pub fn export(
        &self,
        file_name: &str,
        grouped: Option<bool>,
        out_dir: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let grouped = self.resolve_grouping(grouped)?;
        let out_dir = self.resolve_out_dir(out_dir)?;
        commands::export::run(&self.store, file_name, grouped, &out_dir)
    }

    pub fn export_all(
        &self,
        grouped: Option<bool>,
        out_dir: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let grouped = self.resolve_grouping(grouped)?;
        let out_dir = self.resolve_out_dir(out_dir)?;
        commands::export::run_all(&self.store, grouped, &out_dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn resolve_grouping(&self, grouped: Option<bool>) -> Result<bool> {
        match grouped {
            Some(g) => Ok(g),
            None => Ok(self.load_config()?.group_exports),
        }
    }

    fn resolve_out_dir(&self, out_dir: Option<&Path>) -> Result<PathBuf> {
        match out_dir {
            Some(dir) => Ok(dir.to_path_buf()),
            None => Ok(self.load_config()?.export_dir_or_cwd()),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::QuoteFilter;
pub use crate::commands::suggest::Suggestions;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
