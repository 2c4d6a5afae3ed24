//! Destructive actions as values.
//!
//! A caller first asks for the [`Confirmation`] describing an action, shows it
//! however it likes, and then hands the same [`PendingAction`] to [`apply`].
//! Nothing is held between the two calls, so overlapping prompts cannot
//! overwrite each other.

use crate::commands::{pluralize, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::delete;
use super::helpers::{load_files, owner_of};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteQuote { file_name: String, quote_id: String },
    DeleteQuotes(Vec<String>),
    DeleteFile(String),
    DeleteFiles(Vec<String>),
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub action: PendingAction,
}

/// Describe `action`, or `None` when it would delete nothing.
pub fn confirmation<S: DataStore>(
    store: &S,
    action: PendingAction,
) -> Result<Option<Confirmation>> {
    let files = load_files(store)?;

    let texts = match &action {
        PendingAction::DeleteQuote {
            file_name,
            quote_id,
        } => files
            .get(file_name)
            .filter(|file| file.quotes.iter().any(|q| &q.id == quote_id))
            .map(|_| {
                (
                    "Delete quote?".to_string(),
                    "This will permanently delete this quote.".to_string(),
                )
            }),
        PendingAction::DeleteQuotes(ids) => {
            let count = ids.iter().filter(|id| owner_of(&files, id).is_some()).count();
            (count > 0).then(|| {
                (
                    format!("Delete {}?", pluralize(count, "quote")),
                    "This will permanently delete all selected quotes.".to_string(),
                )
            })
        }
        PendingAction::DeleteFile(name) => files.contains_key(name).then(|| {
            (
                "Delete file?".to_string(),
                format!(
                    "This will permanently delete \"{}\" and all its quotes.",
                    name
                ),
            )
        }),
        PendingAction::DeleteFiles(names) => {
            let count = names.iter().filter(|n| files.contains_key(*n)).count();
            (count > 0).then(|| {
                (
                    format!("Delete {}?", pluralize(count, "file")),
                    "This will permanently delete all selected files and their quotes.".to_string(),
                )
            })
        }
        PendingAction::DeleteAll => (!files.is_empty()).then(|| {
            (
                "Delete everything?".to_string(),
                format!(
                    "This will permanently delete all {} and their quotes.",
                    pluralize(files.len(), "file")
                ),
            )
        }),
    };

    Ok(texts.map(|(title, message)| Confirmation {
        title,
        message,
        action,
    }))
}

pub fn apply<S: DataStore>(store: &mut S, action: &PendingAction) -> Result<CmdResult> {
    match action {
        PendingAction::DeleteQuote {
            file_name,
            quote_id,
        } => delete::run_quote(store, file_name, quote_id),
        PendingAction::DeleteQuotes(ids) => delete::run_quotes(store, ids),
        PendingAction::DeleteFile(name) => delete::run_file(store, name),
        PendingAction::DeleteFiles(names) => delete::run_files(store, names),
        PendingAction::DeleteAll => delete::run_all(store),
    }
}
