use crate::commands::{pluralize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Files;
use crate::store::DataStore;
use tracing::{info, warn};

use super::helpers::{load_files, owner_of, persist, prune_empty};

/// Remove a quote from `files`. Returns whether anything was removed.
pub fn remove_quote(files: &mut Files, file_name: &str, quote_id: &str) -> bool {
    let Some(file) = files.get_mut(file_name) else {
        return false;
    };
    let before = file.quotes.len();
    file.quotes.retain(|q| q.id != quote_id);
    let removed = file.quotes.len() != before;
    prune_empty(files);
    removed
}

/// Delete one quote. Missing file or id is a successful no-op, and the
/// document is still written back.
pub fn run_quote<S: DataStore>(
    store: &mut S,
    file_name: &str,
    quote_id: &str,
) -> Result<CmdResult> {
    let mut files = load_files(store)?;
    let removed = remove_quote(&mut files, file_name, quote_id);
    let files = persist(store, files)?;

    let mut result = CmdResult::default().with_files(files);
    if removed {
        info!(file = %file_name, id = %quote_id, "quote deleted");
        result.add_message(CmdMessage::success(format!(
            "Quote deleted from \"{}\"",
            file_name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No quote {} in \"{}\"",
            quote_id, file_name
        )));
    }
    Ok(result)
}

/// Delete quotes by id wherever they live. Owners are resolved once from a
/// single snapshot, then each quote gets its own read-modify-write.
pub fn run_quotes<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    quote_ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let snapshot = load_files(store)?;
    let mut deleted = 0;

    for id in quote_ids {
        let id = id.as_ref();
        let Some(owner) = owner_of(&snapshot, id) else {
            warn!(id = %id, "quote not found, skipping");
            result.add_message(CmdMessage::warning(format!("Quote not found: {}", id)));
            continue;
        };
        let step = run_quote(store, &owner, id)?;
        result.files = step.files;
        deleted += 1;
    }

    if deleted == 0 {
        result.files = snapshot;
    } else {
        result.add_message(CmdMessage::success(format!(
            "Deleted {}",
            pluralize(deleted, "quote")
        )));
    }
    Ok(result)
}

/// Delete a whole file. Missing file is a successful no-op.
pub fn run_file<S: DataStore>(store: &mut S, file_name: &str) -> Result<CmdResult> {
    run_files(store, &[file_name])
}

/// Delete several files with a single write.
pub fn run_files<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    file_names: &[I],
) -> Result<CmdResult> {
    let mut files = load_files(store)?;
    let mut result = CmdResult::default();

    for name in file_names {
        let name = name.as_ref();
        match files.shift_remove(name) {
            Some(file) => {
                info!(file = %name, quotes = file.quotes.len(), "file deleted");
                result.add_message(CmdMessage::success(format!(
                    "Deleted \"{}\" ({})",
                    name,
                    pluralize(file.quotes.len(), "quote")
                )));
            }
            None => {
                result.add_message(CmdMessage::info(format!("No file named \"{}\"", name)));
            }
        }
    }

    result.files = persist(store, files)?;
    Ok(result)
}

/// Replace the document with an empty mapping.
pub fn run_all<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let previous = load_files(store)?;
    let quote_count: usize = previous.values().map(|f| f.quotes.len()).sum();
    let files = persist(store, Files::new())?;
    info!(files = previous.len(), quotes = quote_count, "store cleared");

    let mut result = CmdResult::default().with_files(files);
    result.add_message(CmdMessage::success(format!(
        "Deleted {} and {}",
        pluralize(previous.len(), "file"),
        pluralize(quote_count, "quote")
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list::flatten_quotes;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_a_quote() {
        let mut store = StoreFixture::new().with_quotes("Work", 2).build();
        let result = run_quote(&mut store, "Work", "work-1").unwrap();

        let file = &store.document().files["Work"];
        assert_eq!(file.quotes.len(), 1);
        assert_eq!(file.quotes[0].id, "work-2");
        assert_eq!(result.files, store.document().files);
    }

    #[test]
    fn deleting_last_quote_removes_file() {
        let mut store = StoreFixture::new()
            .with_quotes("Solo", 1)
            .with_quotes("Other", 1)
            .build();
        run_quote(&mut store, "Solo", "solo-1").unwrap();

        assert!(!store.document().files.contains_key("Solo"));
        assert!(flatten_quotes(&store.document().files)
            .iter()
            .all(|lq| lq.file_name != "Solo"));
    }

    #[test]
    fn missing_quote_or_file_is_not_an_error() {
        let mut store = StoreFixture::new().with_quotes("Work", 1).build();
        run_quote(&mut store, "Work", "nope").unwrap();
        run_quote(&mut store, "Ghost", "work-1").unwrap();
        assert_eq!(store.document().files["Work"].quotes.len(), 1);
    }

    #[test]
    fn single_delete_is_one_round_trip() {
        let mut store = StoreFixture::new().with_quotes("Work", 2).build();
        run_quote(&mut store, "Work", "work-1").unwrap();
        assert_eq!(store.reads(), 1);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn batch_delete_across_files() {
        let mut store = StoreFixture::new()
            .with_quote("fileA", "id1", "a", "", "2024-01-01T00:00:00.000Z")
            .with_quote("fileB", "id2", "b", "", "2024-01-01T00:00:00.000Z")
            .with_quote("fileB", "id3", "c", "", "2024-01-01T00:00:00.000Z")
            .build();
        let result = run_quotes(&mut store, &["id1", "id2"]).unwrap();

        let files = &store.document().files;
        assert!(!files.contains_key("fileA"));
        assert_eq!(files["fileB"].quotes.len(), 1);
        assert_eq!(files["fileB"].quotes[0].id, "id3");
        assert_eq!(result.files, *files);
        // one snapshot for owner lookup, then one get/set per quote
        assert_eq!(store.reads(), 3);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn batch_delete_skips_unknown_ids() {
        let mut store = StoreFixture::new().with_quotes("Work", 2).build();
        let result = run_quotes(&mut store, &["ghost", "work-2"]).unwrap();
        assert_eq!(store.document().files["Work"].quotes.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Quote not found: ghost"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn deletes_files() {
        let mut store = StoreFixture::new()
            .with_quotes("A", 2)
            .with_quotes("B", 1)
            .with_quotes("C", 1)
            .build();
        run_files(&mut store, &["A", "C", "missing"]).unwrap();

        let names: Vec<&String> = store.document().files.keys().collect();
        assert_eq!(names, vec!["B"]);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn deleting_missing_file_is_a_no_op() {
        let mut store = StoreFixture::new().with_quotes("A", 1).build();
        run_file(&mut store, "Nope").unwrap();
        assert!(store.document().files.contains_key("A"));
    }

    #[test]
    fn delete_all_empties_the_store() {
        let mut store = StoreFixture::new()
            .with_quotes("A", 4)
            .with_quotes("B", 3)
            .with_quotes("C", 3)
            .build();
        let result = run_all(&mut store).unwrap();

        assert!(store.document().files.is_empty());
        assert!(result.files.is_empty());
        assert_eq!(result.messages[0].content, "Deleted 3 files and 10 quotes");
    }
}
