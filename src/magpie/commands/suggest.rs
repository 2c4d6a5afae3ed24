use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_files;
use super::list::list_file_names;

/// File-name choices for a partially typed name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestions {
    /// Existing names containing the input, case-insensitively, sorted.
    pub names: Vec<String>,
    /// The input itself when it would create a new file.
    pub create_new: Option<String>,
}

pub fn suggest(existing: &[String], input: &str) -> Suggestions {
    let needle = input.to_lowercase();
    let names = existing
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    let create_new = if !input.is_empty() && !existing.iter().any(|name| name == input) {
        Some(input.to_string())
    } else {
        None
    };
    Suggestions { names, create_new }
}

pub fn run<S: DataStore>(store: &S, input: &str) -> Result<Suggestions> {
    let files = load_files(store)?;
    Ok(suggest(&list_file_names(&files), input))
}
