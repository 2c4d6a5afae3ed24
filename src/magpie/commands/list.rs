use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{FileSummary, Files, ListedQuote};
use crate::store::DataStore;
use std::cmp::Reverse;

use super::helpers::load_files;

/// File names, lexicographically sorted.
pub fn list_file_names(files: &Files) -> Vec<String> {
    let mut names: Vec<String> = files.keys().cloned().collect();
    names.sort();
    names
}

/// Every quote tagged with its file, newest first. Equal timestamps keep
/// document order (file order, then append order); unparseable timestamps
/// go last.
pub fn flatten_quotes(files: &Files) -> Vec<ListedQuote> {
    let mut quotes: Vec<ListedQuote> = files
        .iter()
        .flat_map(|(name, file)| {
            file.quotes.iter().map(move |quote| ListedQuote {
                file_name: name.clone(),
                quote: quote.clone(),
            })
        })
        .collect();
    quotes.sort_by_cached_key(|lq| Reverse(lq.quote.saved_at_time()));
    quotes
}

/// One summary per file, sorted by name.
pub fn summarize(files: &Files) -> Vec<FileSummary> {
    let mut summaries: Vec<FileSummary> = files
        .iter()
        .map(|(name, file)| FileSummary {
            name: name.clone(),
            quote_count: file.quotes.len(),
            created_at: file.created_at.clone(),
        })
        .collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    summaries
}

/// File manager view: names with counts.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let files = load_files(store)?;
    let summaries = summarize(&files);
    let names = list_file_names(&files);
    Ok(CmdResult::default()
        .with_summaries(summaries)
        .with_file_names(names)
        .with_files(files))
}

/// Quotes of a single file in stored order.
pub fn run_file<S: DataStore>(store: &S, file_name: &str) -> Result<CmdResult> {
    let files = load_files(store)?;
    let listed = files
        .get(file_name)
        .map(|file| {
            file.quotes
                .iter()
                .map(|quote| ListedQuote {
                    file_name: file_name.to_string(),
                    quote: quote.clone(),
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(CmdResult::default().with_listed_quotes(listed))
}
