use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MagpieError, Result};
use crate::model::{Files, Quote, QuoteFile};
use crate::store::DataStore;
use tracing::info;

use super::helpers::{load_files, persist};

/// Whitespace allowed in file names: the space separators, ASCII tab/line
/// controls, U+2028/U+2029 and U+FEFF. U+0085 is not whitespace here, unlike
/// `char::is_whitespace`.
fn is_name_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Keep ASCII letters, digits, `-`, `_` and whitespace, then trim.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || is_name_whitespace(c))
        .collect::<String>()
        .trim_matches(is_name_whitespace)
        .to_string()
}

/// Append a quote to `file_name` in `files`, creating the file when needed.
pub fn append_quote(
    files: &mut Files,
    file_name: &str,
    text: &str,
    url: &str,
    title: &str,
) -> Result<(String, Quote)> {
    let name = sanitize_file_name(file_name);
    if name.is_empty() {
        return Err(MagpieError::InvalidFileName(file_name.to_string()));
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(MagpieError::InvalidQuoteText);
    }

    let quote = Quote::new(text.to_string(), url.to_string(), title.to_string());
    files
        .entry(name.clone())
        .or_insert_with(|| QuoteFile::new(name.clone()))
        .quotes
        .push(quote.clone());

    Ok((name, quote))
}

pub fn run<S: DataStore>(
    store: &mut S,
    file_name: &str,
    text: &str,
    url: &str,
    title: &str,
) -> Result<CmdResult> {
    let mut files = load_files(store)?;
    let (name, quote) = append_quote(&mut files, file_name, text, url, title)?;
    let files = persist(store, files)?;
    info!(file = %name, id = %quote.id, "quote saved");

    let mut result = CmdResult::default()
        .with_files(files)
        .with_saved_quote(quote);
    result.add_message(CmdMessage::success(format!("Saved to \"{}\"", name)));
    Ok(result)
}

/// Save through the same contract into the fallback file.
pub fn run_unsorted<S: DataStore>(
    store: &mut S,
    fallback_file: &str,
    text: &str,
    url: &str,
    title: &str,
) -> Result<CmdResult> {
    run(store, fallback_file, text, url, title)
}
