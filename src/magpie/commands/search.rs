use crate::commands::{pluralize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListedQuote;
use crate::store::DataStore;

use super::group::group_by_source;
use super::helpers::load_files;
use super::list::flatten_quotes;

/// Viewer query. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    pub search_term: String,
    pub file_name: String,
}

impl QuoteFilter {
    pub fn new(search_term: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            file_name: file_name.into(),
        }
    }
}

/// Case-insensitive substring match on text, title or file name, ANDed with
/// exact file-name equality. Input order is preserved.
pub fn search(quotes: &[ListedQuote], search_term: &str, file_filter: &str) -> Vec<ListedQuote> {
    let term = search_term.to_lowercase();

    quotes
        .iter()
        .filter(|lq| {
            let matches_search = term.is_empty()
                || lq.quote.text.to_lowercase().contains(&term)
                || lq.quote.title.to_lowercase().contains(&term)
                || lq.file_name.to_lowercase().contains(&term);
            let matches_file = file_filter.is_empty() || lq.file_name == file_filter;
            matches_search && matches_file
        })
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(store: &S, filter: &QuoteFilter) -> Result<CmdResult> {
    let files = load_files(store)?;
    let all = flatten_quotes(&files);
    let matched = search(&all, &filter.search_term, &filter.file_name);
    let groups = group_by_source(&matched);

    let mut result = CmdResult::default()
        .with_groups(groups)
        .with_listed_quotes(matched)
        .with_files(files);
    if result.listed_quotes.len() != all.len() {
        result.add_message(CmdMessage::info(format!(
            "{} of {}",
            result.listed_quotes.len(),
            pluralize(all.len(), "quote")
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        StoreFixture::new()
            .with_quote(
                "Rust",
                "r1",
                "Ownership rules",
                "https://doc.rust-lang.org/book",
                "2024-01-03T00:00:00.000Z",
            )
            .with_quote(
                "Rust",
                "r2",
                "Borrowing",
                "https://doc.rust-lang.org/book?ch=4",
                "2024-01-02T00:00:00.000Z",
            )
            .with_quote(
                "Cooking",
                "c1",
                "Salt early",
                "https://food.com/salt",
                "2024-01-04T00:00:00.000Z",
            )
            .with_quote(
                "Misc",
                "m1",
                "rusty nail",
                "https://hardware.com/",
                "2024-01-01T00:00:00.000Z",
            )
            .build()
    }

    fn ids(quotes: &[ListedQuote]) -> Vec<&str> {
        quotes.iter().map(|lq| lq.quote.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_newest_first() {
        let result = run(&store(), &QuoteFilter::default()).unwrap();
        assert_eq!(ids(&result.listed_quotes), vec!["c1", "r1", "r2", "m1"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn matches_text_title_or_file_name() {
        let all = flatten_quotes(&store().document().files);

        // file name "Rust" and text "rusty"
        assert_eq!(ids(&search(&all, "RUST", "")), vec!["r1", "r2", "m1"]);
        // title of fixture quotes embeds the url
        assert_eq!(ids(&search(&all, "food.com", "")), vec!["c1"]);
        assert_eq!(ids(&search(&all, "salt", "")), vec!["c1"]);
        assert!(search(&all, "nothing here", "").is_empty());
    }

    #[test]
    fn file_filter_is_exact_and_anded() {
        let all = flatten_quotes(&store().document().files);
        assert_eq!(ids(&search(&all, "", "Rust")), vec!["r1", "r2"]);
        assert!(search(&all, "", "rust").is_empty());
        assert_eq!(ids(&search(&all, "borrow", "Rust")), vec!["r2"]);
        assert!(search(&all, "salt", "Rust").is_empty());
    }

    #[test]
    fn run_groups_matches_by_source() {
        let result = run(&store(), &QuoteFilter::new("", "Rust")).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].source_key, "https://doc.rust-lang.org/book");
        assert_eq!(result.groups[0].quotes.len(), 2);
        assert_eq!(result.messages[0].content, "2 of 4 quotes");
    }
}
