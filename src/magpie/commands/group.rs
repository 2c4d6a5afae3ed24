use crate::model::{ListedQuote, SourceGroup};
use url::Url;

/// Origin plus path of `raw`, without query or fragment. Input that does not
/// parse as a URL is its own key.
pub fn source_key(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => format!("{}{}", url.origin().ascii_serialization(), url.path()),
        Err(_) => raw.to_string(),
    }
}

/// Partition by source key, keeping groups in first-seen order and quotes in
/// input order.
pub fn group_first_seen(quotes: &[ListedQuote]) -> Vec<SourceGroup> {
    let mut groups: Vec<SourceGroup> = Vec::new();
    for lq in quotes {
        let key = source_key(&lq.quote.url);
        match groups.iter_mut().find(|g| g.source_key == key) {
            Some(group) => group.quotes.push(lq.clone()),
            None => groups.push(SourceGroup {
                source_key: key,
                quotes: vec![lq.clone()],
            }),
        }
    }
    groups
}

/// Groups ordered by size (largest first), ties by ascending key.
pub fn group_by_source(quotes: &[ListedQuote]) -> Vec<SourceGroup> {
    let mut groups = group_first_seen(quotes);
    groups.sort_by(|a, b| {
        b.quotes
            .len()
            .cmp(&a.quotes.len())
            .then_with(|| a.source_key.cmp(&b.source_key))
    });
    groups
}
