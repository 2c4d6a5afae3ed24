use magpie::api::{MagpieApi, QuoteFilter};
use magpie::commands::group::source_key;
use magpie::store::fs::FileStore;
use tempfile::TempDir;

fn api() -> (TempDir, MagpieApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    let api = MagpieApi::new(store, dir.path().join("data"));
    (dir, api)
}

#[test]
fn append_then_load_all() {
    let (_dir, mut api) = api();
    let result = api
        .save_quote("My Notes", "Hello world", "https://a.com/p?x=1#y", "Page A")
        .unwrap();
    let quote = result.saved_quote.unwrap();

    let files = api.load_all().unwrap();
    assert_eq!(files.len(), 1);
    let file = &files["My Notes"];
    assert_eq!(file.quotes, vec![quote.clone()]);
    assert_eq!(source_key(&quote.url), "https://a.com/p");
}

#[test]
fn delete_all_on_populated_store() {
    let (_dir, mut api) = api();
    for i in 0..10 {
        let file = ["A", "B", "C"][i % 3];
        api.save_quote(file, &format!("quote {}", i), "", "").unwrap();
    }
    assert_eq!(api.load_all().unwrap().len(), 3);

    api.delete_all().unwrap();
    assert!(api.load_all().unwrap().is_empty());
}

#[test]
fn batch_delete_across_files() {
    let (_dir, mut api) = api();
    let id1 = api
        .save_quote("fileA", "a", "", "")
        .unwrap()
        .saved_quote
        .unwrap()
        .id;
    let id2 = api
        .save_quote("fileB", "b", "", "")
        .unwrap()
        .saved_quote
        .unwrap()
        .id;
    api.save_quote("fileB", "c", "", "").unwrap();

    api.delete_quotes(&[id1, id2]).unwrap();

    let files = api.load_all().unwrap();
    assert!(!files.contains_key("fileA"));
    assert_eq!(files["fileB"].quotes.len(), 1);
    assert_eq!(files["fileB"].quotes[0].text, "c");
}

#[test]
fn empty_search_returns_everything_newest_first() {
    let (_dir, mut api) = api();
    api.save_quote("A", "first", "", "").unwrap();
    api.save_quote("B", "second", "", "").unwrap();
    api.save_quote("A", "third", "", "").unwrap();

    let result = api.list_quotes(&QuoteFilter::default()).unwrap();
    assert_eq!(result.listed_quotes.len(), 3);
    let times: Vec<_> = result
        .listed_quotes
        .iter()
        .map(|lq| lq.quote.saved_at_time().unwrap())
        .collect();
    assert!(times.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn reloads_document_written_elsewhere() {
    let (dir, api) = api();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data").join("data.json"),
        r#"{"files":{"Ext":{"name":"Ext","createdAt":"2024-01-01T00:00:00.000Z","quotes":[
            {"id":"lq1x","text":"from the extension","url":"https://e.com/a?b","title":"E","savedAt":"2024-01-02T00:00:00.000Z"}
        ]}}}"#,
    )
    .unwrap();

    let result = api.list_quotes(&QuoteFilter::new("extension", "")).unwrap();
    assert_eq!(result.listed_quotes.len(), 1);
    assert_eq!(result.groups[0].source_key, "https://e.com/a");
}
