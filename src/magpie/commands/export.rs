use crate::commands::{CmdMessage, CmdResult};
use crate::dates::format_long;
use crate::error::{MagpieError, Result};
use crate::model::{ListedQuote, QuoteFile};
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::group::group_first_seen;
use super::helpers::load_files;
use super::save::sanitize_file_name;

/// Markdown for one file. Output depends only on the input.
pub fn render(file_name: &str, file: &QuoteFile, grouped: bool) -> String {
    let mut md = format!("# {}\n\n", file_name);
    if grouped {
        render_grouped(&mut md, file_name, file);
    } else {
        render_flat(&mut md, file);
    }
    md
}

fn render_flat(md: &mut String, file: &QuoteFile) {
    for quote in &file.quotes {
        let title = if quote.title.is_empty() {
            "Link"
        } else {
            &quote.title
        };
        md.push_str("---\n\n");
        md.push_str(&block_quote(&quote.text));
        md.push_str(&format!("**Source:** [{}]({})\n", title, quote.url));
        md.push_str(&format!("**Saved:** {}\n\n", format_long(&quote.saved_at)));
    }
}

fn render_grouped(md: &mut String, file_name: &str, file: &QuoteFile) {
    let listed: Vec<ListedQuote> = file
        .quotes
        .iter()
        .map(|quote| ListedQuote {
            file_name: file_name.to_string(),
            quote: quote.clone(),
        })
        .collect();

    for group in group_first_seen(&listed) {
        let Some(first) = group.quotes.first() else {
            continue;
        };
        let title = if first.quote.title.is_empty() {
            "Source"
        } else {
            &first.quote.title
        };
        md.push_str(&format!("## {}\n", title));
        md.push_str(&format!("[Source]({})\n\n", first.quote.url));
        for lq in &group.quotes {
            md.push_str(&block_quote(&lq.quote.text));
        }
    }
}

fn block_quote(text: &str) -> String {
    format!("> {}\n\n", text.split('\n').collect::<Vec<_>>().join("\n> "))
}

/// Artifact name for an exported file.
pub fn export_filename(file_name: &str) -> String {
    format!("{}.md", file_name)
}

/// Stored keys come from a hand-editable document; only names that survive
/// sanitizing unchanged may become a path inside `out_dir`.
fn checked_name(file_name: &str) -> Result<&str> {
    if file_name.is_empty() || sanitize_file_name(file_name) != file_name {
        return Err(MagpieError::InvalidFileName(file_name.to_string()));
    }
    Ok(file_name)
}

fn write_export(out_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let file_name = checked_name(file_name)?;
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(MagpieError::Io)?;
    }
    let path = out_dir.join(export_filename(file_name));
    fs::write(&path, content).map_err(MagpieError::Io)?;
    info!(file = %file_name, path = %path.display(), "exported");
    Ok(path)
}

/// Export one file to `{out_dir}/{file_name}.md`.
pub fn run<S: DataStore>(
    store: &S,
    file_name: &str,
    grouped: bool,
    out_dir: &Path,
) -> Result<CmdResult> {
    let files = load_files(store)?;
    let file = files
        .get(file_name)
        .ok_or_else(|| MagpieError::Api(format!("File not found: {}", file_name)))?;

    let path = write_export(out_dir, file_name, &render(file_name, file, grouped))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
    Ok(result.with_exported_paths(vec![path]))
}

/// Export every file, one markdown document each.
pub fn run_all<S: DataStore>(store: &S, grouped: bool, out_dir: &Path) -> Result<CmdResult> {
    let files = load_files(store)?;
    if files.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No files to export."));
        return Ok(res);
    }

    let mut result = CmdResult::default();
    let mut paths = Vec::with_capacity(files.len());
    for (name, file) in &files {
        if checked_name(name).is_err() {
            warn!(file = %name, "skipping export of unsafe file name");
            result.add_message(CmdMessage::warning(format!(
                "Skipped \"{}\": not a valid file name",
                name
            )));
            continue;
        }
        let path = write_export(out_dir, name, &render(name, file, grouped))?;
        result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
        paths.push(path);
    }
    Ok(result.with_exported_paths(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quote;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    fn quote(id: &str, text: &str, url: &str, title: &str) -> Quote {
        Quote {
            id: id.into(),
            text: text.into(),
            url: url.into(),
            title: title.into(),
            saved_at: "2024-01-05T10:30:00.000Z".into(),
        }
    }

    fn sample_file() -> QuoteFile {
        QuoteFile {
            name: "Reading".into(),
            created_at: "2024-01-01T00:00:00.000Z".into(),
            quotes: vec![
                quote("1", "First line\nsecond line", "https://a.com/p?x=1", "Page A"),
                quote("2", "Elsewhere", "https://b.com/", ""),
                quote("3", "Again A", "https://a.com/p#frag", "Page A (later)"),
            ],
        }
    }

    #[test]
    fn renders_flat() {
        let md = render("Reading", &sample_file(), false);
        let expected = "# Reading\n\n\
            ---\n\n\
            > First line\n> second line\n\n\
            **Source:** [Page A](https://a.com/p?x=1)\n\
            **Saved:** January 5, 2024\n\n\
            ---\n\n\
            > Elsewhere\n\n\
            **Source:** [Link](https://b.com/)\n\
            **Saved:** January 5, 2024\n\n\
            ---\n\n\
            > Again A\n\n\
            **Source:** [Page A (later)](https://a.com/p#frag)\n\
            **Saved:** January 5, 2024\n\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn renders_grouped() {
        let md = render("Reading", &sample_file(), true);
        let expected = "# Reading\n\n\
            ## Page A\n\
            [Source](https://a.com/p?x=1)\n\n\
            > First line\n> second line\n\n\
            > Again A\n\n\
            ## Source\n\
            [Source](https://b.com/)\n\n\
            > Elsewhere\n\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn invalid_dates_render_as_text() {
        let mut file = sample_file();
        file.quotes.truncate(1);
        file.quotes[0].saved_at = "whenever".into();
        let md = render("Reading", &file, false);
        assert!(md.contains("**Saved:** Invalid Date\n"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let file = sample_file();
        assert_eq!(render("R", &file, true), render("R", &file, true));
        assert_eq!(render("R", &file, false), render("R", &file, false));
    }

    #[test]
    fn writes_named_artifact() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().with_quotes("My Notes", 2).build();

        let result = run(&store, "My Notes", false, dir.path()).unwrap();
        let path = dir.path().join("My Notes.md");
        assert_eq!(result.exported_paths, vec![path.clone()]);
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# My Notes\n\n---\n\n> Quote 1 of My Notes\n\n"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().build();
        let err = run(&store, "Ghost", true, dir.path()).unwrap_err();
        assert!(matches!(err, MagpieError::Api(_)));
    }

    #[test]
    fn exports_every_file() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new()
            .with_quotes("A", 1)
            .with_quotes("B", 2)
            .build();

        let result = run_all(&store, true, dir.path()).unwrap();
        assert_eq!(result.exported_paths.len(), 2);
        assert!(dir.path().join("A.md").exists());
        assert!(dir.path().join("B.md").exists());
    }

    #[test]
    fn export_all_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().build();
        let result = run_all(&store, true, dir.path()).unwrap();
        assert!(result.exported_paths.is_empty());
        assert_eq!(result.messages[0].content, "No files to export.");
    }

    #[test]
    fn refuses_names_that_escape_out_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let store = StoreFixture::new()
            .with_quotes("../escape", 1)
            .with_quotes("Safe", 1)
            .build();

        let err = run(&store, "../escape", false, &out).unwrap_err();
        assert!(matches!(err, MagpieError::InvalidFileName(_)));
        assert!(!dir.path().join("escape.md").exists());

        let result = run_all(&store, false, &out).unwrap();
        assert_eq!(result.exported_paths, vec![out.join("Safe.md")]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("../escape")));
        assert!(!dir.path().join("escape.md").exists());
    }
}
