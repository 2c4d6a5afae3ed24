use crate::config::MagpieConfig;
use crate::model::{FileSummary, Files, ListedQuote, Quote, SourceGroup};
use std::path::PathBuf;

pub mod config;
pub mod confirm;
pub mod delete;
pub mod export;
pub mod group;
pub mod helpers;
pub mod list;
pub mod save;
pub mod search;
pub mod suggest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Store contents after the command ran.
    pub files: Files,
    pub saved_quote: Option<Quote>,
    pub listed_quotes: Vec<ListedQuote>,
    pub groups: Vec<SourceGroup>,
    pub summaries: Vec<FileSummary>,
    pub file_names: Vec<String>,
    pub exported_paths: Vec<PathBuf>,
    pub config: Option<MagpieConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_files(mut self, files: Files) -> Self {
        self.files = files;
        self
    }

    pub fn with_saved_quote(mut self, quote: Quote) -> Self {
        self.saved_quote = Some(quote);
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<ListedQuote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_groups(mut self, groups: Vec<SourceGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_summaries(mut self, summaries: Vec<FileSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_file_names(mut self, names: Vec<String>) -> Self {
        self.file_names = names;
        self
    }

    pub fn with_exported_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.exported_paths = paths;
        self
    }

    pub fn with_config(mut self, config: MagpieConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// `1 quote`, `2 quotes`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_counts() {
        assert_eq!(pluralize(0, "quote"), "0 quotes");
        assert_eq!(pluralize(1, "quote"), "1 quote");
        assert_eq!(pluralize(3, "file"), "3 files");
    }
}
