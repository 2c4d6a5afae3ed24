use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "magpie", bin_name = "magpie", version = get_version())]
#[command(
    about = "Save quotes into named files, search them, export them as markdown",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding data.json and config.json (defaults to $MAGPIE_HOME or the user data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a quote (reads stdin when no text is given)
    #[command(alias = "s")]
    Save {
        /// Target file (falls back to the configured default file)
        #[arg(short, long)]
        file: Option<String>,

        /// Source page URL
        #[arg(long, default_value = "")]
        url: String,

        /// Source page title
        #[arg(long, default_value = "")]
        title: String,

        /// Quote text
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// List files with their quote counts
    #[command(alias = "f")]
    Files,

    /// List quotes, grouped by source page
    #[command(alias = "ls")]
    List {
        /// Only quotes whose text, title or file name contain this
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only quotes from this file
        #[arg(short, long, default_value = "")]
        file: String,

        /// Newest first, without grouping
        #[arg(long)]
        flat: bool,
    },

    /// Show the quotes of one file
    #[command(alias = "v")]
    Show {
        /// File name
        name: String,
    },

    /// Suggest existing file names for a partial name
    Suggest {
        /// Partial file name
        #[arg(default_value = "")]
        input: String,
    },

    /// Delete quotes by id
    #[command(alias = "rm")]
    Delete {
        /// Quote ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete whole files
    DeleteFile {
        /// File names
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every file and quote
    DeleteAll {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export files as markdown ({name}.md)
    Export {
        /// File to export
        #[arg(required_unless_present = "all")]
        name: Option<String>,

        /// Export every file
        #[arg(long, conflicts_with = "name")]
        all: bool,

        /// Group quotes by source page
        #[arg(long, conflicts_with = "flat")]
        grouped: bool,

        /// One entry per quote with source and date
        #[arg(long)]
        flat: bool,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print markdown to stdout instead of writing a file
        #[arg(long, conflicts_with_all = ["all", "out"])]
        stdout: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-file, group-exports, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
