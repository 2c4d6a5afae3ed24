use super::print::{
    print_confirmation, print_file, print_groups, print_messages, print_quotes, print_suggestions,
    print_summaries,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use magpie::api::{ConfigAction, MagpieApi, QuoteFilter};
use magpie::commands::confirm::PendingAction;
use magpie::commands::config::get_value;
use magpie::error::{MagpieError, Result};
use magpie::store::fs::FileStore;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HOME_ENV: &str = "MAGPIE_HOME";

struct AppContext {
    api: MagpieApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Save {
            file,
            url,
            title,
            text,
        }) => handle_save(&mut ctx, file, url, title, text),
        Some(Commands::Files) | None => handle_files(&ctx),
        Some(Commands::List { search, file, flat }) => handle_list(&ctx, search, file, flat),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Suggest { input }) => handle_suggest(&ctx, &input),
        Some(Commands::Delete { ids, yes }) => {
            let action = ctx.api.quote_deletion(&ids)?;
            handle_destructive(&mut ctx, action, yes)
        }
        Some(Commands::DeleteFile { names, yes }) => {
            let action = if names.len() == 1 {
                PendingAction::DeleteFile(names[0].clone())
            } else {
                PendingAction::DeleteFiles(names)
            };
            handle_destructive(&mut ctx, action, yes)
        }
        Some(Commands::DeleteAll { yes }) => {
            handle_destructive(&mut ctx, PendingAction::DeleteAll, yes)
        }
        Some(Commands::Export {
            name,
            all,
            grouped,
            flat,
            out,
            stdout,
        }) => {
            let grouping = match (grouped, flat) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            handle_export(&ctx, name, all, grouping, out, stdout)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "magpie=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "magpie", "magpie")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MagpieError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = data_dir(cli)?;
    debug!(data_dir = %root.display(), "using data directory");

    let store = FileStore::new(root.clone());
    Ok(AppContext {
        api: MagpieApi::new(store, root),
    })
}

fn handle_save(
    ctx: &mut AppContext,
    file: Option<String>,
    url: String,
    title: String,
    text: Vec<String>,
) -> Result<()> {
    let mut text = text.join(" ");

    if text.trim().is_empty() && !io::stdin().is_terminal() {
        text.clear();
        io::stdin().read_to_string(&mut text).map_err(MagpieError::Io)?;
    }

    let result = match file {
        Some(name) => ctx.api.save_quote(&name, &text, &url, &title)?,
        None => ctx.api.save_unsorted(&text, &url, &title)?,
    };
    print_messages(&result.messages);
    if let Some(quote) = &result.saved_quote {
        println!("{}", quote.id);
    }
    Ok(())
}

fn handle_files(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_files()?;
    print_summaries(&result.summaries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: String, file: String, flat: bool) -> Result<()> {
    let filter = QuoteFilter::new(search, file);
    let result = ctx.api.list_quotes(&filter)?;
    if flat {
        print_quotes(&result.listed_quotes);
    } else {
        print_groups(&result.groups);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show_file(name)?;
    print_file(name, &result.listed_quotes);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, input: &str) -> Result<()> {
    let suggestions = ctx.api.suggest(input)?;
    print_suggestions(&suggestions);
    Ok(())
}

fn handle_destructive(ctx: &mut AppContext, action: PendingAction, yes: bool) -> Result<()> {
    let Some(confirmation) = ctx.api.confirmation(action)? else {
        println!("Nothing to delete.");
        return Ok(());
    };

    if !yes {
        print_confirmation(&confirmation);
        print!("[y/N] ");
        io::stdout().flush().map_err(MagpieError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(MagpieError::Io)?;
        if !matches!(input.trim(), "y" | "Y" | "yes") {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.apply(&confirmation.action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    name: Option<String>,
    all: bool,
    grouped: Option<bool>,
    out: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let result = match (all, name) {
        (true, _) => ctx.api.export_all(grouped, out.as_deref())?,
        (false, Some(name)) if stdout => {
            print!("{}", ctx.api.render_markdown(&name, grouped)?);
            return Ok(());
        }
        (false, Some(name)) => ctx.api.export(&name, grouped, out.as_deref())?,
        (false, None) => {
            return Err(MagpieError::Api(
                "Name a file to export or pass --all".to_string(),
            ))
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in magpie::commands::config::KEYS {
                println!("{} = {}", key, get_value(config, key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
