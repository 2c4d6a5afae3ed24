use colored::Colorize;
use magpie::api::{CmdMessage, MessageLevel, Suggestions};
use magpie::commands::confirm::Confirmation;
use magpie::commands::pluralize;
use magpie::dates::format_short;
use magpie::model::{FileSummary, ListedQuote, SourceGroup};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_summaries(summaries: &[FileSummary]) {
    if summaries.is_empty() {
        println!("No files yet.");
        return;
    }

    let name_width = summaries
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);

    for summary in summaries {
        let padding = name_width.saturating_sub(summary.name.width());
        println!(
            "  {}{}  {}",
            summary.name.bold(),
            " ".repeat(padding),
            pluralize(summary.quote_count, "quote").dimmed()
        );
    }
}

pub(super) fn print_groups(groups: &[SourceGroup]) {
    if groups.is_empty() {
        println!("No quotes found.");
        return;
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{}  {}",
            group.display_title().bold(),
            pluralize(group.quotes.len(), "quote").dimmed()
        );
        println!("{}", group.source_key.blue());
        for lq in &group.quotes {
            print_quote_line(lq);
        }
    }
}

pub(super) fn print_quotes(quotes: &[ListedQuote]) {
    if quotes.is_empty() {
        println!("No quotes found.");
        return;
    }
    for lq in quotes {
        print_quote_line(lq);
    }
}

/// Full view of one file's quotes.
pub(super) fn print_file(name: &str, quotes: &[ListedQuote]) {
    if quotes.is_empty() {
        println!("No file named \"{}\".", name);
        return;
    }

    println!("{}  {}", name.bold(), pluralize(quotes.len(), "quote").dimmed());
    for lq in quotes {
        let quote = &lq.quote;
        println!();
        for line in quote.text.lines() {
            println!("  {} {}", "│".dimmed(), line);
        }
        let source = if quote.title.is_empty() {
            quote.url.clone()
        } else {
            format!("{} <{}>", quote.title, quote.url)
        };
        println!("  {}", source.blue());
        println!(
            "  {}  {}",
            format_short(&quote.saved_at).dimmed(),
            quote.id.dimmed()
        );
    }
}

pub(super) fn print_suggestions(suggestions: &Suggestions) {
    if let Some(new_name) = &suggestions.create_new {
        println!("{} Create \"{}\"", "+".green(), new_name);
    }
    for name in &suggestions.names {
        println!("  {}", name);
    }
    if suggestions.names.is_empty() && suggestions.create_new.is_none() {
        println!("{}", "Type a name to create a new file".dimmed());
    }
}

pub(super) fn print_confirmation(confirmation: &Confirmation) {
    println!("{}", confirmation.title.bold());
    println!("{}", confirmation.message);
}

fn print_quote_line(lq: &ListedQuote) {
    let date = format!("{:<width$}", format_short(&lq.quote.saved_at), width = DATE_WIDTH);
    let file = format!("[{}] ", lq.file_name);
    let id = &lq.quote.id;

    let fixed = 2 + DATE_WIDTH + 1 + file.width() + 2 + id.width();
    let available = LINE_WIDTH.saturating_sub(fixed);
    let flat_text: String = lq
        .quote
        .text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let text = truncate_to_width(&flat_text, available);
    let padding = available.saturating_sub(text.width());

    println!(
        "  {} {}{}{}  {}",
        date.dimmed(),
        file.yellow(),
        text,
        " ".repeat(padding),
        id.dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
