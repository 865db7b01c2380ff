//! Terminal presentation
//!
//! Turns records and history views into text. Nothing here decides what is
//! shown or in which order; callers pass data already filtered and sorted.

use crate::core::{HistoryRow, SearchHistoryEntry};
use crate::types::LibraryRecord;
use std::io::{self, Write};

const RULE_WIDTH: usize = 58;

const BANNER: &str = r"
   ________    _ __    _ __
  / ____/ /_  (_) /   (_) /_
 / /   / __ \/ / /   / / __ \
/ /___/ / / / / /___/ / /_/ /
\____/_/ /_/_/_____/_/_.___/
";

/// Render one branch as a boxed block
///
/// With `index` the heading reads `Library #n: <branch>`, otherwise just the
/// branch name.
pub fn format_library(library: &LibraryRecord, index: Option<usize>) -> String {
    let heading = match index {
        Some(n) => format!("🏛️  Library #{}: {}", n, library.branch()),
        None => format!("🏛️  {}", library.branch()),
    };
    let rule = "━".repeat(RULE_WIDTH);

    format!(
        "┏{rule}┓\n\
         {heading}\n\
         ┃ • Hours:    {hours}\n\
         ┃ • Address:  {address}\n\
         ┃             {city}, {state} {zip}\n\
         ┃ • Website:  {website}\n\
         ┃ • Phone:    {phone}\n\
         ┗{rule}┛\n",
        rule = rule,
        heading = heading,
        hours = library.service_hours(),
        address = library.address(),
        city = library.city(),
        state = library.state(),
        zip = library.zip(),
        website = library.website(),
        phone = library.phone(),
    )
}

pub fn write_banner(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{}", BANNER)?;
    writeln!(output, "{:^60}", "Chicago Public Library Finder")
}

pub fn write_help(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "COMMAND MENU")?;
    writeln!(output, "  help    - Show this menu")?;
    writeln!(output, "  history - Recent searches (compact view)")?;
    writeln!(output, "  full    - Detailed search history")?;
    writeln!(output, "  exit    - Quit application")?;
    writeln!(output)
}

/// Compact history: one block per entry, in the order given
pub fn write_recent_history(
    entries: &[&SearchHistoryEntry],
    output: &mut dyn Write,
) -> io::Result<()> {
    for entry in entries {
        writeln!(output, "{}", format_library(&entry.library, None))?;
    }
    Ok(())
}

/// Detailed history as a table with one row per entry
pub fn write_history_table(rows: &[HistoryRow<'_>], output: &mut dyn Write) -> io::Result<()> {
    let headers = ["Timestamp", "Library Name", "ZIP Code", "Phone"];
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|row| [row.when.as_str(), row.branch(), row.zip(), row.phone()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+", separator);

    writeln!(output, "Search History")?;
    writeln!(output, "{}", separator)?;
    writeln!(output, "{}", table_line(&headers, &widths))?;
    writeln!(output, "{}", separator)?;
    for row in &cells {
        writeln!(output, "{}", table_line(row, &widths))?;
    }
    writeln!(output, "{}", separator)
}

// ZIP Code is the only right-aligned column
fn table_line(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(column, (cell, width))| {
            let pad = " ".repeat(width - cell.chars().count());
            if column == 2 {
                format!(" {}{} ", pad, cell)
            } else {
                format!(" {}{} ", cell, pad)
            }
        })
        .collect();
    format!("|{}|", padded.join("|"))
}
