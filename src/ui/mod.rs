// UI module for the text menu.
// Writes colored menu, prompts, and notices to any writer.

mod records;

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::app::MenuAction;

pub use records::{format_relative_time, write_matches, write_repositories, write_user};

/// Draw the program menu followed by the choice prompt.
pub fn draw_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", " Program Menu:".yellow())?;
    for action in MenuAction::ALL {
        writeln!(
            out,
            "{}",
            format!(" {}. {}", action.number(), action.title()).yellow()
        )?;
    }
    prompt(out, " >> Choose an option: ")
}

/// Print a prompt without a trailing newline and flush it.
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text.yellow())?;
    out.flush()
}

/// Section heading.
pub fn heading(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!(" {}", text).yellow())
}

/// Green notice for a completed operation.
pub fn success(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", format!(" {}", text).green())
}

/// Red notice for failures and empty results.
pub fn error(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", format!(" {}", text).red())
}
