use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};
use todo_core::Entry;

use crate::args::OutputFormat;

/// Render `entries`, or `empty_message` when there are none (except as JSON)
pub fn print_entries(
    out: &mut dyn WriteColor,
    entries: &[Entry],
    format: OutputFormat,
    empty_message: &str,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if entries.is_empty() {
        return writeln!(out, "{empty_message}");
    }

    for entry in entries {
        if format == OutputFormat::Pretty {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(out, "{}", entry.position)?;
            out.reset()?;
        } else {
            write!(out, "{}", entry.position)?;
        }
        writeln!(out, ": {}", entry.content)?;
    }

    Ok(())
}

pub fn print_success(out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
    print_colored(out, Color::Green, message)
}

pub fn print_failure(out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
    print_colored(out, Color::Red, message)
}

fn print_colored(out: &mut dyn WriteColor, color: Color, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{message}")?;
    out.reset()?;
    writeln!(out)
}
