//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically, unless a
//! [`ColorMode`](crate::config::ColorMode) override is installed.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use itertools::Itertools;

use crate::application::ReportRow;
use crate::config::RenderSettings;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for command results)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Pad both cells of every row to common column widths.
///
/// Each cell gets `left_padding` spaces in front and is filled to its column
/// width plus `right_padding`. Cells wider than `max_column_width` are cut
/// and end in `"... "`; below four columns they are cut without the suffix.
pub fn layout(rows: &[ReportRow], render: &RenderSettings) -> Vec<(String, String)> {
    let label_width = column_width(rows.iter().map(|r| r.label.as_str()), render);
    let message_width = column_width(rows.iter().map(|r| r.message.as_str()), render);

    rows.iter()
        .map(|row| {
            (
                align_left(&row.label, label_width, render),
                align_left(&row.message, message_width, render),
            )
        })
        .collect()
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>, render: &RenderSettings) -> usize {
    let widest = cells.map(|c| c.chars().count()).max().unwrap_or(0);
    render
        .max_column_width
        .map_or(widest, |cap| widest.min(cap))
}

const ELLIPSIS: &str = "... ";

fn align_left(text: &str, width: usize, render: &RenderSettings) -> String {
    let total = render.left_padding + width + render.right_padding;
    if text.is_empty() {
        return " ".repeat(total);
    }

    let text = if text.chars().count() > width {
        if width < ELLIPSIS.len() {
            text.chars().take(width).collect()
        } else {
            let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
            format!("{kept}{ELLIPSIS}")
        }
    } else {
        text.to_string()
    };

    let filled = format!("{:<w$}", text, w = width + render.right_padding);
    format!("{:>total$}", filled)
}

/// Write the "ERROR(S):" block: labels in yellow, messages in red.
pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[ReportRow],
    render: &RenderSettings,
) -> io::Result<()> {
    writeln!(out, "{}", "ERROR(S):".red())?;
    write_rows(out, rows, render, |label| label.yellow(), |message| message.red())
}

/// Write a plain two-column table (verbs, options).
pub fn write_table<W: Write>(
    out: &mut W,
    rows: &[ReportRow],
    render: &RenderSettings,
) -> io::Result<()> {
    write_rows(out, rows, render, |label| label.green(), |message| message.normal())
}

fn write_rows<W, L, M>(
    out: &mut W,
    rows: &[ReportRow],
    render: &RenderSettings,
    label_style: L,
    message_style: M,
) -> io::Result<()>
where
    W: Write,
    L: Fn(&str) -> ColoredString,
    M: Fn(&str) -> ColoredString,
{
    for (label, message) in layout(rows, render) {
        let line = [label_style(label.as_str()), message_style(message.as_str())]
            .iter()
            .join("");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Print a failure report to stderr.
pub fn report(rows: &[ReportRow], render: &RenderSettings) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if let Err(e) = write_report(&mut out, rows, render) {
        error(&format!("cannot write report: {e}"));
    }
}

/// Print a table to stdout.
pub fn table(rows: &[ReportRow], render: &RenderSettings) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_table(&mut out, rows, render) {
        error(&format!("cannot write table: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::new("-s(--second)", "Required option is missing."),
            ReportRow::new("-p(--prop)", "bad"),
        ]
    }

    #[test]
    fn given_rows_when_laying_out_then_columns_share_width() {
        let render = RenderSettings::default();

        let cells = layout(&rows(), &render);

        assert_eq!(cells[0].0, format!("    {:<17}", "-s(--second)"));
        assert_eq!(cells[1].0, format!("    {:<17}", "-p(--prop)"));
        assert_eq!(cells[0].1.len(), cells[1].1.len());
        assert!(cells[1].1.starts_with("    bad"));
    }

    #[test]
    fn given_width_cap_when_laying_out_then_long_cells_truncated() {
        let render = RenderSettings {
            left_padding: 0,
            right_padding: 0,
            max_column_width: Some(10),
        };

        let cells = layout(&rows(), &render);

        assert_eq!(cells[0].0, "-s(--s... ");
        assert_eq!(cells[0].0.chars().count(), 10);
        assert_eq!(cells[1].0, "-p(--prop)");
    }

    #[test]
    fn given_cap_narrower_than_ellipsis_when_laying_out_then_cell_fits_cap() {
        let render = RenderSettings {
            left_padding: 0,
            right_padding: 0,
            max_column_width: Some(3),
        };

        let cells = layout(&rows(), &render);

        assert_eq!(cells[0].0, "-s(");
        assert_eq!(cells[1].1, "bad");
        assert!(cells.iter().all(|(l, m)| l.chars().count() == 3 && m.chars().count() == 3));
    }

    #[test]
    fn given_empty_cell_when_laying_out_then_blank_column() {
        let render = RenderSettings::default();
        let cells = layout(&[ReportRow::new("verb", "")], &render);
        assert_eq!(cells[0].1, " ".repeat(9));
    }

    #[test]
    fn given_report_when_writing_without_color_then_header_and_rows() {
        colored::control::set_override(false);
        let mut out = Vec::new();

        write_report(&mut out, &rows(), &RenderSettings::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ERROR(S):");
        assert!(lines[1].contains("-s(--second)"));
        assert!(lines[1].ends_with("Required option is missing."));
        assert_eq!(lines.len(), 3);
    }
}
