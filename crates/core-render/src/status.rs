//! Status line composition.
//!
//! Format: `" <name>[ *] | Ln R, Col C | <legend> "`.
//! * `<name>` is the file name as given, or `[No Name]` for an unsaved buffer.
//! * ` *` appears only when the document is modified.
//! * `R` and `C` are the 1-based cursor line and character column.
//! * `<legend>` lists the configured key chords.
//!
//! While a transient message is pending it replaces the whole line.
//!
//! Two stages: `compose_status` produces ordered `StatusSegment`s and
//! `format_status` renders them. `fit_status` pads or truncates the result to
//! the terminal width in cells.

use core_text::{char_width, display_width, fit_to_width};

/// Simple DTO describing what we need to render a status line.
pub struct StatusContext<'a> {
    pub name: &'a str,
    pub modified: bool,
    pub line: usize, // 0-based current line index
    pub col: usize,  // 0-based character column
    pub legend: &'a str,
    pub ephemeral: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName { name: &'a str, modified: bool },
    Position { line_1: usize, col_1: usize },
    Legend(&'a str),
    Message(&'a str),
}

/// Produce ordered segments representing the status line.
pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    if let Some(msg) = ctx.ephemeral {
        return vec![StatusSegment::Message(msg)];
    }
    vec![
        StatusSegment::FileName {
            name: ctx.name,
            modified: ctx.modified,
        },
        StatusSegment::Position {
            line_1: ctx.line + 1,
            col_1: ctx.col + 1,
        },
        StatusSegment::Legend(ctx.legend),
    ]
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(96);
    s.push(' ');
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            s.push_str(" | ");
        }
        match seg {
            StatusSegment::FileName { name, modified } => {
                s.push_str(name);
                if *modified {
                    s.push_str(" *");
                }
            }
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, "Ln {line_1}, Col {col_1}");
            }
            StatusSegment::Legend(l) => s.push_str(l),
            StatusSegment::Message(m) => s.push_str(m),
        }
    }
    s.push(' ');
    s
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    format_status(&compose_status(ctx))
}

/// Pad with spaces or truncate so the line covers exactly `width - 1` cells,
/// leaving the last column free so the terminal never scrolls.
pub fn fit_status(status: &str, width: usize) -> String {
    let target = width.saturating_sub(1);
    let mut out = fit_to_width(status, target).to_string();
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', target - used));
    debug_assert!(out.chars().map(char_width).sum::<usize>() == target);
    out
}
