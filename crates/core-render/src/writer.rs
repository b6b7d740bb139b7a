//! Terminal writer: batches primitive terminal operations for one frame and
//! flushes them through crossterm in a single pass.
//!
//! Design invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * Every `Paint` change resets attributes first, so styles never bleed.
//! * Writer owns no global state; it is a short-lived object per frame and can
//!   target any `io::Write` (tests paint into a `Vec<u8>`).

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tracing::trace;

use crate::lexer::TokenCategory;
use crate::model::{RenderModel, RenderRow};
use crate::style::StyleAttr;

/// Visual treatment for subsequent `Print`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Styled(StyleAttr),
    StatusBar,
}

#[derive(Debug)]
pub enum Command {
    MoveTo(u16, u16),
    ClearLine,
    SetPaint(Paint),
    Print(String),
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn set_paint(&mut self, paint: Paint) {
        self.cmds.push(Command::SetPaint(paint));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                // Caller guarantees a preceding MoveTo(0, y).
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::SetPaint(p) => apply_paint(out, p)?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn apply_paint<W: Write>(out: &mut W, paint: Paint) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    match paint {
        Paint::Plain => {}
        Paint::Styled(StyleAttr::Search) => queue!(out, SetAttribute(Attribute::Reverse))?,
        Paint::Styled(StyleAttr::Token(cat)) => queue!(out, SetForegroundColor(token_color(cat)))?,
        Paint::StatusBar => queue!(
            out,
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Cyan)
        )?,
    }
    Ok(())
}

/// Category to color mapping; the only place token categories become colors.
pub fn token_color(cat: TokenCategory) -> Color {
    match cat {
        TokenCategory::Number => Color::Yellow,
        TokenCategory::String => Color::Green,
        TokenCategory::Comment => Color::DarkGrey,
    }
}

/// Queue a whole frame: text rows (blank below the document), status line,
/// then the caret.
pub fn compose_frame(model: &RenderModel) -> Writer {
    let mut w = Writer::new();
    let rows = model.status_row as usize;
    for y in 0..rows {
        w.move_to(0, y as u16);
        w.clear_line();
        if let Some(row) = model.rows.get(y) {
            push_row(&mut w, row, model.gutter_width);
        }
    }
    w.move_to(0, model.status_row);
    w.clear_line();
    w.set_paint(Paint::StatusBar);
    w.print(model.status.as_str());
    w.set_paint(Paint::Plain);
    w.move_to(model.caret.0, model.caret.1);
    w
}

fn push_row(w: &mut Writer, row: &RenderRow, gutter: usize) {
    let digits = gutter.saturating_sub(1);
    w.print(format!("{:>digits$} ", row.number));

    let mut run = String::new();
    let mut current: Option<StyleAttr> = None;
    for (col, ch) in row.text.chars().enumerate() {
        let attr = row.styles.attr_at(col);
        if attr != current && !run.is_empty() {
            flush_run(w, current, std::mem::take(&mut run));
        }
        current = attr;
        run.push(if ch.is_control() { '\u{FFFD}' } else { ch });
    }
    if !run.is_empty() {
        flush_run(w, current, run);
    }
}

fn flush_run(w: &mut Writer, attr: Option<StyleAttr>, text: String) {
    match attr {
        Some(a) => {
            w.set_paint(Paint::Styled(a));
            w.print(text);
            w.set_paint(Paint::Plain);
        }
        None => w.print(text),
    }
}

/// Paint a full frame to `out`.
pub fn paint<W: Write>(out: &mut W, model: &RenderModel) -> Result<()> {
    let writer = compose_frame(model);
    trace!(target: "render", cmds = writer.commands().len(), rows = model.rows.len(), "paint_frame");
    writer.flush_to(out)
}
