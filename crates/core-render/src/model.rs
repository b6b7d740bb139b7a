//! Render model: everything the painter needs for one frame, computed from
//! the editor model without touching the terminal.
//!
//! Invariants:
//! * `rows` covers at most `layout.text_height()` document lines starting at
//!   the viewport's first line; rows past the document end are omitted.
//! * Row text is the line's prefix fitting `width - gutter - 1` cells, with a
//!   trailing carriage return hidden.
//! * Style spans are clipped to the visible text; search spans win over lexer
//!   tokens where both cover a character.

use core_model::{EditorModel, Layout, gutter_width};
use core_search::highlight_spans;
use core_text::{char_len, display_col, fit_to_width};

use crate::lexer::SyntaxLexer;
use crate::status::{StatusContext, build_status, fit_status};
use crate::style::{StyleAttr, StyleLayer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    /// 1-based line number shown in the gutter.
    pub number: usize,
    pub text: String,
    pub styles: StyleLayer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub rows: Vec<RenderRow>,
    pub gutter_width: usize,
    /// Status text already padded to the terminal width.
    pub status: String,
    pub status_row: u16,
    /// Caret cell as `(x, y)`.
    pub caret: (u16, u16),
}

pub fn build_render_model(
    model: &EditorModel,
    layout: &Layout,
    lexer: &dyn SyntaxLexer,
    legend: &str,
) -> RenderModel {
    let state = model.state();
    let view = model.view();
    let doc = &state.document;
    let gutter = gutter_width(doc.line_count());
    let text_cells = layout.width().saturating_sub(gutter + 1);

    let first = view.viewport_first_line;
    let last = (first + layout.text_height()).min(doc.line_count());
    let term = state.search.active_term();
    let matches = highlight_spans(doc.lines(), term, first..last);

    let mut rows = Vec::with_capacity(last.saturating_sub(first));
    for (idx, line) in doc.lines().iter().enumerate().take(last).skip(first) {
        let shown = line.strip_suffix('\r').unwrap_or(line);
        let text = fit_to_width(shown, text_cells);
        let visible = char_len(text);
        let mut styles = StyleLayer::new();
        for tok in lexer.classify(shown) {
            styles.push_clipped(tok.start, tok.len, StyleAttr::Token(tok.category), visible);
        }
        for m in matches.iter().filter(|m| m.row == idx) {
            styles.push_clipped(m.col, m.len, StyleAttr::Search, visible);
        }
        rows.push(RenderRow {
            number: idx + 1,
            text: text.to_string(),
            styles,
        });
    }

    let cursor = view.cursor;
    let name = state.display_name();
    let status = build_status(&StatusContext {
        name: &name,
        modified: doc.is_modified(),
        line: cursor.line,
        col: cursor.col,
        legend,
        ephemeral: state.ephemeral_status.as_ref().map(|m| m.text.as_str()),
    });

    let caret_x = gutter + doc.line(cursor.line).map_or(0, |l| display_col(l, cursor.col));
    let caret_x = caret_x.min(layout.width().saturating_sub(1));
    let caret_y = cursor.line.saturating_sub(first);

    RenderModel {
        rows,
        gutter_width: gutter,
        status: fit_status(&status, layout.width()),
        status_row: layout.status_row(),
        caret: (to_cell(caret_x), to_cell(caret_y)),
    }
}

fn to_cell(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
