//! Style spans attached to visible rows.
//!
//! Design invariants:
//! * Spans are row-local. Horizontal ranges are half-open `[start_col, end_col)`
//!   in character columns of the row's visible text, already clipped to it.
//! * When spans overlap, `Search` wins over `Token`; the painter resolves this
//!   per character via `StyleLayer::attr_at`.

use crate::lexer::TokenCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleAttr {
    Search,
    Token(TokenCategory),
}

impl StyleAttr {
    fn priority(self) -> u8 {
        match self {
            StyleAttr::Search => 1,
            StyleAttr::Token(_) => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSpan {
    pub start_col: usize, // inclusive
    pub end_col: usize,   // exclusive
    pub attr: StyleAttr,
}

impl StyleSpan {
    pub fn contains(&self, col: usize) -> bool {
        self.start_col <= col && col < self.end_col
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StyleLayer {
    pub spans: Vec<StyleSpan>,
}

impl StyleLayer {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Add a span clipped to `visible_len`; empty results are dropped.
    pub fn push_clipped(&mut self, start_col: usize, len: usize, attr: StyleAttr, visible_len: usize) {
        let end_col = start_col.saturating_add(len).min(visible_len);
        if start_col < end_col {
            self.spans.push(StyleSpan {
                start_col,
                end_col,
                attr,
            });
        }
    }

    /// Highest-priority attribute covering `col`.
    pub fn attr_at(&self, col: usize) -> Option<StyleAttr> {
        self.spans
            .iter()
            .filter(|s| s.contains(col))
            .map(|s| s.attr)
            .max_by_key(|a| a.priority())
    }
}
