//! Search and replace over a line-vector document.
//!
//! Two matchers live here:
//! * Literal substring search (`find_forward`, `highlight_spans`) used by the
//!   interactive search prompt and by match highlighting.
//! * Regex substitution (`Replacer`, `replace_all`) used by bulk replace.
//!
//! Matches never span a line boundary: every routine works line by line.
//! Columns and lengths in results are character counts so they compose
//! directly with cursor positions.

use std::ops::Range;

use core_text::{Document, Position, char_len};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

/// A highlighted match inside one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number (0-indexed).
    pub row: usize,
    /// Column (character offset, 0-indexed).
    pub col: usize,
    /// Match length in characters.
    pub len: usize,
}

/// Errors raised while preparing a substitution.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
    /// The replacement would introduce a line break inside a line.
    #[error("replacement may not contain a newline")]
    NewlineInReplacement,
}

/// Search state retained between commands for highlight rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    active_term: String,
}

impl SearchState {
    pub fn active_term(&self) -> &str {
        &self.active_term
    }
    pub fn is_active(&self) -> bool {
        !self.active_term.is_empty()
    }
    pub fn set(&mut self, term: impl Into<String>) {
        self.active_term = term.into();
    }
    pub fn clear(&mut self) {
        self.active_term.clear();
    }
}

/// First literal occurrence of `term` scanning rows `from_row..` in order.
///
/// Each row is searched from its start, not from any cursor column, and the
/// scan does not wrap to rows before `from_row`. An empty term never matches.
pub fn find_forward(lines: &[String], term: &str, from_row: usize) -> Option<Position> {
    if term.is_empty() {
        return None;
    }
    let found = lines
        .iter()
        .enumerate()
        .skip(from_row)
        .find_map(|(row, line)| line.find(term).map(|b| Position::new(row, char_len(&line[..b]))));
    trace!(target: "search", from_row, term_len = term.len(), found = found.is_some(), "find_forward");
    found
}

/// All non-overlapping literal occurrences of `term` in `rows`.
///
/// After a match the scan resumes at the match end, so `"aa"` in `"aaaa"`
/// yields two spans, not three. Rows past the end of `lines` are ignored.
pub fn highlight_spans(lines: &[String], term: &str, rows: Range<usize>) -> Vec<Span> {
    if term.is_empty() {
        return Vec::new();
    }
    let term_len = char_len(term);
    let end = rows.end.min(lines.len());
    let mut out = Vec::new();
    for row in rows.start.min(end)..end {
        let line = &lines[row];
        for (byte, _) in line.match_indices(term) {
            out.push(Span {
                row,
                col: char_len(&line[..byte]),
                len: term_len,
            });
        }
    }
    out
}

/// A compiled substitution ready to run over a document.
///
/// Compiling up front lets callers reject a bad pattern before they record
/// history or touch any line.
#[derive(Debug, Clone)]
pub struct Replacer {
    regex: Regex,
    replacement: String,
}

impl Replacer {
    /// Compile `pattern`. `replacement` follows `regex` expansion syntax (`$1`, `${name}`).
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, PatternError> {
        if replacement.contains('\n') {
            return Err(PatternError::NewlineInReplacement);
        }
        let regex = Regex::new(pattern)?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// Substitute every match on every line; returns the total number of substitutions.
    pub fn apply(&self, doc: &mut Document) -> usize {
        let total = doc.edit_lines(|line| self.apply_line(line));
        debug!(target: "search", pattern = self.regex.as_str(), count = total, "replace_all");
        total
    }

    /// Substitute within a single line; returns the number of substitutions.
    pub fn apply_line(&self, line: &mut String) -> usize {
        let count = self.regex.find_iter(line).count();
        if count > 0 {
            *line = self
                .regex
                .replace_all(line, self.replacement.as_str())
                .into_owned();
        }
        count
    }
}

/// Compile and apply in one step. On error no line is modified.
pub fn replace_all(
    doc: &mut Document,
    pattern: &str,
    replacement: &str,
) -> Result<usize, PatternError> {
    let replacer = Replacer::new(pattern, replacement)?;
    Ok(replacer.apply(doc))
}
