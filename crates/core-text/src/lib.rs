//! Line-vector text document.
//!
//! The document is the sole owner of editable content. It is stored as an
//! ordered `Vec<String>`, one entry per line, without line terminators. Undo
//! snapshots copy this vector wholesale, so the representation favors cheap
//! cloning of small files over large-file performance.
//!
//! Invariants (hold after every public call):
//! * `lines` is never empty; an empty document is a single empty line.
//! * No line contains `'\n'`.
//! * Columns are character (codepoint) indices, never byte offsets. Byte
//!   translation happens only at the splice site via `char_to_byte`.
//!
//! Precondition violations on the mutators (row/col out of range) are
//! programming defects: they trip a `debug_assert!` in debug builds and become
//! clamped no-ops in release builds.

pub mod width;

pub use width::{char_width, display_col, display_width, fit_to_width};

/// A position inside a document expressed as (line index, character column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
    /// Clamp line into `0..line_count` then column into `0..=line_len(line)`.
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.col = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

/// Byte offset of character column `col` in `s` (or `s.len()` past the end).
pub fn char_to_byte(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(b, _)| b).unwrap_or(s.len())
}

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// A document holding one empty line.
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
            modified: false,
        }
    }

    /// Build a document from raw file content.
    ///
    /// Splits on `'\n'`; a final terminator does not produce an extra line.
    /// `None` or empty input yields a single empty line. A `'\r'` preceding a
    /// `'\n'` stays in the line so content round-trips through `serialize`.
    pub fn load(source: Option<&str>) -> Self {
        let Some(text) = source.filter(|t| !t.is_empty()) else {
            return Self::empty();
        };
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = body.split('\n').map(str::to_string).collect();
        Self {
            lines,
            modified: false,
        }
    }

    /// Build a document from already split lines (an empty iterator yields one empty line).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self {
            lines: lines.into_iter().map(Into::into).collect(),
            modified: false,
        };
        doc.normalize();
        doc
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Character length of line `idx` (0 for out of range).
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map(|l| char_len(l)).unwrap_or(0)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Insert `ch` at character column `col` of line `row`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        debug_assert!(ch != '\n', "newlines go through split_line");
        debug_assert!(row < self.lines.len(), "insert row in range");
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        debug_assert!(col <= char_len(line), "insert col in range");
        let at = char_to_byte(line, col);
        line.insert(at, ch);
        self.modified = true;
    }

    /// Cut line `row` at `col`; the tail becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.lines.len(), "split row in range");
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let at = char_to_byte(line, col);
        let tail = line.split_off(at);
        self.lines.insert(row + 1, tail);
        self.modified = true;
    }

    /// Append line `row` onto line `row - 1` and remove it.
    ///
    /// Returns the character length the previous line had before the join,
    /// which is where the cursor lands.
    pub fn join_with_previous(&mut self, row: usize) -> usize {
        debug_assert!(row > 0 && row < self.lines.len(), "join row in range");
        if row == 0 || row >= self.lines.len() {
            return 0;
        }
        let current = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let prev_len = char_len(prev);
        prev.push_str(&current);
        self.modified = true;
        prev_len
    }

    /// Remove the character at `col - 1` on line `row`.
    pub fn delete_char_before(&mut self, row: usize, col: usize) {
        debug_assert!(col > 0, "delete_char_before needs col > 0");
        debug_assert!(row < self.lines.len(), "delete row in range");
        if col == 0 {
            return;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let start = char_to_byte(line, col - 1);
        if start >= line.len() {
            return;
        }
        line.remove(start);
        self.modified = true;
    }

    /// Persisted file format: lines joined by `'\n'` plus a final `'\n'`.
    pub fn serialize(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Replace the whole line vector (undo/redo restore). Does not touch `modified`.
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.normalize();
    }

    /// Run `f` over every line, summing the counts it returns. Marks the
    /// document modified when the total is non-zero.
    pub fn edit_lines<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&mut String) -> usize,
    {
        let mut total = 0usize;
        for line in &mut self.lines {
            total += f(line);
            debug_assert!(!line.contains('\n'), "line edit introduced a newline");
        }
        if total > 0 {
            self.modified = true;
        }
        total
    }

    fn normalize(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    #[test]
    fn load_absent_or_empty_is_single_empty_line() {
        assert_eq!(Document::load(None).lines(), &[String::new()]);
        assert_eq!(Document::load(Some("")).lines(), &[String::new()]);
    }

    #[test]
    fn load_strips_trailing_newline() {
        let d = Document::load(Some("hello\nworld\n"));
        assert_eq!(d.lines(), &["hello", "world"]);
        assert!(!d.is_modified());
    }

    #[test]
    fn load_keeps_blank_lines() {
        let d = Document::load(Some("a\n\n\nb\n"));
        assert_eq!(d.lines(), &["a", "", "", "b"]);
        let d = Document::load(Some("\n"));
        assert_eq!(d.lines(), &[""]);
    }

    #[test]
    fn load_without_final_newline() {
        let d = Document::load(Some("a\nb"));
        assert_eq!(d.lines(), &["a", "b"]);
        assert_eq!(d.serialize(), "a\nb\n");
    }

    #[test]
    fn crlf_content_round_trips() {
        let text = "one\r\ntwo\r\n";
        assert_eq!(Document::load(Some(text)).serialize(), text);
    }

    #[test]
    fn insert_char_middle_and_end() {
        let mut d = doc(&["ac"]);
        d.insert_char(0, 1, 'b');
        d.insert_char(0, 3, 'd');
        assert_eq!(d.line(0), Some("abcd"));
        assert!(d.is_modified());
    }

    #[test]
    fn insert_char_after_multibyte() {
        let mut d = doc(&["é漢"]);
        d.insert_char(0, 1, 'x');
        assert_eq!(d.line(0), Some("éx漢"));
        assert_eq!(d.line_len(0), 3);
    }

    #[test]
    fn split_line_at_end_inserts_empty_line() {
        let mut d = doc(&["hello", "world"]);
        d.split_line(0, 5);
        assert_eq!(d.lines(), &["hello", "", "world"]);
    }

    #[test]
    fn split_line_middle() {
        let mut d = doc(&["abcd"]);
        d.split_line(0, 2);
        assert_eq!(d.lines(), &["ab", "cd"]);
    }

    #[test]
    fn join_returns_previous_length() {
        let mut d = doc(&["ab", "cd"]);
        let col = d.join_with_previous(1);
        assert_eq!(col, 2);
        assert_eq!(d.lines(), &["abcd"]);
    }

    #[test]
    fn delete_char_before_multibyte() {
        let mut d = doc(&["a漢b"]);
        d.delete_char_before(0, 2);
        assert_eq!(d.line(0), Some("ab"));
    }

    #[test]
    fn deleting_only_char_keeps_one_line() {
        let mut d = doc(&["x"]);
        d.delete_char_before(0, 1);
        assert_eq!(d.lines(), &[""]);
        assert_eq!(d.line_count(), 1);
    }

    #[test]
    fn serialize_appends_final_newline() {
        assert_eq!(doc(&["a", "b"]).serialize(), "a\nb\n");
        assert_eq!(Document::empty().serialize(), "\n");
    }

    #[test]
    fn replace_lines_never_empty() {
        let mut d = doc(&["a"]);
        d.replace_lines(Vec::new());
        assert_eq!(d.lines(), &[""]);
    }

    #[test]
    fn edit_lines_counts_and_marks_modified() {
        let mut d = doc(&["aa", "b"]);
        let n = d.edit_lines(|_| 0);
        assert_eq!(n, 0);
        assert!(!d.is_modified());
        let n = d.edit_lines(|l| {
            let c = l.matches('a').count();
            *l = l.replace('a', "x");
            c
        });
        assert_eq!(n, 2);
        assert_eq!(d.lines(), &["xx", "b"]);
        assert!(d.is_modified());
    }

    #[test]
    fn position_clamp() {
        let d = doc(&["abc", "d"]);
        let mut p = Position::new(5, 9);
        p.clamp_to(d.line_count(), |i| d.line_len(i));
        assert_eq!(p, Position::new(1, 1));
    }
}
