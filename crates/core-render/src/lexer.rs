//! Syntax token classification.
//!
//! A lexer annotates a single line with category spans for display only; it
//! never sees or mutates the document as a whole. Categories are plain tags:
//! the painter decides what they look like.
//!
//! Spans use character columns and half-open `[start, start + len)` ranges,
//! sorted by `start` and non-overlapping.

use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Number,
    String,
    Comment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub len: usize,
    pub category: TokenCategory,
}

pub trait SyntaxLexer {
    fn id(&self) -> &'static str;
    fn classify(&self, line: &str) -> Vec<TokenSpan>;
}

/// No highlighting at all.
pub struct PlainLexer;

impl SyntaxLexer for PlainLexer {
    fn id(&self) -> &'static str {
        "plain"
    }
    fn classify(&self, _line: &str) -> Vec<TokenSpan> {
        Vec::new()
    }
}

/// Language-agnostic lexer: decimal numbers, single/double quoted strings
/// (backslash escapes honored, unterminated runs to end of line), and `//` or
/// `#` line comments.
pub struct GenericLexer;

impl SyntaxLexer for GenericLexer {
    fn id(&self) -> &'static str {
        "generic"
    }

    fn classify(&self, line: &str) -> Vec<TokenSpan> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let start = i;
            if c == '#' || (c == '/' && chars.get(i + 1) == Some(&'/')) {
                out.push(TokenSpan {
                    start,
                    len: chars.len() - start,
                    category: TokenCategory::Comment,
                });
                break;
            } else if c == '"' || c == '\'' {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                out.push(TokenSpan {
                    start,
                    len: i - start,
                    category: TokenCategory::String,
                });
            } else if c.is_ascii_digit() && !continues_word(&chars, i) {
                while i < chars.len() && is_number_char(chars[i]) {
                    i += 1;
                }
                out.push(TokenSpan {
                    start,
                    len: i - start,
                    category: TokenCategory::Number,
                });
            } else {
                i += 1;
            }
        }
        out
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

// `x1` is an identifier, not a number.
fn continues_word(chars: &[char], i: usize) -> bool {
    i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_')
}

/// Lexer registered under `id`; unknown ids fall back to plain.
pub fn lexer_for(id: &str) -> Box<dyn SyntaxLexer> {
    match id {
        "plain" | "" => Box::new(PlainLexer),
        "generic" => Box::new(GenericLexer),
        other => {
            warn!(target: "render.lexer", lexer = other, "unknown_lexer_using_plain");
            Box::new(PlainLexer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(start: usize, len: usize, category: TokenCategory) -> TokenSpan {
        TokenSpan {
            start,
            len,
            category,
        }
    }

    #[test]
    fn plain_classifies_nothing() {
        assert!(PlainLexer.classify("let x = 42; // hi").is_empty());
    }

    #[test]
    fn generic_numbers_strings_comments() {
        let spans = GenericLexer.classify(r#"x1 = 42 + "a\"b" // done"#);
        assert_eq!(
            spans,
            vec![
                span(5, 2, TokenCategory::Number),
                span(10, 6, TokenCategory::String),
                span(17, 7, TokenCategory::Comment),
            ]
        );
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let spans = GenericLexer.classify("say 'hello");
        assert_eq!(spans, vec![span(4, 6, TokenCategory::String)]);
    }

    #[test]
    fn hash_comment_and_char_columns() {
        let spans = GenericLexer.classify("é 3 # x");
        assert_eq!(
            spans,
            vec![span(2, 1, TokenCategory::Number), span(4, 3, TokenCategory::Comment)]
        );
    }

    #[test]
    fn registry_falls_back_to_plain() {
        assert_eq!(lexer_for("generic").id(), "generic");
        assert_eq!(lexer_for("plain").id(), "plain");
        assert_eq!(lexer_for("cobol").id(), "plain");
    }
}
