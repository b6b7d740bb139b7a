//! Frame rendering.
//!
//! Rendering is split in two so the interesting part stays testable without
//! a terminal:
//! - `model::build_render_model` turns an `EditorModel` plus `Layout` into a
//!   `RenderModel` (visible rows, style spans, status text, caret cell).
//! - `writer::paint` turns a `RenderModel` into crossterm commands on any
//!   `io::Write`.
//!
//! Lexers (`lexer`) only tag token categories; colors are chosen in `writer`.

pub mod lexer;
pub mod model;
pub mod status;
pub mod style;
pub mod writer;

pub use lexer::{SyntaxLexer, TokenCategory, TokenSpan, lexer_for};
pub use model::{RenderModel, RenderRow, build_render_model};
pub use writer::paint;
