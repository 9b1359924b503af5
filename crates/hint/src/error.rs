//! Malformed type-hint errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("type hint is empty")]
    Empty,
    #[error("unexpected character `{ch}` at byte {pos}")]
    Unexpected { ch: char, pos: usize },
    #[error("unexpected end of type hint")]
    UnexpectedEnd,
    #[error("unclosed `[` opened at byte {pos}")]
    Unclosed { pos: usize },
    #[error("empty argument list for `{name}`")]
    EmptyArguments { name: String },
    #[error("unterminated quote at byte {pos}")]
    UnterminatedQuote { pos: usize },
    #[error("trailing input at byte {pos}")]
    TrailingInput { pos: usize },
    #[error("type hint nested too deeply at byte {pos}")]
    TooDeep { pos: usize },
}
