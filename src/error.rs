use thiserror::Error;

use crate::types::Color;

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row or column lies outside `[0, 7]`.
    #[error("invalid position: row={row}, col={col}")]
    InvalidPosition { row: i32, col: i32 },
    /// The position is not a legal move for the given color.
    #[error("invalid move: {color} cannot play row={row}, col={col}")]
    InvalidMove { row: i32, col: i32, color: Color },
    #[error("unknown color: {0:?} (expected \"white\" or \"black\")")]
    UnknownColor(String),
    #[error("malformed board layout: {0}")]
    MalformedLayout(String),
}
