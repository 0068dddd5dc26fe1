//! Board and move-legality core for Othello/Reversi.
//!
//! [`Board`] owns the 8x8 grid and answers legality queries; callers drive
//! turn order themselves. [`wasm`] exposes the same contract to JavaScript.

pub mod board;
pub mod error;
pub mod logging;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::BoardError;
pub use logging::init_logging;
pub use types::{BoardState, Color, DIRECTIONS, Piece, Position};

/// Cells along one edge of the board.
pub const BOARD_SIZE: usize = 8;
/// Cells on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
