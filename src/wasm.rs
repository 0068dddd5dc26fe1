//! JavaScript bindings for [`Board`].
//!
//! Colors cross the boundary as the strings `"white"` and `"black"`.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::types::{Color, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
#[derive(Debug, Default, Clone)]
pub struct WasmBoard {
    inner: Board,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Board::new(),
        }
    }

    /// Color tag of the piece at `(row, col)`, or `undefined` when empty.
    pub fn piece(&self, row: i32, col: i32) -> Result<Option<String>, JsError> {
        let piece = self.inner.piece(Position::new(row, col))?;
        Ok(piece.map(|piece| piece.color().to_string()))
    }

    pub fn is_valid_pos(&self, row: i32, col: i32) -> bool {
        self.inner.is_valid_pos(Position::new(row, col))
    }

    pub fn is_mine(&self, row: i32, col: i32, color: &str) -> Result<bool, JsError> {
        Ok(self.inner.is_mine(Position::new(row, col), color.parse()?))
    }

    pub fn has_move(&self, color: &str) -> Result<bool, JsError> {
        Ok(self.inner.has_move(color.parse()?))
    }

    pub fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    pub fn valid_move(&self, row: i32, col: i32, color: &str) -> Result<bool, JsError> {
        Ok(self.inner.valid_move(Position::new(row, col), color.parse()?))
    }

    /// Legal moves as an array of `{ row, col }` objects.
    pub fn valid_moves(&self, color: &str) -> Result<JsValue, JsError> {
        let color: Color = color.parse()?;
        Ok(serde_wasm_bindgen::to_value(&self.inner.valid_moves(color))?)
    }

    pub fn flips(&self, row: i32, col: i32, color: &str) -> Result<JsValue, JsError> {
        let flips = self.inner.flips(Position::new(row, col), color.parse()?);
        Ok(serde_wasm_bindgen::to_value(&flips)?)
    }

    pub fn place_piece(&mut self, row: i32, col: i32, color: &str) -> Result<(), JsError> {
        self.inner.place_piece(Position::new(row, col), color.parse()?)?;
        Ok(())
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.state())?)
    }
}
