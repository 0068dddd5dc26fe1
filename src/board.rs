use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::BoardError;
use crate::types::{BoardState, Color, DIRECTIONS, Piece, Position};
use crate::{BOARD_SIZE, NUM_SQUARES};

type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// Reversi board: an 8x8 grid where each cell is empty or holds one piece.
///
/// Cells only ever go from empty to occupied. Turn order and scoring are
/// left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        grid[3][3] = Some(Piece::new(Color::White));
        grid[3][4] = Some(Piece::new(Color::Black));
        grid[4][3] = Some(Piece::new(Color::Black));
        grid[4][4] = Some(Piece::new(Color::White));
        Self { grid }
    }

    /// Builds a board from an arbitrary layout, indexed `[row][col]`.
    pub fn from_cells(cells: [[Option<Color>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (grid_row, cell_row) in grid.iter_mut().zip(cells.iter()) {
            for (cell, color) in grid_row.iter_mut().zip(cell_row.iter()) {
                *cell = color.map(Piece::new);
            }
        }
        Self { grid }
    }

    /// Returns the piece at `pos`, or `None` when the cell is empty.
    pub fn piece(&self, pos: Position) -> Result<Option<&Piece>, BoardError> {
        self.cell(pos)
            .map(Option::as_ref)
            .ok_or(BoardError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            })
    }

    pub fn is_valid_pos(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    /// True iff the cell holds a piece. Off-board positions are never occupied.
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Some(_)))
    }

    /// True iff `pos` is on-board and holds a piece of `color`.
    pub fn is_mine(&self, pos: Position, color: Color) -> bool {
        match self.cell(pos) {
            Some(Some(piece)) => piece.color() == color,
            _ => false,
        }
    }

    pub fn has_move(&self, color: Color) -> bool {
        !self.valid_moves(color).is_empty()
    }

    /// True iff neither color has a legal move.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::White) && !self.has_move(Color::Black)
    }

    /// True iff `pos` is an empty on-board cell that brackets at least one
    /// opposing run for `color`.
    pub fn valid_move(&self, pos: Position, color: Color) -> bool {
        pos.is_valid()
            && !self.is_occupied(pos)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.positions_to_flip(pos.offset(dir), dir, color).is_some())
    }

    /// Every legal move for `color`, in row-major order.
    pub fn valid_moves(&self, color: Color) -> Vec<Position> {
        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.valid_move(pos, color))
            .collect()
    }

    /// Pieces that playing `color` at `pos` would flip, grouped by direction
    /// in table order. Empty when the move is not legal.
    pub fn flips(&self, pos: Position, color: Color) -> Vec<Position> {
        if !pos.is_valid() || self.is_occupied(pos) {
            return Vec::new();
        }
        self.collect_flips(pos, color)
    }

    /// Places a piece of `color` at `pos` and flips every bracketed run.
    /// Fails without touching the board when the move is not legal.
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        if !self.valid_move(pos, color) {
            debug!("rejected {color} move at ({}, {})", pos.row, pos.col);
            return Err(BoardError::InvalidMove {
                row: pos.row,
                col: pos.col,
                color,
            });
        }

        if let Some(cell) = self.cell_mut(pos) {
            *cell = Some(Piece::new(color));
        }

        let flips = self.collect_flips(pos, color);
        for &flipped in &flips {
            if let Some(Some(piece)) = self.cell_mut(flipped) {
                piece.flip();
            }
        }

        debug!(
            "{color} played ({}, {}), flipped {}",
            pos.row,
            pos.col,
            flips.len()
        );
        Ok(())
    }

    /// Rendering belongs to the caller; this only forwards the grid to the
    /// `log` facade at trace level.
    pub fn print(&self) {
        trace!("\n{self}");
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .fold((0, 0), |(black, white), piece| match piece.color() {
                Color::Black => (black + 1, white),
                Color::White => (black, white + 1),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (cell, slot) in self.grid.iter().flatten().zip(board.iter_mut()) {
            *slot = match cell.map(|piece| piece.color()) {
                None => 0,
                Some(Color::Black) => 1,
                Some(Color::White) => 2,
            };
        }
        board
    }

    pub fn state(&self) -> BoardState {
        let (black_count, white_count) = self.count();
        BoardState {
            board: self.to_array().to_vec(),
            black_count,
            white_count,
            is_over: self.is_over(),
        }
    }

    fn cell(&self, pos: Position) -> Option<&Option<Piece>> {
        if pos.is_valid() {
            Some(&self.grid[pos.row as usize][pos.col as usize])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Option<Piece>> {
        if pos.is_valid() {
            Some(&mut self.grid[pos.row as usize][pos.col as usize])
        } else {
            None
        }
    }

    fn collect_flips(&self, pos: Position, color: Color) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.positions_to_flip(pos.offset(dir), dir, color))
            .flatten()
            .collect()
    }

    /// Walks from `start` along `dir` collecting opposing pieces until a
    /// piece of `color` closes the run. Returns `None` when the walk leaves
    /// the board, hits an empty cell, or meets `color` before any opponent.
    fn positions_to_flip(
        &self,
        start: Position,
        dir: (i32, i32),
        color: Color,
    ) -> Option<Vec<Position>> {
        let mut run = Vec::new();
        let mut pos = start;

        loop {
            let piece = self.cell(pos)?.as_ref()?;
            if piece.color() == color {
                return if run.is_empty() { None } else { Some(run) };
            }
            run.push(pos);
            pos = pos.offset(dir);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "\n {} ", row + 1)?;
            for cell in cells {
                let symbol = match cell.map(|piece| piece.color()) {
                    None => '.',
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                };
                write!(f, "{symbol} ")?;
            }
        }
        Ok(())
    }
}

/// Parses eight rows of `B`, `W` or `.`; whitespace inside a row and blank
/// lines are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::MalformedLayout(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardError::MalformedLayout(format!(
                    "row {row_idx} has {} cells, expected {BOARD_SIZE}",
                    row.len()
                )));
            }
            for (col_idx, symbol) in row.iter().enumerate() {
                cells[row_idx][col_idx] = match symbol {
                    'B' => Some(Color::Black),
                    'W' => Some(Color::White),
                    '.' => None,
                    other => {
                        return Err(BoardError::MalformedLayout(format!(
                            "unexpected {other:?} at row {row_idx}, col {col_idx}"
                        )));
                    }
                };
            }
        }

        Ok(Self::from_cells(cells))
    }
}
