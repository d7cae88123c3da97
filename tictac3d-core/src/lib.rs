//! Rules engine for 3x3x3 stacking tic-tac-toe.
//!
//! Two players drop tokens into nine vertical columns. Each column holds up
//! to three tokens, filled from the bottom. Three same-owner tokens along any
//! of the 49 lines of the lattice win.
//!
//! # Lattice
//!
//! ```text
//! Footprint (columns viewed from above, row-major):
//!   0 1 2
//!   3 4 5
//!   6 7 8
//!
//! column = footprint_row * 3 + footprint_col
//! layer 0 = bottom (filled first), layer 2 = top
//! ```
//!
//! # Packed Encoding (64-bit)
//!
//! ```text
//! Bits 0-53:  27 cells × 2 bits (0=empty, 1=dark, 2=light)
//! Bits 54-63: Unused (zero)
//!
//! Cell index = column * 3 + layer
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod game;
pub mod lines;
pub mod rules;
pub mod win;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use game::{Game, GameStatus, PlacementError};
pub use lines::{LineFamily, WinningLine, CATALOG, LINE_COUNT};
pub use rules::{column_positions, ColumnPosition};
pub use win::{check_win_condition, evaluate, scan, scan_fast, winning_line, WinResult};

/// Width and depth of the footprint, and height of every column.
pub const BOARD_SIZE: usize = 3;
/// A column never holds more than this many tokens.
pub const MAX_TOKENS_PER_COLUMN: usize = 3;
/// Number of columns in the footprint.
pub const TOTAL_COLUMNS: usize = 9;
/// Number of cells in the lattice.
pub const TOTAL_CELLS: usize = TOTAL_COLUMNS * MAX_TOKENS_PER_COLUMN;

/// Player identifier.
///
/// Serialized as `"dark"` / `"light"`; shown to players as Team Walnut and
/// Team Birch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Dark = 1,
    Light = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Convert from 2-bit cell encoding (1 or 2) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::Dark),
            2 => Some(Player::Light),
            _ => None,
        }
    }

    /// Parse the serialized name (`"dark"` or `"light"`).
    pub fn from_name(name: &str) -> Option<Player> {
        match name {
            "dark" => Some(Player::Dark),
            "light" => Some(Player::Light),
            _ => None,
        }
    }

    /// Serialized name.
    pub fn name(self) -> &'static str {
        match self {
            Player::Dark => "dark",
            Player::Light => "light",
        }
    }

    /// Team name shown to players.
    pub fn team(self) -> &'static str {
        match self {
            Player::Dark => "Walnut",
            Player::Light => "Birch",
        }
    }

    /// Single-character glyph used in text rendering.
    pub fn glyph(self) -> char {
        match self {
            Player::Dark => 'W',
            Player::Light => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.team())
    }
}

/// A lattice position: footprint column (0-8) and layer (0-2).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub column: u8,
    pub layer: u8,
}

impl Cell {
    /// Create a cell. Does NOT validate; [`Cell::index`] is only meaningful
    /// for cells inside the lattice (see [`Cell::is_valid`]).
    #[inline]
    pub const fn new(column: u8, layer: u8) -> Cell {
        Cell { column, layer }
    }

    /// Linear index (0-26) used by the packed encoding and the line masks.
    /// Wraps for cells far outside the lattice.
    #[inline]
    pub const fn index(self) -> u8 {
        self.column.wrapping_mul(MAX_TOKENS_PER_COLUMN as u8).wrapping_add(self.layer)
    }

    /// Single-bit mask for this cell in a 27-bit occupancy mask.
    /// Cells outside the lattice map to 0.
    #[inline]
    pub const fn bit(self) -> u32 {
        let index = self.column as u32 * MAX_TOKENS_PER_COLUMN as u32 + self.layer as u32;
        if index < TOTAL_CELLS as u32 {
            1 << index
        } else {
            0
        }
    }

    /// Footprint row (0-2).
    #[inline]
    pub const fn row(self) -> u8 {
        self.column / BOARD_SIZE as u8
    }

    /// Footprint column within the row (0-2).
    #[inline]
    pub const fn col(self) -> u8 {
        self.column % BOARD_SIZE as u8
    }

    /// Check if this cell lies inside the lattice.
    #[inline]
    pub fn is_valid(self) -> bool {
        (self.column as usize) < TOTAL_COLUMNS && (self.layer as usize) < MAX_TOKENS_PER_COLUMN
    }

    /// Iterate over all 27 cells, column-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..TOTAL_COLUMNS as u8)
            .flat_map(|column| (0..MAX_TOKENS_PER_COLUMN as u8).map(move |layer| Cell::new(column, layer)))
    }
}

/// One column of the board: token slots from layer 0 upward.
///
/// Canonical columns hold only `Some` values, but null-padded columns (as
/// produced by sparse construction or fixed-size front ends) are accepted
/// everywhere.
pub type Column = Vec<Option<Player>>;

/// Column-major sparse board.
///
/// Serializes as the nested-array game state used by the browser front end:
/// `[["dark", "light"], [], ...]`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Bits per cell in the packed encoding.
    const CELL_BITS: u32 = 2;
    /// Mask for a single packed cell.
    const CELL_MASK: u64 = 0b11;

    /// Create an empty board with 9 empty columns.
    pub fn new() -> Board {
        Board {
            columns: vec![Vec::new(); TOTAL_COLUMNS],
        }
    }

    /// Wrap arbitrary columns. Does NOT validate count, height or gaps;
    /// reads outside the supplied columns are simply empty.
    pub fn from_columns(columns: Vec<Column>) -> Board {
        Board { columns }
    }

    /// All columns as stored.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Slots of one column, or an empty slice if the column is missing.
    pub fn column(&self, idx: usize) -> &[Option<Player>] {
        self.columns.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Token at a cell. Missing columns and layers read as empty.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Player> {
        self.columns
            .get(cell.column as usize)
            .and_then(|column| column.get(cell.layer as usize))
            .copied()
            .flatten()
    }

    /// Drop a token on top of a column's stack.
    ///
    /// The token lands in the first slot above the highest token, reusing
    /// null padding, so padded and unpadded columns stack identically.
    /// Columns outside the footprint (index >= 9) are ignored.
    /// Does NOT check height - caller must check [`rules::can_place`] first.
    pub fn push_token(&mut self, column: usize, player: Player) {
        if column >= TOTAL_COLUMNS {
            return;
        }
        if self.columns.len() <= column {
            self.columns.resize_with(column + 1, Vec::new);
        }
        let slots = &mut self.columns[column];
        let top = slots.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
        if top < slots.len() {
            slots[top] = Some(player);
        } else {
            slots.push(Some(player));
        }
    }

    /// Clear the board back to 9 empty columns.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Total number of tokens on the board.
    pub fn token_total(&self) -> usize {
        self.columns.iter().map(|column| rules::token_count(column)).sum()
    }

    /// Check if all 9 columns hold their maximum number of tokens.
    pub fn is_filled(&self) -> bool {
        (0..TOTAL_COLUMNS).all(|idx| rules::is_full(self.column(idx)))
    }

    // ========== Packed Encoding ==========

    /// Pack the 27 lattice cells into a u64.
    ///
    /// Slots outside the lattice (extra columns, layers above 2) are not
    /// representable and are dropped.
    pub fn to_u64(&self) -> u64 {
        Cell::all().fold(0u64, |bits, cell| match self.get(cell) {
            Some(player) => bits | ((player as u64) << (cell.index() as u32 * Self::CELL_BITS)),
            None => bits,
        })
    }

    /// Unpack a board. Columns are trimmed after their highest token, so a
    /// gap below a token survives as an interior `None`. Unused bits and the
    /// reserved cell value 3 are ignored.
    pub fn from_u64(bits: u64) -> Board {
        let columns = (0..TOTAL_COLUMNS as u8)
            .map(|column| {
                let mut slots: Column = (0..MAX_TOKENS_PER_COLUMN as u8)
                    .map(|layer| {
                        let shift = Cell::new(column, layer).index() as u32 * Self::CELL_BITS;
                        Player::from_bits(((bits >> shift) & Self::CELL_MASK) as u8)
                    })
                    .collect();
                while slots.last() == Some(&None) {
                    slots.pop();
                }
                slots
            })
            .collect();
        Board { columns }
    }

    /// 27-bit occupancy masks (dark, light); bit `i` is cell index `i`.
    pub fn masks(&self) -> (u32, u32) {
        let mut dark = 0u32;
        let mut light = 0u32;

        for cell in Cell::all() {
            match self.get(cell) {
                Some(Player::Dark) => dark |= cell.bit(),
                Some(Player::Light) => light |= cell.bit(),
                None => {}
            }
        }

        (dark, light)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Three layer grids side by side, bottom layer first.
///
/// ```text
/// layer 0  layer 1  layer 2
/// W . .    . . .    . . .
/// . B .    . W .    . . .
/// . . .    . . .    . . .
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "layer 0  layer 1  layer 2")?;
        for row in 0..BOARD_SIZE as u8 {
            let mut line = String::new();
            for layer in 0..MAX_TOKENS_PER_COLUMN as u8 {
                if layer > 0 {
                    line.push_str("    ");
                }
                for col in 0..BOARD_SIZE as u8 {
                    if col > 0 {
                        line.push(' ');
                    }
                    let cell = Cell::new(row * BOARD_SIZE as u8 + col, layer);
                    line.push(self.get(cell).map_or('.', Player::glyph));
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
