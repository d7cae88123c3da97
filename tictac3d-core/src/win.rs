//! Win detection.
//!
//! Every line is evaluated the same way: all three cells occupied by one
//! player. Lines are scanned in catalog order and the first completed line
//! decides the result.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::lines::{WinningLine, CATALOG, LINE_MASKS};
use crate::{Board, Player};

/// Outcome of a board scan. Serializes as `{"isWin": bool, "winner": "dark" | "light" | null}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinResult {
    pub is_win: bool,
    pub winner: Option<Player>,
}

impl WinResult {
    /// No completed line.
    pub const NONE: WinResult = WinResult {
        is_win: false,
        winner: None,
    };

    /// A completed line owned by `player`.
    pub const fn won(player: Player) -> WinResult {
        WinResult {
            is_win: true,
            winner: Some(player),
        }
    }
}

impl From<Option<Player>> for WinResult {
    fn from(winner: Option<Player>) -> Self {
        match winner {
            Some(player) => WinResult::won(player),
            None => WinResult::NONE,
        }
    }
}

/// Owner of a line, if all three of its cells hold that owner's tokens.
/// Missing columns or layers read as empty.
#[inline]
pub fn evaluate(board: &Board, line: &WinningLine) -> Option<Player> {
    let [a, b, c] = line.cells;
    let first = board.get(a)?;
    (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some(first)
}

/// First completed line in catalog order, if any.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<&'static WinningLine> {
    CATALOG.iter().find(|line| evaluate(board, line).is_some())
}

/// Scan the whole catalog; the first completed line wins.
#[instrument(level = "trace", skip(board), ret)]
pub fn scan(board: &Board) -> WinResult {
    CATALOG.iter().find_map(|line| evaluate(board, line)).into()
}

/// Win check used after every placement.
#[inline]
pub fn check_win_condition(board: &Board) -> WinResult {
    scan(board)
}

// ========== Bitboard Scan ==========

/// Bitboard variant of [`scan`]. Walks the precomputed line masks in the same
/// order, so it reports the same winner on every board.
pub fn scan_fast(board: &Board) -> WinResult {
    let (dark, light) = board.masks();

    for &mask in &LINE_MASKS {
        if dark & mask == mask {
            return WinResult::won(Player::Dark);
        }
        if light & mask == mask {
            return WinResult::won(Player::Light);
        }
    }

    WinResult::NONE
}
