//! Placement legality and column layout.
//!
//! These are queries only; the turn controller performs the placement.
//! All column queries count occupied slots, so null-padded and unpadded
//! columns answer the same.

use serde::{Deserialize, Serialize};

use crate::{Board, Player, BOARD_SIZE, MAX_TOKENS_PER_COLUMN, TOTAL_COLUMNS};

/// Distance between neighbouring columns in scene units.
pub const COLUMN_SPACING: i32 = 2;

/// Number of tokens in a column, ignoring empty slots.
#[inline]
pub fn token_count(column: &[Option<Player>]) -> usize {
    column.iter().flatten().count()
}

/// Check if a token may be dropped into this column.
#[inline]
pub fn can_place(column: &[Option<Player>], game_over: bool) -> bool {
    token_count(column) < MAX_TOKENS_PER_COLUMN && !game_over
}

/// Check if a column holds its maximum number of tokens.
#[inline]
pub fn is_full(column: &[Option<Player>]) -> bool {
    token_count(column) >= MAX_TOKENS_PER_COLUMN
}

/// Check if no column holds a token.
pub fn is_board_empty(board: &Board) -> bool {
    board.columns().iter().all(|column| token_count(column) == 0)
}

/// Scene position of a column on the ground plane.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ColumnPosition {
    pub x: i32,
    pub z: i32,
    pub index: usize,
}

/// Column positions on a 3x3 grid centered at the origin, in column order.
///
/// ```text
///          x=-2  x=0  x=2
///   z=-2    0     1    2
///   z=0     3     4    5
///   z=2     6     7    8
/// ```
pub fn column_positions() -> [ColumnPosition; TOTAL_COLUMNS] {
    std::array::from_fn(|index| {
        let row = (index / BOARD_SIZE) as i32;
        let col = (index % BOARD_SIZE) as i32;
        ColumnPosition {
            x: (col - 1) * COLUMN_SPACING,
            z: (row - 1) * COLUMN_SPACING,
            index,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Option<Player> = Some(Player::Dark);
    const L: Option<Player> = Some(Player::Light);

    #[test]
    fn test_token_count() {
        assert_eq!(token_count(&[]), 0);
        assert_eq!(token_count(&[D]), 1);
        assert_eq!(token_count(&[D, None, L]), 2);
        assert_eq!(token_count(&[None, None, None]), 0);
    }

    #[test]
    fn test_can_place() {
        assert!(can_place(&[], false));
        assert!(can_place(&[D, L], false));
        assert!(!can_place(&[D, L, D], false));
        assert!(!can_place(&[], true));
        assert!(!can_place(&[D, L], true));
    }

    #[test]
    fn test_can_place_counts_only_tokens() {
        // padded column with two tokens still has room
        assert!(can_place(&[D, None, L, None], false));
    }

    #[test]
    fn test_is_full() {
        assert!(!is_full(&[]));
        assert!(!is_full(&[D, L]));
        assert!(!is_full(&[D, L, None]));
        assert!(is_full(&[D, L, D]));
    }

    #[test]
    fn test_is_board_empty() {
        assert!(is_board_empty(&Board::new()));
        assert!(is_board_empty(&Board::from_columns(Vec::new())));
        assert!(is_board_empty(&Board::from_columns(vec![vec![None, None]; 9])));

        let mut board = Board::new();
        board.push_token(6, Player::Light);
        assert!(!is_board_empty(&board));
    }

    #[test]
    fn test_column_positions() {
        let positions = column_positions();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], ColumnPosition { x: -2, z: -2, index: 0 });
        assert_eq!(positions[2], ColumnPosition { x: 2, z: -2, index: 2 });
        assert_eq!(positions[4], ColumnPosition { x: 0, z: 0, index: 4 });
        assert_eq!(positions[6], ColumnPosition { x: -2, z: 2, index: 6 });
        assert_eq!(positions[8], ColumnPosition { x: 2, z: 2, index: 8 });
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.index, i);
        }
    }
}
