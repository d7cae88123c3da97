//! Move sequence parsing and replay.
//!
//! A move is a column number 0-8. Sequences separate moves with spaces or
//! commas: `"0 4 1, 5 2"`.

use anyhow::{bail, Context, Result};
use tictac3d_core::{Game, TOTAL_COLUMNS};

/// Parse a single column number.
pub fn parse_move(s: &str) -> Result<usize> {
    let s = s.trim();
    let column: usize = s.parse().with_context(|| format!("'{}' is not a column number", s))?;
    if column >= TOTAL_COLUMNS {
        bail!("column {} out of range (0-8)", column);
    }
    Ok(column)
}

/// Parse a sequence of moves separated by spaces or commas.
pub fn parse_moves(s: &str) -> Result<Vec<usize>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_move(token).with_context(|| format!("move {}", i + 1)))
        .collect()
}

/// Play a sequence from a fresh game, stopping with an error at the first
/// rejected move.
pub fn apply_moves(moves: &[usize]) -> Result<Game> {
    let mut game = Game::new();
    for (i, &column) in moves.iter().enumerate() {
        game.drop_token(column)
            .with_context(|| format!("move {} (column {}) rejected", i + 1, column))?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac3d_core::{Player, WinResult};

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("0 4 1, 5 2").unwrap(), vec![0, 4, 1, 5, 2]);
        assert_eq!(parse_moves("  ").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_moves("8,8,8").unwrap(), vec![8, 8, 8]);
    }

    #[test]
    fn test_parse_moves_rejects_garbage() {
        let err = parse_moves("0 x 1").unwrap_err();
        assert!(format!("{:#}", err).contains("move 2"));
        assert!(parse_moves("9").is_err());
    }

    #[test]
    fn test_apply_moves_win() {
        let game = apply_moves(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(game.status().winner, Some(Player::Dark));
        assert_eq!(tictac3d_core::check_win_condition(game.board()), WinResult::won(Player::Dark));
    }

    #[test]
    fn test_apply_moves_rejects_full_column() {
        let err = apply_moves(&[5, 5, 5, 5]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("move 4"), "{}", message);
        assert!(message.contains("column 5 is full"), "{}", message);
    }

    #[test]
    fn test_apply_moves_rejects_after_win() {
        let err = apply_moves(&[0, 3, 1, 4, 2, 6]).unwrap_err();
        assert!(format!("{:#}", err).contains("game is already over"));
    }
}
