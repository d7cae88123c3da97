//! Turn controller: applies drops, checks for a win after each one and
//! flips the active player.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::rules;
use crate::win::{check_win_condition, winning_line, WinResult};
use crate::{Board, Player, WinningLine, TOTAL_COLUMNS};

/// Whether play has ended, and who won.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub is_game_over: bool,
    pub winner: Option<Player>,
}

/// A rejected drop. The game is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
pub enum PlacementError {
    #[display("game is already over")]
    GameOver,
    #[display("column {column} is full")]
    ColumnFull { column: usize },
    #[display("column {column} does not exist (expected 0-8)")]
    InvalidColumn { column: usize },
}

/// One game session. Dark moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Player,
    status: GameStatus,
    moves: Vec<u8>,
}

impl Game {
    /// Start a new game on an empty board.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            current: Player::Dark,
            status: GameStatus::default(),
            moves: Vec::new(),
        }
    }

    /// Resume from an existing board (for example one decoded with
    /// [`Board::from_u64`]). The status is derived by scanning the board.
    pub fn from_board(board: Board, to_move: Player) -> Game {
        let result = check_win_condition(&board);
        Game {
            status: GameStatus {
                is_game_over: result.is_win || board.is_filled(),
                winner: result.winner,
            },
            board,
            current: to_move,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Columns dropped into so far, oldest first.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }

    /// Columns that accept a token right now.
    pub fn legal_columns(&self) -> Vec<u8> {
        (0..TOTAL_COLUMNS)
            .filter(|&column| rules::can_place(self.board.column(column), self.status.is_game_over))
            .map(|column| column as u8)
            .collect()
    }

    /// The completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<&'static WinningLine> {
        winning_line(&self.board)
    }

    /// Drop the current player's token into `column`.
    ///
    /// On success the board is re-scanned, a win ends the game, and the
    /// turn passes to the opponent.
    pub fn drop_token(&mut self, column: usize) -> Result<WinResult, PlacementError> {
        if self.status.is_game_over {
            debug!(column, "drop rejected: game over");
            return Err(PlacementError::GameOver);
        }
        if column >= TOTAL_COLUMNS {
            debug!(column, "drop rejected: no such column");
            return Err(PlacementError::InvalidColumn { column });
        }
        if !rules::can_place(self.board.column(column), self.status.is_game_over) {
            debug!(column, "drop rejected: column full");
            return Err(PlacementError::ColumnFull { column });
        }

        let player = self.current;
        self.board.push_token(column, player);
        self.moves.push(column as u8);
        debug!(column, %player, moves = self.moves.len(), "token dropped");

        let result = check_win_condition(&self.board);
        if let Some(winner) = result.winner {
            info!(%winner, moves = self.moves.len(), "game won");
            self.status = GameStatus {
                is_game_over: true,
                winner: Some(winner),
            };
        } else if self.board.is_filled() {
            info!("board filled without a winner");
            self.status.is_game_over = true;
        }

        self.current = player.opponent();
        Ok(result)
    }

    /// Clear the board and start over with Dark to move.
    pub fn reset(&mut self) {
        debug!(moves = self.moves.len(), "game reset");
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
