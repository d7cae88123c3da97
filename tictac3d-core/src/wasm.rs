//! WASM bindings for tictac3d-core
//!
//! Provides a JavaScript-friendly API for the browser front end. Players
//! cross the boundary as `"dark"` / `"light"` strings and boards as the
//! nested-array game state `(string | null)[][]`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{rules, Board, Game, Player};

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: Game::new() }
    }

    /// Resume from a packed board; `toMove` is "dark" or "light"
    #[wasm_bindgen(js_name = fromU64)]
    pub fn from_u64(bits: u64, to_move: &str) -> Result<WasmGame, JsError> {
        let player = Player::from_name(to_move)
            .ok_or_else(|| JsError::new(&format!("unknown player: {}", to_move)))?;
        Ok(WasmGame {
            inner: Game::from_board(Board::from_u64(bits), player),
        })
    }

    /// Get u64 encoding of the board
    #[wasm_bindgen(js_name = toU64)]
    pub fn to_u64(&self) -> u64 {
        self.inner.board().to_u64()
    }

    /// Player to move: "dark" or "light"
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.inner.current_player().name().to_string()
    }

    /// Drop the current player's token. Returns false if the drop was rejected.
    #[wasm_bindgen(js_name = dropToken)]
    pub fn drop_token(&mut self, column: usize) -> bool {
        self.inner.drop_token(column).is_ok()
    }

    /// Clear the board, Dark to move
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.status().is_game_over
    }

    /// Winner ("dark" / "light") or undefined
    pub fn winner(&self) -> Option<String> {
        self.inner.status().winner.map(|p| p.name().to_string())
    }

    /// Winning line as [column, layer, column, layer, column, layer]
    /// Returns empty array if no winner
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        self.inner
            .winning_line()
            .map(|line| line.cells.iter().flat_map(|c| [c.column, c.layer]).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = tokenCount)]
    pub fn token_count(&self, column: usize) -> usize {
        rules::token_count(self.inner.board().column(column))
    }

    #[wasm_bindgen(js_name = isColumnFull)]
    pub fn is_column_full(&self, column: usize) -> bool {
        rules::is_full(self.inner.board().column(column))
    }

    #[wasm_bindgen(js_name = canPlaceToken)]
    pub fn can_place_token(&self, column: usize) -> bool {
        rules::can_place(self.inner.board().column(column), self.inner.status().is_game_over)
    }

    #[wasm_bindgen(js_name = isGameEmpty)]
    pub fn is_game_empty(&self) -> bool {
        rules::is_board_empty(self.inner.board())
    }

    /// Board as nested arrays, bottom token first in each column
    #[wasm_bindgen(js_name = boardState)]
    pub fn board_state(&self) -> Result<JsValue, JsError> {
        to_js(self.inner.board())
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a nested-array game state. Returns `{ isWin, winner }`.
#[wasm_bindgen(js_name = checkWinCondition)]
pub fn js_check_win_condition(state: JsValue) -> Result<JsValue, JsError> {
    let board: Board = serde_wasm_bindgen::from_value(state)?;
    to_js(&crate::check_win_condition(&board))
}

/// Column scene positions as `[{ x, z, index }, ...]`.
#[wasm_bindgen(js_name = getColumnPositions)]
pub fn js_column_positions() -> Result<JsValue, JsError> {
    to_js(&rules::column_positions())
}

/// Serialize with `null` for empty slots, matching the front end's types.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
