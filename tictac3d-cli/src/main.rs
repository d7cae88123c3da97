//! tictac3d - 3x3x3 stacking tic-tac-toe in the terminal.
//!
//! Usage:
//!   # Hot-seat game
//!   cargo run --release --bin tictac3d -- play
//!
//!   # Replay a sequence of column drops
//!   cargo run --release --bin tictac3d -- replay --moves "0 4 1 5 2"
//!
//!   # List the cross-layer diagonals
//!   cargo run --release --bin tictac3d -- lines --family cross-layer-diagonal

mod cli;
mod notation;
mod play;

use std::io;

use anyhow::Result;
use clap::Parser;
use tictac3d_core::{check_win_condition, column_positions, lines, LineFamily};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => {
            let stdin = io::stdin();
            play::run(stdin.lock(), io::stdout().lock())
        }
        Command::Replay { moves, json } => replay(&moves, json),
        Command::Lines { family } => {
            list_lines(family.map(LineFamily::from));
            Ok(())
        }
        Command::Positions => {
            println!("{}", serde_json::to_string_pretty(&column_positions())?);
            Ok(())
        }
    }
}

/// Apply a move sequence and print the final board and win result.
fn replay(moves: &str, json: bool) -> Result<()> {
    let moves = notation::parse_moves(moves)?;
    let game = notation::apply_moves(&moves)?;
    let result = check_win_condition(game.board());
    info!(moves = moves.len(), ?result, "replay finished");

    if json {
        let report = serde_json::json!({
            "moves": game.moves(),
            "board": game.board(),
            "result": result,
            "currentPlayer": game.current_player(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", game.board());
    match (result.winner, game.winning_line()) {
        (Some(winner), Some(line)) => println!("Team {} Wins! ({})", winner, line),
        _ => println!("No winner yet. {} to move.", game.current_player()),
    }
    Ok(())
}

/// Print catalog lines in scan order with their catalog index.
fn list_lines(family: Option<LineFamily>) {
    for (i, line) in lines::catalog().iter().enumerate() {
        if family.map_or(true, |f| line.family == f) {
            println!("{:2}  {}", i, line);
        }
    }
}
