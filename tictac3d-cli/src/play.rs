//! Interactive hot-seat game.

use std::io::{BufRead, Write};

use anyhow::Result;
use tictac3d_core::Game;
use tracing::debug;

use crate::notation::parse_move;

const HELP: &str = "Enter a column (0-8), 'r' to reset, 'q' to quit.";

/// Run a game reading one command per line from `input`.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> Result<()> {
    let mut game = Game::new();

    writeln!(out, "{}", HELP)?;
    show(&mut out, &game)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => {
                game.reset();
                writeln!(out, "New game.")?;
            }
            command => match parse_move(command) {
                Ok(column) => {
                    if let Err(err) = game.drop_token(column) {
                        writeln!(out, "{}", err)?;
                        continue;
                    }
                }
                Err(err) => {
                    debug!(command, "unparseable input");
                    writeln!(out, "{:#}. {}", err, HELP)?;
                    continue;
                }
            },
        }
        show(&mut out, &game)?;
    }

    Ok(())
}

/// Print the board followed by either the turn prompt or the result.
fn show<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", game.board())?;

    let status = game.status();
    match (status.is_game_over, status.winner) {
        (true, Some(winner)) => writeln!(out, "Team {} Wins! Press r to play again.", winner)?,
        (true, None) => writeln!(out, "Board full. Press r to play again.")?,
        (false, _) => writeln!(
            out,
            "Current player: {} ({})",
            game.current_player(),
            game.current_player().glyph()
        )?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_vertical_win_announced() {
        let output = session("0\n1\n0\n1\n0\n");
        assert!(output.contains("Team Walnut Wins!"), "{}", output);
    }

    #[test]
    fn test_turn_prompt() {
        let output = session("4\n");
        assert!(output.contains("Current player: Walnut (W)"));
        assert!(output.ends_with("Current player: Birch (B)\n"), "{}", output);
    }

    #[test]
    fn test_bad_input_reported() {
        let output = session("x\n9\n");
        assert!(output.contains("'x' is not a column number"), "{}", output);
        assert!(output.contains("column 9 out of range"), "{}", output);
    }

    #[test]
    fn test_full_column_reported() {
        let output = session("2\n2\n2\n2\n");
        assert!(output.contains("column 2 is full"), "{}", output);
    }

    #[test]
    fn test_reset_and_quit() {
        let output = session("0\n1\n0\n1\n0\n3\nr\n4\nq\n5\n");
        assert!(output.contains("game is already over"));
        assert!(output.contains("New game."));
        // the move after quit is never played
        assert!(output.ends_with("Current player: Birch (B)\n"), "{}", output);
    }
}
