//! Command-line interface for tictac3d.

use clap::{Parser, Subcommand, ValueEnum};
use tictac3d_core::LineFamily;

/// 3x3x3 stacking tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac3d")]
#[command(about = "Drop tokens into nine columns; three in a row in any direction wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on stdin/stdout
    Play,

    /// Apply a move sequence and report the result
    Replay {
        /// Column numbers separated by spaces or commas, e.g. "0 4 1 5 2"
        #[arg(short, long)]
        moves: String,

        /// Print board and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the winning lines
    Lines {
        /// Only list one family
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,
    },

    /// Print column scene positions as JSON
    Positions,
}

/// Line family selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyArg {
    PlaneRow,
    PlaneColumn,
    Vertical,
    PlaneDiagonal,
    CrossLayerDiagonal,
}

impl From<FamilyArg> for LineFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::PlaneRow => LineFamily::PlaneRow,
            FamilyArg::PlaneColumn => LineFamily::PlaneColumn,
            FamilyArg::Vertical => LineFamily::Vertical,
            FamilyArg::PlaneDiagonal => LineFamily::PlaneDiagonal,
            FamilyArg::CrossLayerDiagonal => LineFamily::CrossLayerDiagonal,
        }
    }
}
