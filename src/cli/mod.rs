//! Command-line parsing for the tunnel toll board.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pricing code.

use clap::{Parser, Subcommand};

use crate::domain::{Locale, VehicleClass};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tolls", version, about = "Hong Kong tunnel toll board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current toll board once.
    Board(BoardArgs),
    /// Print a single tunnel's current fare (useful for scripting).
    Fare(FareArgs),
    /// List the known public-holiday dates and where they came from.
    Holidays(HolidaysArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same evaluation pipeline as `tolls board`, rendered
    /// live with a per-tunnel fare-profile chart and a 60-second refresh.
    Tui(BoardArgs),
}

/// Common options for board evaluation.
#[derive(Debug, Parser, Clone)]
pub struct BoardArgs {
    /// Vehicle class (defaults to the persisted preference).
    #[arg(short = 'v', long, value_enum)]
    pub vehicle: Option<VehicleClass>,

    /// Evaluate at this Hong Kong time instead of now (HH:MM).
    #[arg(long)]
    pub time: Option<String>,

    /// Evaluate on this date instead of today (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,

    /// Force holiday pricing regardless of the calendar.
    #[arg(long)]
    pub holiday: bool,

    /// Force non-holiday pricing regardless of the calendar (Sundays still
    /// use the holiday tariff).
    #[arg(long)]
    pub no_holiday: bool,

    /// Skip the network and use the bundled holiday snapshot.
    #[arg(long)]
    pub offline: bool,

    /// Display language (defaults to the persisted preference).
    #[arg(short = 'l', long, value_enum)]
    pub locale: Option<Locale>,
}

/// Options for a single-tunnel fare query.
#[derive(Debug, Parser)]
pub struct FareArgs {
    /// Tunnel identifier (e.g. cross_harbour, western, tai_lam).
    pub tunnel: String,

    #[command(flatten)]
    pub board: BoardArgs,
}

/// Options for the holiday listing.
#[derive(Debug, Parser)]
pub struct HolidaysArgs {
    /// Skip the network and use the bundled snapshot.
    #[arg(long)]
    pub offline: bool,
}
