//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves preferences and holiday data
//! - evaluates the board
//! - prints reports or hands off to the TUI

use clap::Parser;

use crate::cli::{BoardArgs, Command, FareArgs, HolidaysArgs};
use crate::data::holidays::{HolidayCache, HolidayClient};
use crate::domain::TunnelId;
use crate::error::AppError;
use crate::prefs;

pub mod pipeline;

/// Entry point for the `tolls` binary.
pub fn run() -> Result<(), AppError> {
    // We want `tolls` and `tolls -v taxi` to behave like `tolls tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Board(args) => handle_board(args),
        Command::Fare(args) => handle_fare(args),
        Command::Holidays(args) => handle_holidays(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_board(args: BoardArgs) -> Result<(), AppError> {
    let stored = prefs::load();
    let locale = args.locale.unwrap_or(stored.locale);
    let client = holiday_client(&args);
    let mut cache = HolidayCache::new();

    let run = pipeline::evaluate(&args, &stored, &client, &mut cache)?;
    println!(
        "{}",
        crate::board::format_board(&run.items, &run.input, &run.reading, locale)
    );
    Ok(())
}

fn handle_fare(args: FareArgs) -> Result<(), AppError> {
    let tunnel = TunnelId::from_key(&args.tunnel).ok_or_else(|| {
        AppError::usage(format!(
            "Unknown tunnel '{}'. Known tunnels: {}.",
            args.tunnel,
            TunnelId::ALL.map(|t| t.as_key()).join(", ")
        ))
    })?;

    let stored = prefs::load();
    let locale = args.board.locale.unwrap_or(stored.locale);
    let client = holiday_client(&args.board);
    let mut cache = HolidayCache::new();

    let run = pipeline::evaluate(&args.board, &stored, &client, &mut cache)?;
    let item = crate::board::entry(tunnel, &run.input);
    println!("{}", crate::board::format_fare(&item, locale));
    Ok(())
}

fn handle_holidays(args: HolidaysArgs) -> Result<(), AppError> {
    let client = if args.offline {
        HolidayClient::offline()
    } else {
        HolidayClient::from_env()
    };
    let mut cache = HolidayCache::new();
    print!("{}", crate::board::format_holidays(cache.get(&client)));
    Ok(())
}

fn holiday_client(args: &BoardArgs) -> HolidayClient {
    if args.offline {
        HolidayClient::offline()
    } else {
        HolidayClient::from_env()
    }
}

/// Rewrite argv so `tolls` defaults to `tolls tui`.
///
/// Rules:
/// - `tolls`                      -> `tolls tui`
/// - `tolls -v taxi ...`          -> `tolls tui -v taxi ...`
/// - `tolls --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "board" | "fare" | "holidays" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["tolls"])), argv(&["tolls", "tui"]));
    }

    #[test]
    fn leading_flags_route_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["tolls", "-v", "taxi"])),
            argv(&["tolls", "tui", "-v", "taxi"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        for first in ["board", "fare", "holidays", "tui", "--help", "-V"] {
            let args = argv(&["tolls", first]);
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }
}
