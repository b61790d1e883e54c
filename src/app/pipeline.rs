//! Shared evaluation pipeline used by both the CLI and the TUI.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! clock -> holiday lookup -> `TollInput` -> board assembly
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::NaiveDate;

use crate::board;
use crate::cli::BoardArgs;
use crate::data::clock::{self, ClockReading};
use crate::data::holidays::{is_holiday, HolidayCache, HolidayClient};
use crate::domain::{TollInput, TunnelItem, VehicleClass};
use crate::error::AppError;
use crate::prefs::Preferences;

/// All computed outputs of a single board evaluation.
#[derive(Debug, Clone)]
pub struct BoardOutput {
    pub reading: ClockReading,
    pub input: TollInput,
    pub items: Vec<TunnelItem>,
}

/// Evaluate the board for CLI arguments: clock and calendar with any
/// overrides applied, vehicle defaulting to the persisted preference.
pub fn evaluate(
    args: &BoardArgs,
    stored: &Preferences,
    client: &HolidayClient,
    cache: &mut HolidayCache,
) -> Result<BoardOutput, AppError> {
    let vehicle = args.vehicle.unwrap_or(stored.vehicle);
    let reading = reading_from_args(args)?;

    let from_calendar = is_holiday(&reading.date.to_string(), &cache.get(client).dates);
    let is_public_holiday = if args.holiday {
        true
    } else if args.no_holiday {
        false
    } else {
        from_calendar
    };

    Ok(build(reading, vehicle, is_public_holiday))
}

/// Evaluate the board for the live clock with no overrides (TUI refresh).
pub fn evaluate_live(
    vehicle: VehicleClass,
    client: &HolidayClient,
    cache: &mut HolidayCache,
) -> BoardOutput {
    let reading = clock::now_hk();
    let is_public_holiday = is_holiday(&reading.date.to_string(), &cache.get(client).dates);
    build(reading, vehicle, is_public_holiday)
}

fn build(reading: ClockReading, vehicle: VehicleClass, is_public_holiday: bool) -> BoardOutput {
    let input = TollInput {
        minute_of_day: reading.minute_of_day,
        day_of_week: reading.day_of_week,
        is_public_holiday,
        vehicle,
    };
    BoardOutput {
        reading,
        input,
        items: board::assemble(&input),
    }
}

/// The clock reading to evaluate at: now, unless `--date`/`--time` override
/// parts of it. The day of week always follows the effective date.
fn reading_from_args(args: &BoardArgs) -> Result<ClockReading, AppError> {
    let mut reading = clock::now_hk();
    if let Some(raw) = &args.date {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| AppError::usage(format!("Invalid date '{raw}': {e}")))?;
        reading = clock::reading_for(date, reading.minute_of_day);
    }
    if let Some(raw) = &args.time {
        let minute = clock::parse_hhmm(raw)
            .ok_or_else(|| AppError::usage(format!("Invalid time '{raw}' (expected HH:MM).")))?;
        reading.minute_of_day = minute;
    }
    Ok(reading)
}
