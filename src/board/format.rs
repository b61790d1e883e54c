//! Formatted terminal output for the CLI front-end.
//!
//! Formatting stays out of the resolver so fares remain plain integers until
//! the last moment, and so output tweaks never touch pricing code.

use crate::data::clock::{hhmm, ClockReading};
use crate::data::holidays::{HolidayList, HolidaySource};
use crate::domain::{Locale, TollInput, TunnelItem};

/// Short weekday label, 0 = Sunday.
pub fn weekday_label(day_of_week: u8, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match day_of_week {
            0 => "Sun",
            1 => "Mon",
            2 => "Tue",
            3 => "Wed",
            4 => "Thu",
            5 => "Fri",
            6 => "Sat",
            _ => "?",
        },
        Locale::ZhHk => match day_of_week {
            0 => "星期日",
            1 => "星期一",
            2 => "星期二",
            3 => "星期三",
            4 => "星期四",
            5 => "星期五",
            6 => "星期六",
            _ => "?",
        },
    }
}

/// One-line description of the tariff context in effect.
pub fn context_label(input: &TollInput, locale: Locale) -> &'static str {
    if input.day_of_week == 0 {
        return match locale {
            Locale::En => "Sunday (holiday tariff)",
            Locale::ZhHk => "星期日（假日收費）",
        };
    }
    if input.is_public_holiday {
        return match locale {
            Locale::En => "public holiday (holiday tariff)",
            Locale::ZhHk => "公眾假期（假日收費）",
        };
    }
    match locale {
        Locale::En => "weekday tariff",
        Locale::ZhHk => "平日收費",
    }
}

/// Full board printout: header plus the per-tunnel table.
pub fn format_board(
    items: &[TunnelItem],
    input: &TollInput,
    reading: &ClockReading,
    locale: Locale,
) -> String {
    let mut out = String::new();

    match locale {
        Locale::En => out.push_str("=== Hong Kong tunnel tolls ===\n"),
        Locale::ZhHk => out.push_str("=== 香港隧道現時收費 ===\n"),
    }
    out.push_str(&format!(
        "{} ({}) {} | {}\n",
        reading.date,
        weekday_label(input.day_of_week, locale),
        hhmm(input.minute_of_day),
        context_label(input, locale),
    ));
    out.push_str(&format!("{}\n", input.vehicle.label(locale)));
    out.push('\n');
    out.push_str(&format_board_table(items, locale));

    out
}

/// The per-tunnel table body.
pub fn format_board_table(items: &[TunnelItem], locale: Locale) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(
            format!("{:<48} ${:>3}", item.display_name(locale), item.toll).trim_end(),
        );
        if let Some(note) = item.note {
            out.push_str(&format!("  ({})", note.label(locale)));
        }
        out.push('\n');
    }
    out
}

/// Single-tunnel line for `tolls fare`.
pub fn format_fare(item: &TunnelItem, locale: Locale) -> String {
    let mut out = format!("{}: ${}", item.display_name(locale), item.toll);
    if let Some(note) = item.note {
        out.push_str(&format!(" ({})", note.label(locale)));
    }
    out
}

/// Listing for `tolls holidays`.
pub fn format_holidays(list: &HolidayList) -> String {
    let source = match list.source {
        HolidaySource::Feed => "1823 feed",
        HolidaySource::Bundled => "bundled snapshot",
    };
    let mut out = format!("Known public holidays: {} ({source})\n", list.dates.len());
    for date in &list.dates {
        out.push_str(date);
        out.push('\n');
    }
    out
}
