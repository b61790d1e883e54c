//! Hand-authored tariff tables.
//!
//! Source: Transport Department toll rates for road tunnels and the Lantau
//! Link (2025 schedule). All amounts are whole Hong Kong dollars.
//!
//! The tables are configuration, not logic: every time-varying tunnel is a
//! `DaySchedule` evaluated by `table::DaySchedule::price_at`, and the
//! differences between tunnels live entirely in the constants below.

use crate::domain::{TunnelId, VehicleClass};
use crate::schedule::table::{hm, Band, DaySchedule, Rule, MINUTES_PER_DAY};

/// Taxi flat rate at the harbour crossings, all day, every day.
pub const HARBOUR_TAXI: u32 = 25;

/// Commercial (goods vehicle / minibus / bus) flat rate at the harbour
/// crossings, all day, every day.
pub const HARBOUR_COMMERCIAL: u32 = 50;

/// Motorcycles pay this fraction of the private-car fare at the harbour
/// crossings, rounded to the nearest dollar.
pub const MOTORCYCLE_FACTOR: f64 = 0.4;

/// Constant fare at the government flat-rate tunnels.
pub const FLAT_TUNNEL_TOLL: u32 = 8;

/// Tai Lam flat fare on Sundays and public holidays, all vehicle classes.
pub const TAI_LAM_HOLIDAY: u32 = 18;

/// Sundays and public holidays, private car, all three harbour crossings.
///
/// Off-peak 20 overnight, general 25 through the day, with four-minute
/// transition windows on each side of the general band.
pub static HARBOUR_HOLIDAY: DaySchedule = DaySchedule {
    bands: &[
        Band { start: 0, end: hm(10, 11), rule: Rule::Flat(20) },
        Band {
            start: hm(10, 11),
            end: hm(10, 15),
            rule: Rule::Ramp { base: 21, step_minutes: 2, step_amount: 2, limit: 25 },
        },
        Band { start: hm(10, 15), end: hm(19, 15), rule: Rule::Flat(25) },
        Band {
            start: hm(19, 15),
            end: hm(19, 19),
            rule: Rule::Ramp { base: 23, step_minutes: 2, step_amount: -2, limit: 20 },
        },
        Band { start: hm(19, 19), end: MINUTES_PER_DAY, rule: Rule::Flat(20) },
    ],
    default: 25,
};

/// Weekdays, private car, Western Harbour Crossing ($60 peak).
pub static WESTERN_WEEKDAY: DaySchedule = DaySchedule {
    bands: &[
        Band { start: 0, end: hm(7, 30), rule: Rule::Flat(20) },
        Band {
            start: hm(7, 30),
            end: hm(8, 8),
            rule: Rule::Ramp { base: 22, step_minutes: 2, step_amount: 2, limit: 60 },
        },
        Band { start: hm(8, 8), end: hm(10, 15), rule: Rule::Flat(60) },
        Band {
            start: hm(10, 15),
            end: hm(10, 43),
            rule: Rule::Ramp { base: 58, step_minutes: 2, step_amount: -2, limit: 30 },
        },
        Band { start: hm(10, 43), end: hm(16, 30), rule: Rule::Flat(30) },
        Band { start: hm(16, 30), end: hm(19, 0), rule: Rule::Flat(60) },
        Band { start: hm(19, 0), end: MINUTES_PER_DAY, rule: Rule::Flat(20) },
    ],
    default: 30,
};

/// Weekdays, private car, Cross-Harbour Tunnel and Eastern Harbour Crossing
/// ($40 peak; the two share one schedule).
pub static CROSS_EASTERN_WEEKDAY: DaySchedule = DaySchedule {
    bands: &[
        Band { start: 0, end: hm(7, 30), rule: Rule::Flat(20) },
        Band {
            start: hm(7, 30),
            end: hm(7, 48),
            rule: Rule::Ramp { base: 22, step_minutes: 2, step_amount: 2, limit: 40 },
        },
        Band { start: hm(7, 48), end: hm(10, 15), rule: Rule::Flat(40) },
        Band {
            start: hm(10, 15),
            end: hm(10, 23),
            rule: Rule::Ramp { base: 38, step_minutes: 2, step_amount: -2, limit: 30 },
        },
        Band { start: hm(10, 23), end: hm(16, 30), rule: Rule::Flat(30) },
        Band { start: hm(16, 30), end: hm(19, 0), rule: Rule::Flat(40) },
        Band { start: hm(19, 0), end: MINUTES_PER_DAY, rule: Rule::Flat(20) },
    ],
    default: 30,
};

/// Weekdays, Tai Lam Tunnel: two peak blocks, a mid-day band, off-peak 18.
pub static TAI_LAM_WEEKDAY: DaySchedule = DaySchedule {
    bands: &[
        Band { start: 0, end: hm(7, 15), rule: Rule::Flat(18) },
        Band { start: hm(7, 15), end: hm(9, 59), rule: Rule::Flat(45) },
        Band { start: hm(9, 59), end: hm(17, 15), rule: Rule::Flat(30) },
        Band { start: hm(17, 15), end: hm(19, 1), rule: Rule::Flat(45) },
        Band { start: hm(19, 1), end: MINUTES_PER_DAY, rule: Rule::Flat(18) },
    ],
    default: 18,
};

/// Private-car day schedule for a harbour crossing in the given context.
pub fn harbour_schedule(tunnel: TunnelId, holiday: bool) -> &'static DaySchedule {
    if holiday {
        return &HARBOUR_HOLIDAY;
    }
    match tunnel {
        TunnelId::Western => &WESTERN_WEEKDAY,
        _ => &CROSS_EASTERN_WEEKDAY,
    }
}

/// Tate's Cairn per-class flat rate. `None` means the class is outside this
/// tunnel's tariff vocabulary and the caller applies the private-car entry.
pub fn tates_cairn_rate(vehicle: VehicleClass) -> Option<u32> {
    match vehicle {
        VehicleClass::Motorcycle => Some(15),
        VehicleClass::PrivateCar => Some(20),
        VehicleClass::Taxi => Some(20),
        VehicleClass::Minibus => Some(23),
        VehicleClass::LightGoods => Some(24),
        VehicleClass::MediumGoods => Some(28),
        VehicleClass::HeavyGoods => Some(28),
        VehicleClass::SingleDeckBus => Some(32),
        VehicleClass::DoubleDeckBus => Some(35),
        VehicleClass::Commercial => None,
    }
}
