//! Domain types used throughout the app.
//!
//! This module defines:
//!
//! - the closed vehicle and tunnel enumerations (`VehicleClass`, `TunnelId`)
//! - the resolver input snapshot (`TollInput`)
//! - the per-tunnel board entry (`TunnelItem`)
//! - display locale selection (`Locale`)

pub mod types;

pub use types::*;
