//! Toll fare resolution.
//!
//! Responsibilities:
//!
//! - evaluate ordered time-band tables (`table`)
//! - hold the hand-authored tariff constants per tunnel (`tariff`)
//! - map (tunnel, input) to a fare, including vehicle overrides (`resolver`)

pub mod resolver;
pub mod table;
pub mod tariff;

pub use resolver::*;
pub use table::*;
pub use tariff::*;
