//! The toll board: per-tunnel fares assembled into the display list.
//!
//! Assembly is kept apart from formatting so:
//! - the resolver stays a pure fare function
//! - output changes are localized (CLI table vs TUI widgets)

pub mod format;

pub use format::*;

use crate::domain::{Note, TollInput, TunnelId, TunnelItem};
use crate::schedule;

/// Compute the full board, one entry per tunnel in display order. Entries
/// are built fresh on every call and never mutated afterwards.
pub fn assemble(input: &TollInput) -> Vec<TunnelItem> {
    TunnelId::ALL.into_iter().map(|id| entry(id, input)).collect()
}

/// Board entry for a single tunnel.
pub fn entry(id: TunnelId, input: &TollInput) -> TunnelItem {
    let note = schedule::uses_private_car_fallback(id, input.vehicle)
        .then_some(Note::PrivateCarRate);
    TunnelItem {
        id,
        toll: schedule::resolve(id, input),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleClass;
    use crate::schedule::table::hm;

    fn input(vehicle: VehicleClass) -> TollInput {
        TollInput {
            minute_of_day: hm(8, 30),
            day_of_week: 3,
            is_public_holiday: false,
            vehicle,
        }
    }

    #[test]
    fn board_has_one_entry_per_tunnel_in_display_order() {
        let items = assemble(&input(VehicleClass::PrivateCar));
        assert_eq!(items.len(), TunnelId::ALL.len());
        let ids: Vec<TunnelId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, TunnelId::ALL);
    }

    #[test]
    fn private_car_entries_carry_no_note() {
        let items = assemble(&input(VehicleClass::PrivateCar));
        assert!(items.iter().all(|i| i.note.is_none()));
    }

    #[test]
    fn fallback_entries_are_annotated() {
        let items = assemble(&input(VehicleClass::Minibus));
        let western = items.iter().find(|i| i.id == TunnelId::Western).unwrap();
        assert_eq!(western.note, Some(Note::PrivateCarRate));
        // Minibus is in the Tate's Cairn vocabulary: no note there.
        let tates = items.iter().find(|i| i.id == TunnelId::TatesCairn).unwrap();
        assert_eq!(tates.note, None);
        assert_eq!(tates.toll, 23);
    }

    #[test]
    fn commercial_is_annotated_where_the_vocabulary_omits_it() {
        let items = assemble(&input(VehicleClass::Commercial));
        for item in items {
            // Commercial is mapped at the harbour crossings; Tai Lam charges
            // every class the car-derived fare, and Tate's Cairn has no
            // commercial entry at all.
            let expect_note = matches!(item.id, TunnelId::TaiLam | TunnelId::TatesCairn);
            assert_eq!(item.note.is_some(), expect_note, "{:?}", item.id);
        }
    }
}
