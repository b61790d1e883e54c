//! The fare resolver: (tunnel, input) → toll.
//!
//! Pure and total. Unknown or unmapped vehicle classes never fail; they
//! degrade to the private-car rate, which is the published behavior of the
//! source tariff rather than an error condition.

use crate::domain::{TollInput, TunnelId, VehicleClass};
use crate::schedule::tariff;

/// Current toll for one tunnel under the given input. Deterministic; returns
/// the same value for the same input on every call.
pub fn resolve(tunnel: TunnelId, input: &TollInput) -> u32 {
    match tunnel {
        TunnelId::CrossHarbour | TunnelId::Eastern | TunnelId::Western => {
            harbour_toll(tunnel, input)
        }
        TunnelId::TaiLam => tai_lam_toll(input),
        TunnelId::TatesCairn => tates_cairn_toll(input.vehicle),
        TunnelId::Aberdeen
        | TunnelId::ShingMun
        | TunnelId::LionRock
        | TunnelId::ShaTinHeights => tariff::FLAT_TUNNEL_TOLL,
    }
}

/// Whether the fare shown for this pair is the private-car rate standing in
/// for a class outside the tunnel's tariff vocabulary. Display-only; the
/// fare itself is unaffected.
pub fn uses_private_car_fallback(tunnel: TunnelId, vehicle: VehicleClass) -> bool {
    match tunnel {
        TunnelId::CrossHarbour | TunnelId::Eastern | TunnelId::Western => !matches!(
            vehicle,
            VehicleClass::PrivateCar
                | VehicleClass::Taxi
                | VehicleClass::Motorcycle
                | VehicleClass::Commercial
        ),
        TunnelId::TaiLam => vehicle != VehicleClass::PrivateCar,
        TunnelId::TatesCairn => tariff::tates_cairn_rate(vehicle).is_none(),
        _ => false,
    }
}

fn harbour_toll(tunnel: TunnelId, input: &TollInput) -> u32 {
    // Taxi and commercial rates ignore time and day entirely, so they are
    // settled before the time-band lookup.
    match input.vehicle {
        VehicleClass::Taxi => return tariff::HARBOUR_TAXI,
        VehicleClass::Commercial => return tariff::HARBOUR_COMMERCIAL,
        _ => {}
    }

    let car = tariff::harbour_schedule(tunnel, input.holiday_context())
        .price_at(input.minute_of_day);

    match input.vehicle {
        VehicleClass::Motorcycle => motorcycle_toll(car),
        // Every remaining class rides on the private-car rate.
        _ => car,
    }
}

fn tai_lam_toll(input: &TollInput) -> u32 {
    // One schedule for all vehicle classes.
    if input.holiday_context() {
        return tariff::TAI_LAM_HOLIDAY;
    }
    tariff::TAI_LAM_WEEKDAY.price_at(input.minute_of_day)
}

fn tates_cairn_toll(vehicle: VehicleClass) -> u32 {
    match tariff::tates_cairn_rate(vehicle) {
        Some(rate) => rate,
        None => tates_cairn_toll(VehicleClass::PrivateCar),
    }
}

/// Motorcycles pay 40% of the private-car fare, rounded to the nearest
/// dollar (half away from zero, matching the published tariff arithmetic).
fn motorcycle_toll(car_fare: u32) -> u32 {
    (f64::from(car_fare) * tariff::MOTORCYCLE_FACTOR).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::table::hm;

    fn weekday(minute: u16, vehicle: VehicleClass) -> TollInput {
        TollInput {
            minute_of_day: minute,
            day_of_week: 3,
            is_public_holiday: false,
            vehicle,
        }
    }

    fn holiday(minute: u16, vehicle: VehicleClass) -> TollInput {
        TollInput {
            minute_of_day: minute,
            day_of_week: 3,
            is_public_holiday: true,
            vehicle,
        }
    }

    fn sunday(minute: u16, vehicle: VehicleClass) -> TollInput {
        TollInput {
            minute_of_day: minute,
            day_of_week: 0,
            is_public_holiday: false,
            vehicle,
        }
    }

    #[test]
    fn weekday_morning_peak_rates() {
        let at = hm(8, 30);
        let car = VehicleClass::PrivateCar;
        assert_eq!(resolve(TunnelId::Western, &weekday(at, car)), 60);
        assert_eq!(resolve(TunnelId::CrossHarbour, &weekday(at, car)), 40);
        assert_eq!(resolve(TunnelId::Eastern, &weekday(at, car)), 40);
    }

    #[test]
    fn weekday_morning_ramp_steps() {
        let car = VehicleClass::PrivateCar;
        // 07:32 is two minutes into the ramp: one step above the 22 base.
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(7, 32), car)), 24);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(7, 30), car)), 22);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(8, 7), car)), 58);
        assert_eq!(resolve(TunnelId::CrossHarbour, &weekday(hm(7, 46), car)), 38);
        assert_eq!(resolve(TunnelId::CrossHarbour, &weekday(hm(7, 48), car)), 40);
    }

    #[test]
    fn weekday_descending_ramp_and_midday() {
        let car = VehicleClass::PrivateCar;
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(10, 15), car)), 58);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(10, 42), car)), 32);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(10, 43), car)), 30);
        assert_eq!(resolve(TunnelId::Eastern, &weekday(hm(10, 22), car)), 32);
        assert_eq!(resolve(TunnelId::Eastern, &weekday(hm(10, 23), car)), 30);
    }

    #[test]
    fn weekday_afternoon_peak_and_off_peak() {
        let car = VehicleClass::PrivateCar;
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(16, 30), car)), 60);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(18, 59), car)), 60);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(19, 0), car)), 20);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(7, 29), car)), 20);
        assert_eq!(resolve(TunnelId::CrossHarbour, &weekday(0, car)), 20);
    }

    #[test]
    fn holiday_transition_windows_are_effective() {
        let car = VehicleClass::PrivateCar;
        // 10:12 is one minute into the morning transition: still the 21 base.
        assert_eq!(resolve(TunnelId::Western, &holiday(hm(10, 12), car)), 21);
        assert_eq!(resolve(TunnelId::Western, &holiday(hm(10, 13), car)), 23);
        assert_eq!(resolve(TunnelId::Western, &holiday(hm(10, 15), car)), 25);
        assert_eq!(resolve(TunnelId::Eastern, &holiday(hm(19, 15), car)), 23);
        assert_eq!(resolve(TunnelId::Eastern, &holiday(hm(19, 18), car)), 21);
        assert_eq!(resolve(TunnelId::Eastern, &holiday(hm(19, 19), car)), 20);
        assert_eq!(resolve(TunnelId::CrossHarbour, &holiday(hm(2, 0), car)), 20);
    }

    #[test]
    fn sunday_uses_the_holiday_schedule() {
        let car = VehicleClass::PrivateCar;
        assert_eq!(resolve(TunnelId::Western, &sunday(hm(12, 0), car)), 25);
        assert_eq!(resolve(TunnelId::Western, &sunday(hm(22, 0), car)), 20);
    }

    #[test]
    fn taxi_is_flat_regardless_of_time_and_day() {
        for minute in [0, hm(8, 30), hm(12, 0), hm(19, 16), hm(23, 59)] {
            assert_eq!(resolve(TunnelId::CrossHarbour, &sunday(minute, VehicleClass::Taxi)), 25);
            assert_eq!(resolve(TunnelId::Western, &weekday(minute, VehicleClass::Taxi)), 25);
        }
    }

    #[test]
    fn commercial_is_flat_regardless_of_time_and_day() {
        for minute in [0, hm(8, 30), hm(17, 0)] {
            assert_eq!(
                resolve(TunnelId::Eastern, &weekday(minute, VehicleClass::Commercial)),
                50
            );
            assert_eq!(
                resolve(TunnelId::Eastern, &holiday(minute, VehicleClass::Commercial)),
                50
            );
        }
    }

    #[test]
    fn motorcycle_pays_forty_percent_rounded() {
        let bike = VehicleClass::Motorcycle;
        // 60 * 0.4 = 24, 40 * 0.4 = 16, 20 * 0.4 = 8.
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(8, 30), bike)), 24);
        assert_eq!(resolve(TunnelId::Eastern, &weekday(hm(8, 30), bike)), 16);
        assert_eq!(resolve(TunnelId::Western, &weekday(hm(2, 0), bike)), 8);
        // 21 * 0.4 = 8.4 rounds down; 23 * 0.4 = 9.2 rounds down to 9.
        assert_eq!(resolve(TunnelId::Western, &holiday(hm(10, 12), bike)), 8);
        assert_eq!(resolve(TunnelId::Western, &holiday(hm(10, 13), bike)), 9);
    }

    #[test]
    fn unmapped_classes_ride_on_the_private_car_rate_at_harbour_crossings() {
        let at = hm(8, 30);
        for vehicle in [
            VehicleClass::Minibus,
            VehicleClass::HeavyGoods,
            VehicleClass::DoubleDeckBus,
        ] {
            assert_eq!(
                resolve(TunnelId::Western, &weekday(at, vehicle)),
                resolve(TunnelId::Western, &weekday(at, VehicleClass::PrivateCar))
            );
            assert!(uses_private_car_fallback(TunnelId::Western, vehicle));
        }
        assert!(!uses_private_car_fallback(TunnelId::Western, VehicleClass::Taxi));
    }

    #[test]
    fn tai_lam_schedule() {
        let car = VehicleClass::PrivateCar;
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(7, 14), car)), 18);
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(8, 0), car)), 45);
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(9, 59), car)), 30);
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(17, 15), car)), 45);
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(19, 0), car)), 45);
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(19, 1), car)), 18);
        assert_eq!(resolve(TunnelId::TaiLam, &sunday(hm(8, 0), car)), 18);
        assert_eq!(resolve(TunnelId::TaiLam, &holiday(hm(8, 0), car)), 18);
        // No per-vehicle differentiation at Tai Lam.
        assert_eq!(resolve(TunnelId::TaiLam, &weekday(hm(8, 0), VehicleClass::Taxi)), 45);
        assert_eq!(
            resolve(TunnelId::TaiLam, &weekday(hm(8, 0), VehicleClass::HeavyGoods)),
            45
        );
    }

    #[test]
    fn tates_cairn_is_keyed_by_vehicle_only() {
        for input in [
            weekday(hm(8, 30), VehicleClass::HeavyGoods),
            holiday(hm(8, 30), VehicleClass::HeavyGoods),
            sunday(hm(2, 0), VehicleClass::HeavyGoods),
        ] {
            assert_eq!(resolve(TunnelId::TatesCairn, &input), 28);
        }
        assert_eq!(
            resolve(TunnelId::TatesCairn, &weekday(0, VehicleClass::Motorcycle)),
            15
        );
        assert_eq!(
            resolve(TunnelId::TatesCairn, &weekday(0, VehicleClass::DoubleDeckBus)),
            35
        );
        // Commercial is outside the vocabulary: private-car entry applies.
        assert_eq!(
            resolve(TunnelId::TatesCairn, &weekday(0, VehicleClass::Commercial)),
            20
        );
        assert!(uses_private_car_fallback(TunnelId::TatesCairn, VehicleClass::Commercial));
    }

    #[test]
    fn flat_tunnels_never_vary() {
        let flats = [
            TunnelId::Aberdeen,
            TunnelId::ShingMun,
            TunnelId::LionRock,
            TunnelId::ShaTinHeights,
        ];
        for tunnel in flats {
            for vehicle in VehicleClass::ALL {
                for input in [
                    weekday(hm(8, 30), vehicle),
                    holiday(hm(12, 0), vehicle),
                    sunday(hm(23, 59), vehicle),
                ] {
                    assert_eq!(resolve(tunnel, &input), 8);
                }
            }
        }
    }

    #[test]
    fn every_fare_is_positive_across_a_full_day_sweep() {
        for tunnel in TunnelId::ALL {
            for vehicle in [
                VehicleClass::PrivateCar,
                VehicleClass::Motorcycle,
                VehicleClass::Commercial,
            ] {
                for minute in 0..crate::schedule::table::MINUTES_PER_DAY {
                    let input = weekday(minute, vehicle);
                    let fare = resolve(tunnel, &input);
                    assert!(fare > 0, "{tunnel:?} {vehicle:?} at {minute}");
                    // Referential transparency: a second call agrees.
                    assert_eq!(fare, resolve(tunnel, &input));
                }
            }
        }
    }
}
