//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fare resolution
//! - stored as plain strings in the preference file
//! - rendered by either front-end (CLI table or TUI)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Vehicle class selected by the user.
///
/// Two vocabularies overlap here: the harbour crossings charge by a 4-class
/// set (`PrivateCar`, `Taxi`, `Motorcycle`, `Commercial`), while Tate's Cairn
/// uses a 9-class set with per-class flat rates. A class outside the active
/// tunnel's vocabulary falls back to private-car semantics; that fallback is
/// deliberate and silent (see `schedule::resolver`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    PrivateCar,
    Taxi,
    Motorcycle,
    /// Goods vehicles, minibuses and buses as one bucket (harbour crossings).
    Commercial,
    Minibus,
    LightGoods,
    MediumGoods,
    HeavyGoods,
    SingleDeckBus,
    DoubleDeckBus,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 10] = [
        VehicleClass::PrivateCar,
        VehicleClass::Taxi,
        VehicleClass::Motorcycle,
        VehicleClass::Commercial,
        VehicleClass::Minibus,
        VehicleClass::LightGoods,
        VehicleClass::MediumGoods,
        VehicleClass::HeavyGoods,
        VehicleClass::SingleDeckBus,
        VehicleClass::DoubleDeckBus,
    ];

    /// Stable storage key, as written to the preference file.
    pub fn as_key(self) -> &'static str {
        match self {
            VehicleClass::PrivateCar => "private_car",
            VehicleClass::Taxi => "taxi",
            VehicleClass::Motorcycle => "motorcycle",
            VehicleClass::Commercial => "commercial",
            VehicleClass::Minibus => "minibus",
            VehicleClass::LightGoods => "light_goods",
            VehicleClass::MediumGoods => "medium_goods",
            VehicleClass::HeavyGoods => "heavy_goods",
            VehicleClass::SingleDeckBus => "single_deck_bus",
            VehicleClass::DoubleDeckBus => "double_deck_bus",
        }
    }

    /// Validate a persisted string against the known classes.
    pub fn from_key(key: &str) -> Option<VehicleClass> {
        VehicleClass::ALL.into_iter().find(|v| v.as_key() == key)
    }

    /// Human-readable label for the given display locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                VehicleClass::PrivateCar => "Private car",
                VehicleClass::Taxi => "Taxi",
                VehicleClass::Motorcycle => "Motorcycle",
                VehicleClass::Commercial => "Goods vehicle / minibus / bus",
                VehicleClass::Minibus => "Minibus",
                VehicleClass::LightGoods => "Light goods vehicle",
                VehicleClass::MediumGoods => "Medium goods vehicle",
                VehicleClass::HeavyGoods => "Heavy goods vehicle",
                VehicleClass::SingleDeckBus => "Single-deck bus",
                VehicleClass::DoubleDeckBus => "Double-deck bus",
            },
            Locale::ZhHk => match self {
                VehicleClass::PrivateCar => "私家車",
                VehicleClass::Taxi => "的士",
                VehicleClass::Motorcycle => "電單車",
                VehicleClass::Commercial => "貨車／小巴／巴士",
                VehicleClass::Minibus => "小巴",
                VehicleClass::LightGoods => "輕型貨車",
                VehicleClass::MediumGoods => "中型貨車",
                VehicleClass::HeavyGoods => "重型貨車",
                VehicleClass::SingleDeckBus => "單層巴士",
                VehicleClass::DoubleDeckBus => "雙層巴士",
            },
        }
    }

    /// Next class in display order, wrapping (used by the TUI selector).
    pub fn next(self) -> VehicleClass {
        let i = VehicleClass::ALL.iter().position(|v| *v == self).unwrap_or(0);
        VehicleClass::ALL[(i + 1) % VehicleClass::ALL.len()]
    }

    /// Previous class in display order, wrapping.
    pub fn prev(self) -> VehicleClass {
        let i = VehicleClass::ALL.iter().position(|v| *v == self).unwrap_or(0);
        VehicleClass::ALL[(i + VehicleClass::ALL.len() - 1) % VehicleClass::ALL.len()]
    }
}

/// Display language.
///
/// Locale selection affects labels only; fares never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Locale {
    #[serde(rename = "en")]
    #[value(name = "en")]
    En,
    #[serde(rename = "zh-HK")]
    #[value(name = "zh-hk")]
    ZhHk,
}

impl Locale {
    /// Stable storage key, as written to the preference file.
    pub fn as_key(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHk => "zh-HK",
        }
    }

    /// Validate a persisted string against the known locales.
    pub fn from_key(key: &str) -> Option<Locale> {
        match key {
            "en" => Some(Locale::En),
            "zh-HK" => Some(Locale::ZhHk),
            _ => None,
        }
    }

    pub fn toggle(self) -> Locale {
        match self {
            Locale::En => Locale::ZhHk,
            Locale::ZhHk => Locale::En,
        }
    }
}

/// One of the nine modeled tunnels, in board display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelId {
    CrossHarbour,
    Eastern,
    Western,
    TaiLam,
    TatesCairn,
    Aberdeen,
    ShingMun,
    LionRock,
    ShaTinHeights,
}

impl TunnelId {
    pub const ALL: [TunnelId; 9] = [
        TunnelId::CrossHarbour,
        TunnelId::Eastern,
        TunnelId::Western,
        TunnelId::TaiLam,
        TunnelId::TatesCairn,
        TunnelId::Aberdeen,
        TunnelId::ShingMun,
        TunnelId::LionRock,
        TunnelId::ShaTinHeights,
    ];

    /// Stable identifier (also the CLI spelling for `tolls fare <tunnel>`).
    pub fn as_key(self) -> &'static str {
        match self {
            TunnelId::CrossHarbour => "cross_harbour",
            TunnelId::Eastern => "eastern",
            TunnelId::Western => "western",
            TunnelId::TaiLam => "tai_lam",
            TunnelId::TatesCairn => "tates_cairn",
            TunnelId::Aberdeen => "aberdeen",
            TunnelId::ShingMun => "shing_mun",
            TunnelId::LionRock => "lion_rock",
            TunnelId::ShaTinHeights => "sha_tin_heights",
        }
    }

    pub fn from_key(key: &str) -> Option<TunnelId> {
        TunnelId::ALL.into_iter().find(|t| t.as_key() == key)
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                TunnelId::CrossHarbour => "Cross-Harbour Tunnel",
                TunnelId::Eastern => "Eastern Harbour Crossing",
                TunnelId::Western => "Western Harbour Crossing",
                TunnelId::TaiLam => "Tai Lam Tunnel",
                TunnelId::TatesCairn => "Tate's Cairn Tunnel",
                TunnelId::Aberdeen => "Aberdeen Tunnel",
                TunnelId::ShingMun => "Shing Mun Tunnels",
                TunnelId::LionRock => "Lion Rock Tunnel",
                TunnelId::ShaTinHeights => "Sha Tin Heights / Eagle's Nest / Tai Wai Tunnels",
            },
            Locale::ZhHk => match self {
                TunnelId::CrossHarbour => "海底隧道（紅隧）",
                TunnelId::Eastern => "東區海底隧道（東隧）",
                TunnelId::Western => "西區海底隧道（西隧）",
                TunnelId::TaiLam => "大欖隧道",
                TunnelId::TatesCairn => "大老山隧道",
                TunnelId::Aberdeen => "香港仔隧道",
                TunnelId::ShingMun => "城門隧道",
                TunnelId::LionRock => "獅子山隧道",
                TunnelId::ShaTinHeights => "沙田嶺／尖山／大圍隧道",
            },
        }
    }
}

/// Everything the resolver needs for one evaluation.
///
/// Rebuilt from the clock + holiday oracle on every refresh; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TollInput {
    /// Minute of the civil day, 0–1439.
    pub minute_of_day: u16,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// Whether today is a gazetted public holiday (Sundays excluded; see
    /// `holiday_context`).
    pub is_public_holiday: bool,
    pub vehicle: VehicleClass,
}

impl TollInput {
    /// Sunday counts as a holiday for tariff purposes. The OR happens here,
    /// at the resolver boundary, never inside the holiday oracle.
    pub fn holiday_context(&self) -> bool {
        self.is_public_holiday || self.day_of_week == 0
    }
}

/// Annotation attached to a board entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    /// The selected vehicle class is outside this tunnel's tariff vocabulary,
    /// so the private-car rate is shown.
    PrivateCarRate,
}

impl Note {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Note::PrivateCarRate, Locale::En) => "private car rate shown",
            (Note::PrivateCarRate, Locale::ZhHk) => "以私家車收費顯示",
        }
    }
}

/// One row of the toll board. Produced fresh on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelItem {
    pub id: TunnelId,
    /// Toll in whole Hong Kong dollars.
    pub toll: u32,
    pub note: Option<Note>,
}

impl TunnelItem {
    /// Localized display name for this entry.
    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.id.name(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_keys_round_trip() {
        for v in VehicleClass::ALL {
            assert_eq!(VehicleClass::from_key(v.as_key()), Some(v));
        }
    }

    #[test]
    fn unknown_vehicle_key_rejected() {
        assert_eq!(VehicleClass::from_key("bicycle"), None);
        assert_eq!(VehicleClass::from_key(""), None);
    }

    #[test]
    fn locale_keys_round_trip() {
        assert_eq!(Locale::from_key("en"), Some(Locale::En));
        assert_eq!(Locale::from_key("zh-HK"), Some(Locale::ZhHk));
        assert_eq!(Locale::from_key("fr"), None);
    }

    #[test]
    fn tunnel_keys_round_trip() {
        for t in TunnelId::ALL {
            assert_eq!(TunnelId::from_key(t.as_key()), Some(t));
        }
    }

    #[test]
    fn vehicle_cycling_wraps() {
        let mut v = VehicleClass::PrivateCar;
        for _ in 0..VehicleClass::ALL.len() {
            v = v.next();
        }
        assert_eq!(v, VehicleClass::PrivateCar);
        assert_eq!(VehicleClass::PrivateCar.prev(), VehicleClass::DoubleDeckBus);
    }

    #[test]
    fn sunday_is_holiday_context() {
        let input = TollInput {
            minute_of_day: 600,
            day_of_week: 0,
            is_public_holiday: false,
            vehicle: VehicleClass::PrivateCar,
        };
        assert!(input.holiday_context());

        let weekday = TollInput { day_of_week: 3, ..input };
        assert!(!weekday.holiday_context());

        let gazetted = TollInput {
            day_of_week: 3,
            is_public_holiday: true,
            ..input
        };
        assert!(gazetted.holiday_context());
    }
}
