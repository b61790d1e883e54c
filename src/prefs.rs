//! Persisted user preferences (vehicle class and display locale).
//!
//! Stored as plain strings in a JSON file under the per-user config
//! directory and validated against the enums on read. Storage problems are
//! never surfaced: a missing, unreadable, or corrupt file simply yields the
//! defaults, and write failures are dropped. Fares must keep rendering on a
//! machine where the config directory is unavailable.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Locale, VehicleClass};

const APP_DIR: &str = "tunnel-tolls";
const PREFS_FILE: &str = "prefs.json";

/// Validated preferences with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub vehicle: VehicleClass,
    pub locale: Locale,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            vehicle: VehicleClass::PrivateCar,
            locale: Locale::ZhHk,
        }
    }
}

/// On-disk shape: plain strings, validated on read.
#[derive(Debug, Serialize, Deserialize)]
struct RawPreferences {
    #[serde(default)]
    vehicle: String,
    #[serde(default)]
    locale: String,
}

fn prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
}

/// Load preferences, falling back to defaults on any problem.
pub fn load() -> Preferences {
    let Some(path) = prefs_path() else {
        return Preferences::default();
    };
    match fs::read_to_string(&path) {
        Ok(raw) => parse_prefs(&raw),
        Err(_) => Preferences::default(),
    }
}

/// Persist preferences. Failures are silently ignored.
pub fn store(prefs: Preferences) {
    let Some(path) = prefs_path() else { return };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let raw = RawPreferences {
        vehicle: prefs.vehicle.as_key().to_string(),
        locale: prefs.locale.as_key().to_string(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&raw) {
        let _ = fs::write(&path, json);
    }
}

/// Parse and validate a preference document. Unknown keys or values fall
/// back field-by-field to the defaults.
fn parse_prefs(raw: &str) -> Preferences {
    let defaults = Preferences::default();
    let Ok(raw) = serde_json::from_str::<RawPreferences>(raw) else {
        return defaults;
    };
    Preferences {
        vehicle: VehicleClass::from_key(&raw.vehicle).unwrap_or(defaults.vehicle),
        locale: Locale::from_key(&raw.locale).unwrap_or(defaults.locale),
    }
}
