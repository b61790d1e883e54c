//! HKSAR public-holiday oracle.
//!
//! The primary source is the 1823 holiday calendar feed (jCal). When it is
//! unreachable, returns a non-success status, or yields nothing, the bundled
//! snapshot ships as a fallback; if that fails too, the list degrades to
//! empty and the board simply shows no holiday pricing. Fare computation
//! never sees an error from this module.
//!
//! Sundays are not part of the holiday list: the resolver treats them as a
//! holiday-equivalent context on its own (`TollInput::holiday_context`).

use reqwest::blocking::Client;
use serde_json::Value;

const DEFAULT_API_URL: &str = "https://www.1823.gov.hk/common/ical/tc.json";

/// Bundled snapshot of gazetted general holidays, used when the feed is
/// unreachable.
const FALLBACK_JSON: &str = include_str!("../../assets/holidays.json");

/// Blocking HTTP client for the holiday feed.
pub struct HolidayClient {
    client: Client,
    api_url: String,
    offline: bool,
}

impl HolidayClient {
    /// Build a client; `HOLIDAY_API_URL` (environment or `.env`) overrides
    /// the default 1823 endpoint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_url =
            std::env::var("HOLIDAY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            client: Client::new(),
            api_url,
            offline: false,
        }
    }

    /// Client that never touches the network; only the bundled snapshot is
    /// consulted.
    pub fn offline() -> Self {
        Self {
            client: Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            offline: true,
        }
    }

    /// Fetch the holiday date list (`YYYY-MM-DD` strings).
    ///
    /// Primary feed first, bundled snapshot second, empty list last. Fetch
    /// failures are deliberately swallowed; degraded pricing beats a dead
    /// board.
    pub fn fetch_holiday_dates(&self) -> HolidayList {
        if !self.offline {
            if let Some(dates) = self.fetch_remote() {
                if !dates.is_empty() {
                    return HolidayList {
                        dates,
                        source: HolidaySource::Feed,
                    };
                }
            }
        }
        HolidayList {
            dates: parse_fallback_dates(FALLBACK_JSON),
            source: HolidaySource::Bundled,
        }
    }

    fn fetch_remote(&self) -> Option<Vec<String>> {
        let resp = self.client.get(&self.api_url).send().ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body: Value = resp.json().ok()?;
        Some(parse_jcal_dates(&body))
    }
}

/// Which source supplied the holiday dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidaySource {
    /// The live 1823 feed.
    Feed,
    /// The bundled snapshot (also the total-failure path, with no dates).
    Bundled,
}

/// A resolved holiday list together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayList {
    pub dates: Vec<String>,
    pub source: HolidaySource,
}

/// Process-lifetime memo of the fetched list.
///
/// Owned by the session and passed by reference to consumers; there is
/// intentionally no module-global cache. The first resolution is kept for
/// the cache's lifetime, an empty list included.
#[derive(Debug, Default)]
pub struct HolidayCache {
    list: Option<HolidayList>,
}

impl HolidayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, fetching on first use.
    pub fn get(&mut self, client: &HolidayClient) -> &HolidayList {
        self.list
            .get_or_insert_with(|| client.fetch_holiday_dates())
    }

    /// The memoized list, if a fetch has happened.
    pub fn peek(&self) -> Option<&HolidayList> {
        self.list.as_ref()
    }

    /// Drop the memo so the next `get` fetches again.
    pub fn invalidate(&mut self) {
        self.list = None;
    }

    pub fn is_resolved(&self) -> bool {
        self.list.is_some()
    }
}

/// Pure set-membership test. `date` is a `YYYY-MM-DD` string; Sundays are
/// handled by the caller, never here.
pub fn is_holiday(date: &str, dates: &[String]) -> bool {
    dates.iter().any(|d| d == date)
}

/// Extract event start dates from a jCal document.
///
/// Shape: `["vcalendar", [...props], [["vevent", [...], [["dtstart", {}, "date", "20250101"], ...]], ...]]`.
/// Every `dtstart` value with an 8-digit date form is normalized to
/// `YYYY-MM-DD`; anything else is skipped.
pub fn parse_jcal_dates(jcal: &Value) -> Vec<String> {
    let mut dates = Vec::new();
    let Some(root) = jcal.as_array() else {
        return dates;
    };
    if root.first().and_then(Value::as_str) != Some("vcalendar") {
        return dates;
    }
    let Some(components) = root.get(2).and_then(Value::as_array) else {
        return dates;
    };
    for comp in components {
        let Some(comp) = comp.as_array() else { continue };
        if comp.first().and_then(Value::as_str) != Some("vevent") {
            continue;
        }
        let Some(props) = comp.get(2).and_then(Value::as_array) else {
            continue;
        };
        for prop in props {
            let Some(prop) = prop.as_array() else { continue };
            if prop.first().and_then(Value::as_str) != Some("dtstart") {
                continue;
            }
            let Some(raw) = prop.get(3).and_then(Value::as_str) else {
                continue;
            };
            if let Some(date) = normalize_compact_date(raw) {
                dates.push(date);
            }
        }
    }
    dates
}

/// Parse the fallback document. Accepted shapes:
///
/// - a plain array of `YYYY-MM-DD` strings or `{ "date": ... }` objects
/// - `{ "holidays": [ ... ] }`
/// - `{ "dates": [ ... ] }`
///
/// Strings not matching `YYYY-MM-DD` are discarded. A document matching no
/// shape yields an empty list.
pub fn parse_fallback_dates(raw: &str) -> Vec<String> {
    let Ok(data) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    if let Some(entries) = data.as_array() {
        return dates_from_entries(entries);
    }
    if let Some(entries) = data.get("holidays").and_then(Value::as_array) {
        return dates_from_entries(entries);
    }
    if let Some(entries) = data.get("dates").and_then(Value::as_array) {
        return dates_from_entries(entries);
    }
    Vec::new()
}

fn dates_from_entries(entries: &[Value]) -> Vec<String> {
    let mut dates = Vec::new();
    for entry in entries {
        let candidate = match entry {
            Value::String(s) => Some(s.as_str()),
            Value::Object(_) => entry.get("date").and_then(Value::as_str),
            _ => None,
        };
        if let Some(date) = candidate {
            if is_iso_date(date) {
                dates.push(date.to_string());
            }
        }
    }
    dates
}

/// Normalize a possibly dash-separated 8-digit date (`20250101`,
/// `2025-01-01T00:00:00`) to `YYYY-MM-DD`.
fn normalize_compact_date(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| *c != '-')
        .take(8)
        .collect();
    if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(format!(
            "{}-{}-{}",
            &digits[..4],
            &digits[4..6],
            &digits[6..8]
        ))
    } else {
        None
    }
}

/// `^\d{4}-\d{2}-\d{2}$` without a regex engine.
fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .into_iter()
            .all(|i: usize| b[i].is_ascii_digit())
}
