//! Ticket-reference extraction from GeoJSON payloads.
//!
//! Route payloads carry tracker ticket keys inside arbitrary property
//! strings (for example `SDGLOGISTICS-482874` in a feature description).
//! The extractor walks the whole JSON value, harvests anything shaped like
//! a ticket key, and renders each as a tracker link.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;

/// Tracker host used when none is configured.
pub const DEFAULT_TRACKER_HOST: &str = "st.yandex-team.ru";

/// Two or more letters, an optional hyphen, then digits.
static TICKET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-Z]{2,}-?[0-9]+").expect("ticket pattern is a valid literal regex")
});

/// Extracts tracker ticket links from a GeoJSON payload.
#[derive(Debug, Clone)]
pub struct TicketExtractor {
    host: String,
}

impl TicketExtractor {
    /// Creates an extractor rendering links against the default tracker
    /// host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(DEFAULT_TRACKER_HOST)
    }

    /// Creates an extractor rendering links against the given host.
    #[must_use]
    pub fn with_host(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Scans the payload and returns deduplicated, sorted ticket links in
    /// `{host}/{ticket}` form. A payload without ticket keys yields an
    /// empty list.
    #[must_use]
    pub fn extract(&self, payload: &Value) -> Vec<String> {
        let mut keys = BTreeSet::new();
        collect_keys(payload, &mut keys);
        keys.into_iter()
            .map(|key| format!("{}/{key}", self.host))
            .collect()
    }
}

impl Default for TicketExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the JSON value, matching ticket keys in every string leaf.
fn collect_keys(value: &Value, keys: &mut BTreeSet<String>) {
    match value {
        Value::String(text) => {
            for found in TICKET_PATTERN.find_iter(text) {
                keys.insert(found.as_str().to_owned());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_keys(item, keys);
            }
        }
        Value::Object(fields) => {
            for field in fields.values() {
                collect_keys(field, keys);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::TicketExtractor;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn extracts_tickets_from_nested_properties() {
        let payload = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "description": "SDGLOGISTICS-482874 resurvey",
                        "notes": ["see ROBOT-101", "and robot-7"]
                    }
                }
            ]
        });

        let tickets = TicketExtractor::new().extract(&payload);

        assert_eq!(
            tickets,
            vec![
                "st.yandex-team.ru/ROBOT-101".to_owned(),
                "st.yandex-team.ru/SDGLOGISTICS-482874".to_owned(),
                "st.yandex-team.ru/robot-7".to_owned(),
            ]
        );
    }

    #[rstest]
    fn deduplicates_repeated_keys() {
        let payload = json!(["ROBOT-1 and ROBOT-1", {"again": "ROBOT-1"}]);

        let tickets = TicketExtractor::new().extract(&payload);

        assert_eq!(tickets, vec!["st.yandex-team.ru/ROBOT-1".to_owned()]);
    }

    #[rstest]
    fn matches_keys_without_hyphen() {
        let payload = json!("legacy key AB12");

        let tickets = TicketExtractor::new().extract(&payload);

        assert_eq!(tickets, vec!["st.yandex-team.ru/AB12".to_owned()]);
    }

    #[rstest]
    #[case(json!({"speed": 42}))]
    #[case(json!("a-1 short prefix"))]
    #[case(json!(null))]
    fn ignores_values_without_ticket_keys(#[case] payload: serde_json::Value) {
        assert!(TicketExtractor::new().extract(&payload).is_empty());
    }

    #[rstest]
    fn honours_a_custom_host() {
        let payload = json!("ROBOT-5");

        let tickets = TicketExtractor::with_host("tracker.local").extract(&payload);

        assert_eq!(tickets, vec!["tracker.local/ROBOT-5".to_owned()]);
    }
}
