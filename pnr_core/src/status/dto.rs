use serde::{Deserialize, Serialize};

use crate::pnr::dto::NOT_AVAILABLE;

/// The one record persisted between runs.
///
/// Serialized with exactly the `currentStatus`/`chartPrepared` keys so the
/// state file stays readable by anything that knew the previous layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub current_status: String,
    pub chart_prepared: bool,
}

impl StatusSnapshot {
    pub fn new(current_status: impl Into<String>, chart_prepared: bool) -> Self {
        Self {
            current_status: current_status.into(),
            chart_prepared,
        }
    }
}

impl Default for StatusSnapshot {
    /// Sentinel used when no snapshot has been persisted yet.
    fn default() -> Self {
        Self::new(NOT_AVAILABLE, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_are_camel_case() {
        let snapshot = StatusSnapshot::new("CNF/S5/32", false);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"currentStatus":"CNF/S5/32","chartPrepared":false}"#);
    }

    #[test]
    fn test_sentinel_snapshot() {
        let sentinel = StatusSnapshot::default();
        assert_eq!(sentinel.current_status, "N/A");
        assert!(!sentinel.chart_prepared);
    }
}
