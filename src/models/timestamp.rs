use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Epoch seconds kept as the JSON number they were read from, so entries
/// that are not touched are written back unchanged (`1700000000` stays an
/// integer, `1658322749.1405447` keeps all its digits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(Number);

impl Timestamp {
    /// New timestamp from fractional seconds; non-finite input maps to the epoch.
    pub fn from_secs(secs: f64) -> Self {
        Self(Number::from_f64(secs).unwrap_or_else(|| Number::from(0)))
    }

    /// `-1`, the `clock_out` of a session that is still open.
    pub fn sentinel() -> Self {
        Self(Number::from(-1))
    }

    pub fn secs(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}
