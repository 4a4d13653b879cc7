// Wire types for the satellite data sources
//
// Every field is optional: the sources are inconsistent about field presence,
// and a missing field must surface as `None` to the caller rather than as a
// deserialization failure. Identifiers arrive as either JSON numbers or
// strings depending on the document, so they go through `WireId`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identifier ───────────────────────────────────────────────────────

/// A satellite identifier as it appears on the wire: `1` or `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

impl WireId {
    /// Whether this id names the same satellite as `other`, comparing the
    /// canonical string form so `1` matches `"1"`.
    pub fn matches(&self, other: &str) -> bool {
        match self {
            Self::Number(n) => other.trim().parse::<u64>().is_ok_and(|o| o == *n),
            Self::Text(s) => s.trim() == other.trim(),
        }
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ── Catalogue ────────────────────────────────────────────────────────

/// One entry of the satellite catalogue (`GET /satellites`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteSummary {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

// ── Detail ───────────────────────────────────────────────────────────

/// Physical and launch details for one satellite (`GET /satellites/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDetail {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub mass: Option<i64>,
    /// `yyyy-MM-dd`
    #[serde(default, alias = "firstFlight")]
    pub first_flight: Option<String>,
    #[serde(default, alias = "costPerLaunch")]
    pub cost_per_launch: Option<i64>,
}

// ── Positions ────────────────────────────────────────────────────────

/// A position sample. Coordinates are unit-less and source-defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePosition {
    #[serde(default, rename = "posX")]
    pub pos_x: Option<f64>,
    #[serde(default, rename = "posY")]
    pub pos_y: Option<f64>,
}

/// The current position set for a satellite
/// (`GET /satellites/{id}/positions`).
///
/// ```json
/// { "id": "1", "positions": [{ "posX": 0.86, "posY": 0.64 }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionsResponse {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub positions: Option<Vec<WirePosition>>,
}

/// Top-level shape of the bundled `positions.json` asset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionsDocument {
    #[serde(default)]
    pub list: Vec<PositionsResponse>,
}
