//! Canonical domain types.
//!
//! Source-specific wire shapes live in `satlink_api::models`; [`crate::convert`]
//! maps them here.

use serde::{Deserialize, Serialize};

/// One catalogue entry, as shown by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: String,
    pub name: String,
    pub active: bool,
}

/// Physical and launch details for one satellite.
///
/// `id` stays optional: a record that comes back without a resolvable
/// identifier is treated as unavailable by the detail controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub height: Option<i64>,
    pub mass: Option<i64>,
    /// Source format `yyyy-MM-dd`.
    pub first_flight: Option<String>,
    pub cost_per_launch: Option<i64>,
}

impl Detail {
    /// The identifier, if present and non-blank.
    pub fn resolved_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// A single position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub pos_x: f64,
    pub pos_y: f64,
}

/// The positions reported for a satellite on one poll tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSet {
    pub id: Option<String>,
    pub positions: Vec<Position>,
}

impl PositionSet {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
