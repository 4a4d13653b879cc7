// ── Wire → domain conversion ──
//
// Maps `satlink_api` wire models into canonical domain types. Catalogue
// entries without an id and position samples missing a coordinate are
// dropped rather than failing the whole response.

use satlink_api::{PositionsResponse, SatelliteDetail, SatelliteSummary, WirePosition};

use crate::model::{Detail, Position, PositionSet, Satellite};

impl Satellite {
    /// Convert a catalogue entry; `None` when it has no identifier.
    pub fn from_summary(summary: SatelliteSummary) -> Option<Self> {
        let id = summary.id?.to_string();
        Some(Self {
            id,
            name: summary.name.unwrap_or_default(),
            active: summary.active.unwrap_or(false),
        })
    }
}

impl From<SatelliteDetail> for Detail {
    fn from(d: SatelliteDetail) -> Self {
        Self {
            id: d.id.map(|id| id.to_string()),
            name: d.name,
            height: d.height,
            mass: d.mass,
            first_flight: d.first_flight,
            cost_per_launch: d.cost_per_launch,
        }
    }
}

impl TryFrom<WirePosition> for Position {
    type Error = WirePosition;

    fn try_from(p: WirePosition) -> Result<Self, Self::Error> {
        match (p.pos_x, p.pos_y) {
            (Some(pos_x), Some(pos_y)) => Ok(Self { pos_x, pos_y }),
            _ => Err(p),
        }
    }
}

impl From<PositionsResponse> for PositionSet {
    fn from(r: PositionsResponse) -> Self {
        Self {
            id: r.id.map(|id| id.to_string()),
            positions: r
                .positions
                .unwrap_or_default()
                .into_iter()
                .filter_map(|p| Position::try_from(p).ok())
                .collect(),
        }
    }
}

/// Convert a whole catalogue, skipping id-less entries.
pub fn satellites(list: Vec<SatelliteSummary>) -> Vec<Satellite> {
    list.into_iter().filter_map(Satellite::from_summary).collect()
}
