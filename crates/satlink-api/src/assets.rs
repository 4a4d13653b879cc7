// Bundled-asset data source
//
// Reads the three JSON documents the satellite app ships with from a
// directory. Files are re-read on every call so edits to the bundle show up
// on the next poll tick. `tokio::fs` moves the blocking reads onto the
// runtime's blocking pool.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::models::{PositionsDocument, PositionsResponse, SatelliteDetail, SatelliteSummary};

pub const LIST_FILE: &str = "satellite-list.json";
pub const DETAIL_FILE: &str = "satellite-detail.json";
pub const POSITIONS_FILE: &str = "positions.json";

/// Satellite data read from a directory of JSON assets.
///
/// Expected layout:
///
/// ```text
/// <dir>/satellite-list.json    [{ "id": 1, "active": false, "name": "Starship-1" }, ...]
/// <dir>/satellite-detail.json  [{ "id": 1, "cost_per_launch": 7200000, ... }, ...]
/// <dir>/positions.json         { "list": [{ "id": "1", "positions": [...] }, ...] }
/// ```
///
/// A missing file reads as "no data" rather than as an error.
#[derive(Debug, Clone)]
pub struct AssetSource {
    dir: PathBuf,
}

impl AssetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The whole catalogue from `satellite-list.json`.
    pub async fn list_satellites(&self) -> Result<Option<Vec<SatelliteSummary>>, Error> {
        self.read_json(LIST_FILE).await
    }

    /// The detail record for `id`. A record without a name borrows the
    /// name of the matching catalogue entry.
    pub async fn get_satellite(&self, id: &str) -> Result<Option<SatelliteDetail>, Error> {
        let Some(details) = self.read_json::<Vec<SatelliteDetail>>(DETAIL_FILE).await? else {
            return Ok(None);
        };

        let Some(mut detail) = details
            .into_iter()
            .find(|d| d.id.as_ref().is_some_and(|i| i.matches(id)))
        else {
            return Ok(None);
        };

        if detail.name.is_none() {
            let list = self.list_satellites().await?.unwrap_or_default();
            detail.name = list
                .into_iter()
                .find(|s| s.id.as_ref().is_some_and(|i| i.matches(id)))
                .and_then(|s| s.name);
        }

        Ok(Some(detail))
    }

    /// The position set for `id` from `positions.json`.
    pub async fn get_positions(&self, id: &str) -> Result<Option<PositionsResponse>, Error> {
        let Some(doc) = self.read_json::<PositionsDocument>(POSITIONS_FILE).await? else {
            return Ok(None);
        };

        Ok(doc
            .list
            .into_iter()
            .find(|p| p.id.as_ref().is_some_and(|i| i.matches(id))))
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, Error> {
        let path = self.dir.join(file);
        debug!(path = %path.display(), "reading asset");

        let body = match tokio::fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(Error::Io { path, source }),
        };

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(Error::Deserialization {
                message: format!("{file}: {e}"),
                body,
            }),
        }
    }
}
