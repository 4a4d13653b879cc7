// HTTP client for the satellite data service
//
// Wraps `reqwest::Client` with URL construction and status handling. Every
// read returns `Ok(None)` on 404 so callers can tell "no such satellite"
// apart from transport failures when they care to.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{PositionsResponse, SatelliteDetail, SatelliteSummary};
use crate::transport::TransportConfig;

/// Async client for the satellite REST endpoints.
///
/// - `GET {base}/satellites`
/// - `GET {base}/satellites/{id}`
/// - `GET {base}/satellites/{id}/positions`
#[derive(Debug, Clone)]
pub struct SatelliteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SatelliteClient {
    /// Create a client from a base URL and a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Convenience constructor for tests and scripts.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Self::with_client(http, Url::parse(base_url)?)
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the full satellite catalogue.
    pub async fn list_satellites(&self) -> Result<Option<Vec<SatelliteSummary>>, Error> {
        let url = self.url(&["satellites"])?;
        self.get_optional(url).await
    }

    /// Fetch the detail record for one satellite.
    pub async fn get_satellite(&self, id: &str) -> Result<Option<SatelliteDetail>, Error> {
        let url = self.url(&["satellites", id])?;
        self.get_optional(url).await
    }

    /// Fetch the current position set for one satellite.
    pub async fn get_positions(&self, id: &str) -> Result<Option<PositionsResponse>, Error> {
        let url = self.url(&["satellites", id, "positions"])?;
        self.get_optional(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET and decode a JSON body; 404 maps to `Ok(None)`.
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(Error::Deserialization {
                message: e.to_string(),
                body,
            }),
        }
    }
}
