//! The data-access seam consumed by the controllers.
//!
//! Controllers only ever talk to a [`RemoteDataPort`]. Both `satlink_api`
//! sources are adapted to it here; tests substitute their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use satlink_api::transport::{TlsMode, TransportConfig};
use satlink_api::{AssetSource, SatelliteClient};
use tracing::debug;

use crate::config::{SourceConfig, TlsVerification};
use crate::convert;
use crate::error::CoreError;
use crate::model::{Detail, PositionSet, Satellite};

/// Satellite data access.
///
/// `Ok(None)` means the source has no such record. Callers in this crate
/// treat `Err` the same way for detail and positions, but it is kept
/// distinct so it can be logged.
#[async_trait]
pub trait RemoteDataPort: Send + Sync {
    async fn fetch_list(&self) -> Result<Option<Vec<Satellite>>, CoreError>;

    async fn fetch_detail(&self, id: &str) -> Result<Option<Detail>, CoreError>;

    async fn fetch_positions(&self, id: &str) -> Result<Option<PositionSet>, CoreError>;
}

/// The HTTP client and the timeout it was built with. Timeouts report
/// that limit.
struct HttpSource {
    client: SatelliteClient,
    timeout: Duration,
}

impl HttpSource {
    fn error(&self, err: satlink_api::Error) -> CoreError {
        if err.is_timeout() {
            CoreError::Timeout {
                timeout_secs: Some(self.timeout.as_secs()),
            }
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl RemoteDataPort for HttpSource {
    async fn fetch_list(&self) -> Result<Option<Vec<Satellite>>, CoreError> {
        let list = self.client.list_satellites().await.map_err(|e| self.error(e))?;
        Ok(list.map(convert::satellites))
    }

    async fn fetch_detail(&self, id: &str) -> Result<Option<Detail>, CoreError> {
        let detail = self.client.get_satellite(id).await.map_err(|e| self.error(e))?;
        Ok(detail.map(Detail::from))
    }

    async fn fetch_positions(&self, id: &str) -> Result<Option<PositionSet>, CoreError> {
        let set = self.client.get_positions(id).await.map_err(|e| self.error(e))?;
        Ok(set.map(PositionSet::from))
    }
}

#[async_trait]
impl RemoteDataPort for AssetSource {
    async fn fetch_list(&self) -> Result<Option<Vec<Satellite>>, CoreError> {
        Ok(self.list_satellites().await?.map(convert::satellites))
    }

    async fn fetch_detail(&self, id: &str) -> Result<Option<Detail>, CoreError> {
        Ok(self.get_satellite(id).await?.map(Detail::from))
    }

    async fn fetch_positions(&self, id: &str) -> Result<Option<PositionSet>, CoreError> {
        Ok(self.get_positions(id).await?.map(PositionSet::from))
    }
}

/// Build the port described by `config`.
pub fn open_source(config: &SourceConfig) -> Result<Arc<dyn RemoteDataPort>, CoreError> {
    match config {
        SourceConfig::Http { url, timeout, tls } => {
            let transport = TransportConfig {
                tls: tls_to_transport(tls),
                timeout: *timeout,
            };
            let client = SatelliteClient::new(url.clone(), &transport)?;
            debug!(url = %client.base_url(), "using HTTP satellite source");
            Ok(Arc::new(HttpSource {
                client,
                timeout: *timeout,
            }))
        }
        SourceConfig::Assets { dir } => {
            let source = AssetSource::new(dir.clone());
            debug!(dir = %source.dir().display(), "using asset satellite source");
            Ok(Arc::new(source))
        }
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use url::Url;

    #[tokio::test]
    async fn http_timeout_reports_the_configured_limit() {
        // Accepts connections and never answers.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let port = open_source(&SourceConfig::Http {
            url: Url::parse(&format!("http://{addr}/")).unwrap(),
            timeout: Duration::from_secs(1),
            tls: TlsVerification::default(),
        })
        .unwrap();

        let err = port.fetch_list().await.unwrap_err();
        assert!(
            matches!(err, CoreError::Timeout { timeout_secs: Some(1) }),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "Request timed out after 1s");
    }

    #[tokio::test]
    async fn missing_asset_dir_reads_as_no_data() {
        let port = open_source(&SourceConfig::Assets {
            dir: "/nonexistent/satlink-assets".into(),
        })
        .unwrap();
        assert!(port.fetch_list().await.unwrap().is_none());
    }
}
