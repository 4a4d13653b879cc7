//! Async access to satellite catalogue, detail, and position data.
//!
//! Two interchangeable sources share the same wire [`models`]:
//!
//! - **[`SatelliteClient`]**: REST client over `reqwest`.
//! - **[`AssetSource`]**: the JSON documents bundled with the satellite
//!   app, read from a directory.
//!
//! Both return `Ok(None)` when the requested record does not exist and
//! reserve `Err` for transport, I/O, and decoding failures.

pub mod assets;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use assets::AssetSource;
pub use client::SatelliteClient;
pub use error::Error;
pub use models::{PositionsResponse, SatelliteDetail, SatelliteSummary, WireId, WirePosition};
pub use transport::{TlsMode, TransportConfig};
