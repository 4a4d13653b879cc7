//! Reactive core for satlink.
//!
//! Sits between a satellite data source (`satlink-api`) and whatever renders
//! the results. The pieces:
//!
//! - **[`RemoteDataPort`]**: the async data-access seam, implemented for
//!   both the REST client and the bundled asset directory.
//! - **[`ListLoadController`]** / **[`DetailLoadController`]**: one load
//!   cycle at a time, published as [`ResourceState`] through [`Signal`]s.
//! - **[`PositionPoller`]**: the live position loop started after a
//!   successful detail load. Runs until cancelled.
//! - **[`DetailViewModel`]** / **[`PositionDisplay`]**: formatted,
//!   styled text ready for display.
//! - **[`Session`]**: ties a configured source, strings, and a root
//!   cancellation token together and hands out controllers.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod port;
pub mod resource;
pub mod select;
pub mod session;
pub mod stream;
pub mod strings;
pub mod text;

pub use config::{CoreConfig, DEFAULT_POLL_INTERVAL, PollConfig, SourceConfig, TlsVerification};
pub use controller::{DetailLoadController, DetailState, ListLoadController, ListState, PositionPoller};
pub use error::CoreError;
pub use format::{DetailViewModel, PositionDisplay};
pub use model::{Detail, Position, PositionSet, Satellite};
pub use port::{RemoteDataPort, open_source};
pub use resource::{ErrorInfo, ResourceState};
pub use session::Session;
pub use stream::{Signal, SignalStream};
pub use strings::{DefaultStrings, OverrideStrings, StringKey, StringProvider};
pub use text::{Span, StyledText};
