//! Optional third-party integrations loaded on the client.
//!
//! Every integration here is a non-critical enhancement: it is loaded lazily,
//! owned by the component that mounted it, and torn down when that component
//! goes away. Anything that goes wrong while loading reduces to
//! [`Unavailable`] and the page carries on without it.

pub mod browser;
pub mod exposure;
pub mod lifecycle;
pub mod messaging;
pub mod scheduling;
pub mod session;

use serde::Serialize;
use thiserror::Error;

pub use exposure::{ExposureSlot, Registry};
pub use lifecycle::IntegrationLifecycle;

/// The only failure an optional integration can report. It never leaves the
/// activation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unavailable {
    #[error("integration is not configured")]
    NotConfigured,
    #[error("failed to load integration module: {0}")]
    Load(String),
    #[error("integration initializer failed: {0}")]
    Init(String),
    #[error("integration returned an unusable handle")]
    InvalidHandle,
    #[error("could not schedule integration load")]
    Spawn,
}

/// Resource returned by a successfully loaded integration.
pub trait IntegrationHandle: 'static {
    /// Releases everything the integration owns. The lifecycle guarantees this
    /// runs at most once per handle.
    fn destroy(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationConfig {
    pub server_url: Option<String>,
    pub site_id: Option<String>,
    pub recording: bool,
    pub debug_mode: bool,
}

/// Options handed to the integration's initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub server_url: String,
    pub site_id: String,
    pub recording: bool,
    pub debug: bool,
}

impl IntegrationConfig {
    /// `None` when either required value is missing, which disables the
    /// integration for this mount.
    pub fn init_options(&self) -> Option<InitOptions> {
        let server_url = self.server_url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let site_id = self.site_id.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(InitOptions {
            server_url: server_url.to_string(),
            site_id: site_id.to_string(),
            recording: self.recording,
            debug: self.debug_mode,
        })
    }
}
