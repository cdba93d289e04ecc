// Daemon status and settings call-sites

use crate::client::LbryClient;
use crate::error::Result;
use crate::types::daemon::StatusRequest;
use crate::types::{DaemonSettings, DaemonStatus, SettingsUpdate};

impl LbryClient {
    /// Daemon settings
    pub async fn settings_get(&self) -> Result<DaemonSettings> {
        self.call("settings_get", ()).await
    }

    /// Update daemon settings, returning the updated set
    pub async fn settings_set(&self, update: SettingsUpdate) -> Result<DaemonSettings> {
        self.call("settings_set", update).await
    }

    /// Daemon status, with session status if requested
    pub async fn status(&self, session_status: bool) -> Result<DaemonStatus> {
        self.call("status", StatusRequest { session_status }).await
    }
}
