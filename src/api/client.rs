use async_trait::async_trait;

use super::error::ApiError;
use crate::models::{ExpertConfig, GlobalSettings};

/// Core trait the sync stores talk to; implemented by the HTTP gateway
/// client and by in-memory doubles in tests.
///
/// Reads return the full record set and writes always carry the full record
/// set back; the gateway has no partial-update protocol.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Fetch the account settings singleton.
    async fn fetch_settings(&self) -> Result<GlobalSettings, ApiError>;

    /// Persist the entire settings singleton.
    async fn save_settings(&self, settings: &GlobalSettings) -> Result<(), ApiError>;

    /// Fetch the ordered expert collection.
    async fn fetch_experts(&self) -> Result<Vec<ExpertConfig>, ApiError>;

    /// Persist the entire expert collection.
    async fn save_experts(&self, experts: &[ExpertConfig]) -> Result<(), ApiError>;
}
