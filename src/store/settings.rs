use std::sync::Arc;

use chrono::Utc;
use log::{error, info};

use super::status::SyncStatus;
use crate::api::SettingsApi;
use crate::models::{GlobalSettings, SettingsEdit};

/// Optimistic sync store for the account settings singleton.
///
/// Holds a transient in-memory copy of the remote record. Every edit derives
/// a new value, and persisting always writes the full record back in one
/// piece. A failed save leaves the optimistic local value standing; a manual
/// reload is the only recovery path.
pub struct SettingsStore {
    api: Arc<dyn SettingsApi>,
    settings: Option<GlobalSettings>,
    status: SyncStatus,
}

impl SettingsStore {
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        Self {
            api,
            settings: None,
            status: SyncStatus::default(),
        }
    }

    pub fn settings(&self) -> Option<&GlobalSettings> {
        self.settings.as_ref()
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// Replace local state wholesale with the remote record. Prior state
    /// survives a failed load untouched.
    pub async fn load(&mut self) {
        self.status.loading = true;
        self.status.error = None;

        let result = self.api.fetch_settings().await;
        self.status.loading = false;

        match result {
            Ok(settings) => {
                self.settings = Some(settings);
                self.status.last_loaded_at = Some(Utc::now());
                info!("Loaded account settings");
            }
            Err(e) => {
                error!("Failed to fetch settings: {}", e);
                self.status.error = Some(format!("Failed to fetch settings: {}", e));
            }
        }
    }

    /// Apply an edit locally without persisting. Number inputs stage their
    /// edits and defer to an explicit `save`.
    pub fn stage(&mut self, edit: SettingsEdit) {
        if let Some(settings) = &self.settings {
            self.settings = Some(settings.apply(edit));
        }
    }

    /// Apply an edit locally and immediately write the full record back.
    /// Toggle controls save on every flip.
    pub async fn toggle(&mut self, edit: SettingsEdit) {
        self.stage(edit);
        self.save().await;
    }

    /// Write the entire current record to the remote store. No-op until the
    /// first successful load.
    pub async fn save(&mut self) {
        let Some(settings) = self.settings.clone() else {
            return;
        };

        self.status.saving = true;
        self.status.clear_notice();
        self.status.error = None;

        let result = self.api.save_settings(&settings).await;
        self.status.saving = false;

        match result {
            Ok(()) => {
                info!("Saved account settings");
                self.status.post_notice("Settings saved successfully!");
            }
            Err(e) => {
                error!("Failed to save settings: {}", e);
                self.status.error = Some(format!("Failed to save settings: {}", e));
            }
        }
    }
}
