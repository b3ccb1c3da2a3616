use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};

use super::status::SyncStatus;
use crate::api::SettingsApi;
use crate::models::{ExpertConfig, ExpertEdit, apply_expert_edit};

/// Optimistic sync store for the expert collection, keyed by expert name.
///
/// Same contract as `SettingsStore`, over a collection instead of a
/// singleton: edits address one record by name, and persisting writes the
/// entire ordered collection back.
pub struct ExpertStore {
    api: Arc<dyn SettingsApi>,
    experts: Vec<ExpertConfig>,
    status: SyncStatus,
}

impl ExpertStore {
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        Self {
            api,
            experts: Vec::new(),
            status: SyncStatus::default(),
        }
    }

    pub fn experts(&self) -> &[ExpertConfig] {
        &self.experts
    }

    pub fn expert(&self, name: &str) -> Option<&ExpertConfig> {
        self.experts.iter().find(|e| e.name == name)
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// Replace the local collection wholesale with the remote one. Prior
    /// state survives a failed load untouched.
    pub async fn load(&mut self) {
        self.status.loading = true;
        self.status.error = None;

        let result = self.api.fetch_experts().await;
        self.status.loading = false;

        match result {
            Ok(experts) => {
                info!("Loaded {} experts", experts.len());
                self.experts = experts;
                self.status.last_loaded_at = Some(Utc::now());
            }
            Err(e) => {
                error!("Failed to fetch experts: {}", e);
                self.status.error = Some(format!("Failed to fetch experts: {}", e));
            }
        }
    }

    /// Apply an edit to the named expert locally without persisting. An
    /// unknown name leaves the collection unchanged.
    pub fn stage(&mut self, name: &str, edit: ExpertEdit) {
        if self.expert(name).is_none() {
            warn!("Edit addressed unknown expert {:?}", name);
        }
        self.experts = apply_expert_edit(&self.experts, name, edit);
    }

    /// Apply an edit locally and immediately write the full collection back.
    /// Toggle controls save on every flip.
    pub async fn toggle(&mut self, name: &str, edit: ExpertEdit) {
        self.stage(name, edit);
        self.save().await;
    }

    /// Write the entire current collection to the remote store. A failed
    /// write leaves the optimistic local state standing.
    pub async fn save(&mut self) {
        self.status.saving = true;
        self.status.clear_notice();
        self.status.error = None;

        let result = self.api.save_experts(&self.experts).await;
        self.status.saving = false;

        match result {
            Ok(()) => {
                info!("Saved {} experts", self.experts.len());
                self.status.post_notice("Experts saved successfully!");
            }
            Err(e) => {
                error!("Failed to save experts: {}", e);
                self.status.error = Some(format!("Failed to save experts: {}", e));
            }
        }
    }
}
