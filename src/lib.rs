//! Settings sync client for a trading-automation dashboard.
//!
//! The gateway owns two configuration shapes: the account settings
//! singleton and the expert collection. This crate keeps a transient,
//! optimistic in-memory copy of each, applies typed single-field edits to
//! it, and writes the full record set back over HTTP. View code consumes
//! the stores in `store` and renders their [`store::SyncStatus`].

pub mod api;
pub mod models;
pub mod store;

pub use api::{ApiError, GatewayClient, SettingsApi};
pub use models::{
    ExpertConfig, ExpertEdit, GlobalSettings, SettingsEdit, Signal, apply_expert_edit,
};
pub use store::{ExpertStore, SettingsStore, SyncStatus};
