pub mod experts;
pub mod settings;
pub mod status;

pub use experts::ExpertStore;
pub use settings::SettingsStore;
pub use status::{SAVE_NOTICE_TTL, SyncStatus};
