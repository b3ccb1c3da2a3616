use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// How long a save notice stays visible before it clears itself.
pub const SAVE_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
struct SaveNotice {
    message: String,
    posted: Instant,
}

/// UI-facing status shared by both sync stores. `loading` and `saving` are
/// set for the duration of the corresponding network call and cleared on
/// every outcome.
#[derive(Debug, Clone, Default)]
pub struct SyncStatus {
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub last_loaded_at: Option<DateTime<Utc>>,
    notice: Option<SaveNotice>,
}

impl SyncStatus {
    /// Transient success message from the most recent save; `None` once its
    /// TTL has elapsed.
    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.posted.elapsed() < SAVE_NOTICE_TTL)
            .map(|n| n.message.as_str())
    }

    pub(crate) fn post_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(SaveNotice {
            message: message.into(),
            posted: Instant::now(),
        });
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }
}
