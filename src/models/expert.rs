use serde::{Deserialize, Serialize};

/// Direction of the most recent signal an expert acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
}

/// Per-strategy parameters for one named expert. `name` is the unique,
/// case-sensitive key within the collection and is never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertConfig {
    pub name: String,
    pub lot_size: f64,
    pub enabled: bool,

    /// Wire name uses a hyphen, unlike the rest of the payload.
    #[serde(rename = "multi-actions")]
    pub multi_actions: bool,

    #[serde(rename = "multi-tp")]
    pub multi_tp: bool,

    pub volume_keep: f64,
    pub buy_only: bool,
    pub tp_enabled: bool,
    pub signal_in_same_direction: bool,

    /// Capability flag; experts that never reported it must not have it
    /// written back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_when_in_profit: Option<bool>,

    pub last_signal: Signal,
}

/// Single-field edit to one expert. There is deliberately no variant for
/// `name`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpertEdit {
    LotSize(f64),
    VolumeKeep(f64),
    Enabled(bool),
    MultiActions(bool),
    MultiTp(bool),
    BuyOnly(bool),
    TpEnabled(bool),
    SignalInSameDirection(bool),
    TpWhenInProfit(bool),
    LastSignal(Signal),
}

impl ExpertConfig {
    /// Derive a new expert with exactly one field replaced.
    pub fn apply(&self, edit: ExpertEdit) -> ExpertConfig {
        let mut next = self.clone();
        match edit {
            ExpertEdit::LotSize(v) => next.lot_size = v,
            ExpertEdit::VolumeKeep(v) => next.volume_keep = v,
            ExpertEdit::Enabled(v) => next.enabled = v,
            ExpertEdit::MultiActions(v) => next.multi_actions = v,
            ExpertEdit::MultiTp(v) => next.multi_tp = v,
            ExpertEdit::BuyOnly(v) => next.buy_only = v,
            ExpertEdit::TpEnabled(v) => next.tp_enabled = v,
            ExpertEdit::SignalInSameDirection(v) => next.signal_in_same_direction = v,
            ExpertEdit::TpWhenInProfit(v) => next.tp_when_in_profit = Some(v),
            ExpertEdit::LastSignal(v) => next.last_signal = v,
        }
        next
    }
}

/// Derive a new collection with the named expert's field replaced. Experts
/// with a different name are carried over untouched; an unknown name yields
/// an unchanged collection.
pub fn apply_expert_edit(
    experts: &[ExpertConfig],
    name: &str,
    edit: ExpertEdit,
) -> Vec<ExpertConfig> {
    experts
        .iter()
        .map(|expert| {
            if expert.name == name {
                expert.apply(edit)
            } else {
                expert.clone()
            }
        })
        .collect()
}
