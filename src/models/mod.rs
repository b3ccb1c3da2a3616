pub mod expert;
pub mod settings;

pub use expert::{ExpertConfig, ExpertEdit, Signal, apply_expert_edit};
pub use settings::{
    AlgoTrading, GlobalSettings, HftTrading, SettingsEdit, TradeSecure, TradingHours,
};
