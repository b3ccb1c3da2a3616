use serde::{Deserialize, Serialize};

/// Account-wide settings singleton as served by the gateway. Exactly one
/// instance exists per account; there is no identity field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub auto_trade: bool,
    pub channel_listener: bool,
    pub webhook_enabled: bool,
    pub risk_percentage: f64,
    pub lot_size: f64,
    pub default_sl_pips: f64,
    pub risk_reward_ratio: f64,
    pub trading_hours: TradingHours,
    pub algo_trading: AlgoTrading,
    pub hft_trading: HftTrading,
    pub trade_secure: TradeSecure,
}

/// Daily window in which the bot is allowed to trade (hours, 0-23).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingHours {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgoTrading {
    pub enabled: bool,
    pub interval_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HftTrading {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSecure {
    pub enabled: bool,
}

/// Single-field edit to the settings singleton. Nested groups get their own
/// variants so field addressing stays checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsEdit {
    AutoTrade(bool),
    ChannelListener(bool),
    WebhookEnabled(bool),
    RiskPercentage(f64),
    LotSize(f64),
    DefaultSlPips(f64),
    RiskRewardRatio(f64),
    TradingHoursStart(u32),
    TradingHoursEnd(u32),
    AlgoTradingEnabled(bool),
    AlgoTradingIntervalMinutes(u32),
    HftTradingEnabled(bool),
    TradeSecureEnabled(bool),
}

impl GlobalSettings {
    /// Derive a new settings value with exactly one field replaced. The
    /// receiver is never mutated.
    pub fn apply(&self, edit: SettingsEdit) -> GlobalSettings {
        let mut next = self.clone();
        match edit {
            SettingsEdit::AutoTrade(v) => next.auto_trade = v,
            SettingsEdit::ChannelListener(v) => next.channel_listener = v,
            SettingsEdit::WebhookEnabled(v) => next.webhook_enabled = v,
            SettingsEdit::RiskPercentage(v) => next.risk_percentage = v,
            SettingsEdit::LotSize(v) => next.lot_size = v,
            SettingsEdit::DefaultSlPips(v) => next.default_sl_pips = v,
            SettingsEdit::RiskRewardRatio(v) => next.risk_reward_ratio = v,
            SettingsEdit::TradingHoursStart(v) => next.trading_hours.start = v,
            SettingsEdit::TradingHoursEnd(v) => next.trading_hours.end = v,
            SettingsEdit::AlgoTradingEnabled(v) => next.algo_trading.enabled = v,
            SettingsEdit::AlgoTradingIntervalMinutes(v) => next.algo_trading.interval_minutes = v,
            SettingsEdit::HftTradingEnabled(v) => next.hft_trading.enabled = v,
            SettingsEdit::TradeSecureEnabled(v) => next.trade_secure.enabled = v,
        }
        next
    }
}
