pub mod client;
pub mod error;
pub mod gateway;

pub use client::SettingsApi;
pub use error::ApiError;
pub use gateway::GatewayClient;
