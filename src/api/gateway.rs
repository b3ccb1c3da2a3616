use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::client::SettingsApi;
use super::error::ApiError;
use crate::models::{ExpertConfig, GlobalSettings};

const BASE_URL: &str = "http://198.23.206.54";
const GET_SETTINGS_ENDPOINT: &str = "/getsettings";
const SAVE_SETTINGS_ENDPOINT: &str = "/savesettings";
const GET_EXPERTS_ENDPOINT: &str = "/getexperts";
const SAVE_EXPERTS_ENDPOINT: &str = "/saveexperts";
const HEALTH_ENDPOINT: &str = "/health";

/// HTTP client for the trading-bot gateway. No authentication, pagination
/// or versioning; non-2xx responses are uniformly failures with the body
/// surfaced as error detail.
pub struct GatewayClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different gateway. Tests inject mock-server
    /// URLs here; production callers use `new`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Lightweight liveness probe against the gateway.
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);
        debug!("GET {}", url);
        let response = self.http_client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("GET {} failed: {} - {}", endpoint, status, body);
            return Err(ApiError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::ParseError(format!("Failed to parse response: {} - Body: {}", e, body))
        })
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self.http_client.post(&url).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            warn!("POST {} failed: {} - {}", endpoint, status, body);
            return Err(ApiError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsApi for GatewayClient {
    async fn fetch_settings(&self) -> Result<GlobalSettings, ApiError> {
        self.get_json(GET_SETTINGS_ENDPOINT).await
    }

    async fn save_settings(&self, settings: &GlobalSettings) -> Result<(), ApiError> {
        self.post_json(SAVE_SETTINGS_ENDPOINT, settings).await
    }

    async fn fetch_experts(&self) -> Result<Vec<ExpertConfig>, ApiError> {
        self.get_json(GET_EXPERTS_ENDPOINT).await
    }

    async fn save_experts(&self, experts: &[ExpertConfig]) -> Result<(), ApiError> {
        self.post_json(SAVE_EXPERTS_ENDPOINT, experts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_json() -> serde_json::Value {
        json!({
            "auto_trade": false,
            "channel_listener": true,
            "webhook_enabled": false,
            "risk_percentage": 2.0,
            "lot_size": 0.01,
            "default_sl_pips": 30.0,
            "risk_reward_ratio": 1.5,
            "trading_hours": {"start": 8, "end": 20},
            "algo_trading": {"enabled": false, "interval_minutes": 1},
            "hft_trading": {"enabled": false},
            "trade_secure": {"enabled": true}
        })
    }

    fn experts_json() -> serde_json::Value {
        json!([
            {
                "name": "A",
                "lot_size": 0.01,
                "enabled": false,
                "multi-actions": false,
                "multi-tp": true,
                "volume_keep": 0.5,
                "buy_only": false,
                "tp_enabled": true,
                "signal_in_same_direction": false,
                "last_signal": "buy"
            },
            {
                "name": "B",
                "lot_size": 0.02,
                "enabled": true,
                "multi-actions": true,
                "multi-tp": false,
                "volume_keep": 0.0,
                "buy_only": true,
                "tp_enabled": false,
                "signal_in_same_direction": true,
                "tp_when_in_profit": true,
                "last_signal": "sell"
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_settings_parses_payload() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getsettings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings_json()))
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        let settings = client.fetch_settings().await.unwrap();

        assert!(!settings.auto_trade);
        assert!(settings.channel_listener);
        assert_eq!(settings.trading_hours.start, 8);
        assert_eq!(settings.algo_trading.interval_minutes, 1);
    }

    #[tokio::test]
    async fn test_fetch_settings_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getsettings"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        let err = client.fetch_settings().await.unwrap_err();

        match err {
            ApiError::StatusError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "gateway exploded");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_settings_rejects_malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getsettings"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        let err = client.fetch_settings().await.unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_save_settings_posts_full_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/savesettings"))
            .and(body_json(settings_json()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        let settings: GlobalSettings = serde_json::from_value(settings_json()).unwrap();
        client.save_settings(&settings).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_experts_round_trips_wire_names() {
        let server = MockServer::start().await;
        // The matcher fails if the hyphenated names are lost or if A grows a
        // tp_when_in_profit key it never had.
        Mock::given(method("POST"))
            .and(path("/saveexperts"))
            .and(body_json(experts_json()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        let experts: Vec<ExpertConfig> = serde_json::from_value(experts_json()).unwrap();
        client.save_experts(&experts).await.unwrap();
    }

    #[tokio::test]
    async fn test_health_check_reports_liveness() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;

        let client = GatewayClient::with_base_url(server.uri());
        assert!(client.health_check().await.unwrap());
    }
}
