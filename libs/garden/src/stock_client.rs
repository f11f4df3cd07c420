use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::category::Category;
use crate::error::StockApiError;

pub const DEFAULT_BASE_URL: &str = "https://growagardenstock.vercel.app";

const WEATHER_PATH: &str = "/api/weather";
const REFRESH_PATH: &str = "/api/refresh";

#[derive(Clone)]
pub struct StockClient {
    client: Client,
    base_url: String,
}

impl StockClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Reads STOCK_API_BASE_URL, falling back to the production service.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STOCK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn fetch_weather(&self) -> Result<WeatherPayload, StockApiError> {
        self.get_json(WEATHER_PATH).await
    }

    /// Fetch current stock for one category. Asks upstream to refresh its
    /// cache first; that call is best effort and its failure never aborts
    /// the fetch itself.
    pub async fn fetch_stock(&self, category: Category) -> Result<StockPayload, StockApiError> {
        self.trigger_refresh().await;
        self.get_json(category.endpoint()).await
    }

    async fn trigger_refresh(&self) {
        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        if let Err(e) = self.client.get(&url).send().await {
            debug!(error = %e, "refresh request failed");
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, StockApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| StockApiError::Transport { path, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockApiError::Upstream { path, status });
        }

        response
            .json()
            .await
            .map_err(|source| StockApiError::Decode { path, source })
    }
}

//
// Match the stock service JSON. Every field the service may omit is
// optional; `items` decodes as empty when absent.
//
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WeatherPayload {
    pub effect: Option<String>,
    pub bonus: Option<String>,
    pub mutation: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StockPayload {
    #[serde(default)]
    pub items: Vec<StockItem>,
    pub countdown: Option<Countdown>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StockItem {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Countdown {
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_stock_refreshes_then_decodes_items() {
        let server = MockServer::start_async().await;
        let refresh = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/refresh");
                then.status(200);
            })
            .await;
        let stock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/stock/gear");
                then.status(200).json_body(json!({
                    "items": [{ "name": "Watering Can" }, { "name": "Trowel" }],
                    "countdown": { "formatted": "4m 12s" }
                }));
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let payload = client.fetch_stock(Category::Gear).await.unwrap();

        refresh.assert_async().await;
        stock.assert_async().await;

        let names: Vec<&str> = payload.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Watering Can", "Trowel"]);
        assert_eq!(payload.countdown.unwrap().formatted, "4m 12s");
    }

    #[tokio::test]
    async fn refresh_failure_does_not_abort_the_stock_fetch() {
        // No mock for /api/refresh: the mock server answers 404 and the
        // client is expected to carry on with the stock request.
        let server = MockServer::start_async().await;
        let stock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/stock/egg");
                then.status(200).json_body(json!({
                    "items": [{ "name": "Common Egg" }]
                }));
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let payload = client.fetch_stock(Category::Egg).await.unwrap();

        stock.assert_async().await;
        assert_eq!(payload.items.len(), 1);
        assert!(payload.countdown.is_none());
    }

    #[tokio::test]
    async fn missing_items_field_decodes_as_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/stock/honey");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let payload = client.fetch_stock(Category::Honey).await.unwrap();

        assert!(payload.items.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/weather");
                then.status(503);
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let err = client.fetch_weather().await.unwrap_err();

        match err {
            StockApiError::Upstream { path, status } => {
                assert_eq!(path, "/api/weather");
                assert_eq!(status.as_u16(), 503);
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/weather");
                then.status(200).body("not json");
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let err = client.fetch_weather().await.unwrap_err();

        assert!(matches!(err, StockApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn weather_fields_are_optional() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/weather");
                then.status(200).json_body(json!({ "effect": "Rain" }));
            })
            .await;

        let client = StockClient::new(format!("http://{}", server.address()));
        let weather = client.fetch_weather().await.unwrap();

        assert_eq!(weather.effect.as_deref(), Some("Rain"));
        assert!(weather.bonus.is_none());
        assert!(weather.mutation.is_none());
    }
}
