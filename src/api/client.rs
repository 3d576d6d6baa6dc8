use tracing::debug;

use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::item::Item;

/// Minimal client for the openHAB REST API.
pub struct OpenHabClient {
    client: reqwest::Client,
    base_url: String,
}

fn build_http_client(config: &RuntimeConfig) -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("zigbee-light/", env!("CARGO_PKG_VERSION")))
        .timeout(config.timeout)
        .build()?)
}

impl OpenHabClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self, AppError> {
        let base_url = config.base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::InvalidInput(format!(
                "Invalid base URL '{}'. Expected an http:// or https:// URL.",
                config.base_url
            )));
        }

        Ok(Self {
            client: build_http_client(config)?,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single item. The name is appended to the URL as is.
    pub async fn get_item(&self, item_name: &str) -> Result<Item, AppError> {
        let url = format!("{}/items/{}", self.base_url, item_name);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Response: {} {}", status, body);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::ItemNotFound(item_name.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Api {
                message: format!("{}: {}", status, body),
            });
        }

        let mut item: Item = serde_json::from_str(&body)?;
        if item.name.is_empty() {
            item.name = item_name.to_string();
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = RuntimeConfig::new("http://openhab.local:8080/rest/", false);
        let client = OpenHabClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://openhab.local:8080/rest");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = RuntimeConfig::new("openhab.local:8080/rest", false);
        let err = OpenHabClient::new(&config).err().unwrap();
        assert!(err.is_usage());
        assert!(err.to_string().contains("openhab.local:8080/rest"));
    }
}
