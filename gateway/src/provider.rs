//! DataForSEO API client.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::{Error, Result};

/// Client for the DataForSEO v3 API.
///
/// Every endpoint follows the same batching convention: the request body is a
/// JSON array of one or more task parameter objects, and the response wraps
/// results under `tasks[0].result`.
pub struct DataForSeoClient {
    http_client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl DataForSeoClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config
                .credentials()
                .map(|(login, password)| (login.to_string(), password.to_string())),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// POST a task array to a provider sub-path and return the parsed body.
    pub async fn post_tasks(&self, path: &str, tasks: &Value) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!("Sending provider request: {}", url);

        let mut request = self.http_client.post(&url).json(tasks);
        if let Some((login, password)) = &self.credentials {
            request = request.basic_auth(login, Some(password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderStatus { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Provider(e.to_string()))
    }
}

/// First result object of the first task (`tasks[0].result[0]`), or `{}`.
pub fn first_result(response: &Value) -> Value {
    response
        .pointer("/tasks/0/result/0")
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

/// Result list of the first task (`tasks[0].result`), or `[]`.
pub fn result_list(response: &Value) -> Vec<Value> {
    response
        .pointer("/tasks/0/result")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Item list of the first result (`tasks[0].result[0].items`), or `[]`.
pub fn result_items(response: &Value) -> Vec<Value> {
    response
        .pointer("/tasks/0/result/0/items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!({
            "tasks": [{
                "result": [{
                    "items_count": 2,
                    "items": [
                        {"type": "organic", "url": "https://a.example"},
                        {"type": "organic", "url": "https://b.example"}
                    ]
                }]
            }]
        })
    }

    #[test]
    fn test_first_result() {
        let result = first_result(&sample_response());
        assert_eq!(result["items_count"], 2);

        // Missing fields degrade to an empty object, not an error.
        assert_eq!(first_result(&json!({})), json!({}));
        assert_eq!(first_result(&json!({"tasks": [{"result": null}]})), json!({}));
    }

    #[test]
    fn test_result_list() {
        assert_eq!(result_list(&sample_response()).len(), 1);
        assert!(result_list(&json!({"tasks": []})).is_empty());
    }

    #[test]
    fn test_result_items() {
        let items = result_items(&sample_response());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["url"], "https://a.example");
        assert!(result_items(&json!({})).is_empty());
    }

    #[test]
    fn test_base_url_normalization() {
        let client = DataForSeoClient::new(&crate::config::ProviderConfig {
            base_url: "https://api.dataforseo.com/v3/".to_string(),
            login: None,
            password: None,
            timeout_secs: 60,
        })
        .unwrap();
        assert_eq!(client.base_url, "https://api.dataforseo.com/v3");
        assert!(!client.is_configured());
    }
}
