use std::time::Duration;

use reqwest::Client;
use tokio::runtime::{Builder, Runtime};

use super::{LookupError, SuggestionLookup};
use crate::config::LookupConfig;
use crate::suggestion::Suggestion;

/// HTTP suggestion client
///
/// Issues `GET <endpoint>?<query_param>=<keyword>` and decodes a JSON array of suggestions.
/// Owns a current-thread tokio runtime so it can be driven from a plain thread.
pub struct HttpLookup {
    client: Client,
    runtime: Runtime,
    endpoint: String,
    query_param: String,
}

impl HttpLookup {
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LookupError::Runtime(e.to_string()))?;

        Ok(Self {
            client,
            runtime,
            endpoint: config.endpoint.clone(),
            query_param: config.query_param.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), query)])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        decode_suggestions(&body)
    }
}

impl SuggestionLookup for HttpLookup {
    fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        #[cfg(debug_assertions)]
        log::debug!("GET {} {}={}", self.endpoint, self.query_param, query);

        self.runtime.block_on(self.fetch(query))
    }
}

fn decode_suggestions(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_suggestions_array() {
        let body = r#"[{"sickCd":"J10","sickNm":"Influenza"}]"#;
        let items = decode_suggestions(body).unwrap();
        assert_eq!(items, vec![Suggestion::new("J10", "Influenza")]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_suggestions("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_suggestions(r#"{"message":"oops"}"#).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn test_from_config_keeps_endpoint() {
        let config = LookupConfig {
            endpoint: "http://127.0.0.1:9/sick".to_string(),
            ..LookupConfig::default()
        };
        let lookup = HttpLookup::from_config(&config).unwrap();
        assert_eq!(lookup.endpoint(), "http://127.0.0.1:9/sick");
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is closed on test machines; connection is refused quickly.
        let config = LookupConfig {
            endpoint: "http://127.0.0.1:9/sick".to_string(),
            timeout_ms: 500,
            ..LookupConfig::default()
        };
        let lookup = HttpLookup::from_config(&config).unwrap();
        let err = lookup.lookup("flu").unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));
    }
}
