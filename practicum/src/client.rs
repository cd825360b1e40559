// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{API_BASE_URL, REQUEST_TIMEOUT};
use async_trait::async_trait;
use error::Error;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, error, instrument};
use url::Url;

#[async_trait]
pub trait PracticumApi: Send + Sync {
  async fn fetch_statuses(&self, from_date: i64) -> Result<Value, Error>;
}

#[derive(Debug, Clone)]
pub struct PracticumClient {
  client: Arc<reqwest::Client>,
  token: String,
  base_url: String,
}

impl PracticumClient {
  pub fn new(token: &str) -> Self {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .expect("Failed to create HTTP client");

    Self {
      client: Arc::new(client),
      token: token.to_string(),
      base_url: API_BASE_URL.into(),
    }
  }

  #[cfg(test)]
  pub fn with_base_url(token: &str, base_url: &str) -> Self {
    let mut client = Self::new(token);
    client.base_url = base_url.to_string();
    client
  }

  fn build_url(&self, from_date: i64) -> Result<Url, Error> {
    Url::parse_with_params(&self.base_url, &[("from_date", from_date.to_string())])
      .map_err(|e| Error::ConfigError(format!("Failed to build API URL: {}", e)))
  }

  fn build_headers(&self) -> Result<reqwest::header::HeaderMap, Error> {
    let mut headers = reqwest::header::HeaderMap::new();

    headers.insert(
      reqwest::header::AUTHORIZATION,
      reqwest::header::HeaderValue::from_str(&format!("OAuth {}", self.token))
        .map_err(|e| Error::ConfigError(format!("Invalid API token: {}", e)))?,
    );

    Ok(headers)
  }
}

#[async_trait]
impl PracticumApi for PracticumClient {
  #[instrument(skip(self))]
  async fn fetch_statuses(&self, from_date: i64) -> Result<Value, Error> {
    let url = self.build_url(from_date)?;
    let headers = self.build_headers()?;

    let response = timeout(REQUEST_TIMEOUT, self.client.get(url).headers(headers).send())
      .await
      .map_err(|_| Error::TimeoutError)??;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
      error!("API request failed with status: {}", status);
      return Err(Error::UnexpectedStatus(status));
    }

    let body: Value = response
      .json()
      .await
      .map_err(|e| Error::MalformedResponse(format!("Failed to deserialize response: {}", e)))?;

    // The API reports its own failures inside a 200 body.
    for field in ["error", "code"] {
      if let Some(detail) = body.get(field) {
        return Err(Error::ApiRejection(detail.to_string()));
      }
    }

    debug!("Fetched homework statuses");
    Ok(body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_url_carries_from_date() {
    let client = PracticumClient::new("token");
    let url = client.build_url(1_700_000_000).unwrap();
    assert_eq!(url.query(), Some("from_date=1700000000"));
  }

  #[test]
  fn base_url_override_is_used() {
    let client = PracticumClient::with_base_url("token", "http://localhost:9999/api/");
    let url = client.build_url(0).unwrap();
    assert!(url.as_str().starts_with("http://localhost:9999/api/"));
  }

  #[test]
  fn build_headers_uses_oauth_scheme() {
    let client = PracticumClient::new("secret");
    let headers = client.build_headers().unwrap();
    assert_eq!(
      headers.get(reqwest::header::AUTHORIZATION).unwrap(),
      "OAuth secret"
    );
  }

  #[test]
  fn build_headers_rejects_invalid_token() {
    let client = PracticumClient::new("line\nbreak");
    let err = client.build_headers().unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
  }
}
