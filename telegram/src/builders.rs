// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::{TelegramConfig, MAX_MESSAGE_LENGTH},
  types::Message,
};
use error::Error;

#[derive(Default)]
pub struct MessageBuilder {
  pub(crate) chat_id: Option<i64>,
  pub(crate) text: Option<String>,
}

impl MessageBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::NotifyError("Chat ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| Error::NotifyError("Message text is required".into()))?;

    if text.len() > MAX_MESSAGE_LENGTH {
      return Err(Error::NotifyError(format!(
        "Message too long: {} characters (max {})",
        text.len(),
        MAX_MESSAGE_LENGTH
      )));
    }

    client
      .send_message(Message {
        chat_id,
        text: &text,
      })
      .await
  }
}

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn build(self) -> Result<TelegramClient, Error> {
    if self.config.token.is_empty() {
      return Err(Error::ConfigError("Bot token cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client() -> TelegramClient {
    TelegramClient::builder()
      .token("123456:test-token")
      .build()
      .unwrap()
  }

  #[test]
  fn build_rejects_empty_token() {
    let err = TelegramClient::builder().build().unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
  }

  #[tokio::test]
  async fn send_requires_chat_id() {
    let client = test_client();
    let err = client
      .message()
      .text("hello")
      .send(&client)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotifyError(_)));
  }

  #[tokio::test]
  async fn send_requires_text() {
    let client = test_client();
    let err = client.message().chat_id(1).send(&client).await.unwrap_err();
    assert!(matches!(err, Error::NotifyError(_)));
  }

  #[tokio::test]
  async fn send_rejects_oversized_message() {
    let client = test_client();
    let err = client
      .message()
      .chat_id(1)
      .text("x".repeat(MAX_MESSAGE_LENGTH + 1))
      .send(&client)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotifyError(_)));
  }
}
