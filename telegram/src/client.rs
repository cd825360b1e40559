// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{MessageBuilder, TelegramClientBuilder},
  config::{TelegramConfig, TELEGRAM_API_BASE},
  types::{Message, TelegramResponse},
};
use error::Error;
use reqwest::Client;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  pub fn message(&self) -> MessageBuilder {
    MessageBuilder::new()
  }

  #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
  pub(crate) async fn send_message(&self, message: Message<'_>) -> Result<(), Error> {
    let url = format!("{}{}/sendMessage", TELEGRAM_API_BASE, self.config.token);

    let response = self
      .client
      .post(&url)
      .json(&message)
      .send()
      .await
      .map_err(|e| Error::NotifyError(e.to_string()))?;

    let status = response.status();
    let telegram_response: TelegramResponse = response
      .json()
      .await
      .map_err(|e| Error::NotifyError(e.to_string()))?;

    if !telegram_response.ok {
      return Err(Error::NotifyError(format!(
        "{}: {}",
        status, telegram_response.description
      )));
    }

    debug!("Message sent successfully");
    Ok(())
  }
}
