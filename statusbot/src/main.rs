// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use error::Error;
use practicum::StatusService;
use std::env;
use telegram::TelegramClient;
use tracing::{debug, error, info, instrument, warn};

const RETRY_TIME: std::time::Duration = std::time::Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  practicum_token: String,
  telegram_bot_token: String,
  telegram_chat_id: i64,
}

pub struct ServiceRunner {
  service: StatusService,
  tg: TelegramClient,
  tg_chat_id: i64,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

fn required_var(name: &str) -> Result<String> {
  env::var(name).map_err(|_| {
    error!("Required variable missing: {}", name);
    anyhow::anyhow!("Required variable missing: {}", name)
  })
}

impl ServiceConfig {
  fn from_env() -> Result<Self> {
    Ok(Self {
      practicum_token: required_var("PRACTICUM_TOKEN")?,
      telegram_bot_token: required_var("TELEGRAM_TOKEN")?,
      telegram_chat_id: required_var("TELEGRAM_CHAT_ID")?
        .parse()
        .context("TELEGRAM_CHAT_ID must be a numeric chat id")?,
    })
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  setup_logging();

  let config = ServiceConfig::from_env()?;
  ServiceRunner::new(config)?.run().await
}

impl ServiceRunner {
  #[instrument(skip(config))]
  pub fn new(config: ServiceConfig) -> Result<Self> {
    Ok(Self {
      service: StatusService::new(&config.practicum_token),
      tg: TelegramClient::builder()
        .token(config.telegram_bot_token.clone())
        .build()?,
      tg_chat_id: config.telegram_chat_id,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    info!("Starting homework status bot");

    loop {
      self.run_cycle().await;
      tokio::time::sleep(RETRY_TIME).await;
    }
  }

  #[instrument(skip(self))]
  async fn run_cycle(&mut self) {
    match self.service.poll().await {
      Ok(Some(message)) => self.notify(&message).await,
      Ok(None) => debug!("No new checks in homeworks"),
      Err(err) => {
        match &err {
          Error::HttpError(_) | Error::TimeoutError => {
            warn!("Poll cycle failed: {}", err);
          }
          Error::UnexpectedStatus(_)
          | Error::ApiRejection(_)
          | Error::MalformedResponse(_)
          | Error::MissingHomeworks
          | Error::UnknownStatus(_)
          | Error::NotifyError(_)
          | Error::ConfigError(_) => {
            error!("Poll cycle failed: {}", err);
          }
        }
        self
          .notify(&format!("Сбой в работе программы: {}", err))
          .await;
      }
    }
  }

  // Delivery is best-effort: a failed send is logged and swallowed.
  async fn notify(&self, message: &str) {
    match self
      .tg
      .message()
      .chat_id(self.tg_chat_id)
      .text(message)
      .send(&self.tg)
      .await
    {
      Ok(()) => info!("Send message: {}", message),
      Err(err) => error!("Failed to send message! Error: {}", err),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Env vars are process-global, so the startup checks run in one test.
  #[test]
  fn config_requires_all_three_tokens() {
    env::remove_var("PRACTICUM_TOKEN");
    env::remove_var("TELEGRAM_TOKEN");
    env::remove_var("TELEGRAM_CHAT_ID");
    assert!(ServiceConfig::from_env().is_err());

    env::set_var("PRACTICUM_TOKEN", "practicum");
    env::set_var("TELEGRAM_TOKEN", "123456:telegram");
    assert!(ServiceConfig::from_env().is_err());

    env::set_var("TELEGRAM_CHAT_ID", "not-a-number");
    assert!(ServiceConfig::from_env().is_err());

    env::set_var("TELEGRAM_CHAT_ID", "4242");
    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config.telegram_chat_id, 4242);
  }
}
