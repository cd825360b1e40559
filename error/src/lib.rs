// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Timeout error")]
  TimeoutError,
  #[error("Unexpected response from the server. API response: {0}")]
  UnexpectedStatus(reqwest::StatusCode),
  #[error("API rejected the request: {0}")]
  ApiRejection(String),
  #[error("Malformed response: {0}")]
  MalformedResponse(String),
  #[error("No homeworks key in response")]
  MissingHomeworks,
  #[error("Undocumented status of homework: {0}")]
  UnknownStatus(String),
  #[error("Failed to send message: {0}")]
  NotifyError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
}
