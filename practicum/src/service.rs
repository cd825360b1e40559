// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::PracticumApi, response, verdict};
use chrono::Utc;
use error::Error;
use tracing::{debug, info, instrument};

pub struct StatusService {
  client: Box<dyn PracticumApi>,
  from_date: i64,
}

impl StatusService {
  pub fn new(token: &str) -> Self {
    Self {
      client: Box::new(crate::client::PracticumClient::new(token)),
      from_date: Utc::now().timestamp(),
    }
  }

  #[cfg(test)]
  pub fn with_client(client: Box<dyn PracticumApi>, from_date: i64) -> Self {
    Self { client, from_date }
  }

  pub fn from_date(&self) -> i64 {
    self.from_date
  }

  /// One poll cycle: fetch since the cursor, validate, advance the cursor,
  /// render the verdict for the latest submission if there is one.
  #[instrument(skip(self))]
  pub async fn poll(&mut self) -> Result<Option<String>, Error> {
    debug!("Requesting homework statuses from {}", self.from_date);
    let body = self.client.fetch_statuses(self.from_date).await?;
    let homeworks = response::check_response(&body)?;

    // Advance before parsing, so one undocumented status cannot freeze
    // the polling window.
    if let Some(date) = response::current_date(&body) {
      self.from_date = date;
    }

    match homeworks.first() {
      Some(homework) => {
        info!("Homework status changed: {}", homework.homework_name);
        verdict::parse_status(homework).map(Some)
      }
      None => {
        debug!("No new checks in homeworks");
        Ok(None)
      }
    }
  }
}
