// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct Message<'a> {
  pub chat_id: i64,
  pub text: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct TelegramResponse {
  pub ok: bool,
  #[serde(default)]
  pub description: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn message_serializes_chat_id_and_text() {
    let message = Message {
      chat_id: 42,
      text: "Работа взята на проверку ревьюером.",
    };

    let body = serde_json::to_value(&message).unwrap();
    assert_eq!(body["chat_id"], 42);
    assert_eq!(body["text"], "Работа взята на проверку ревьюером.");
    assert_eq!(body.as_object().unwrap().len(), 2);
  }

  #[test]
  fn response_description_defaults_to_empty() {
    let response: TelegramResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
    assert!(response.ok);
    assert!(response.description.is_empty());
  }
}
