// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::Homework;
use error::Error;
use serde_json::Value;

/// Checks the response shape and returns the (possibly empty) homework list.
pub fn check_response(body: &Value) -> Result<Vec<Homework>, Error> {
  let map = body
    .as_object()
    .ok_or_else(|| Error::MalformedResponse(format!("Response is not an object: {}", body)))?;

  let homeworks = map.get("homeworks").ok_or(Error::MissingHomeworks)?;

  if !homeworks.is_array() {
    return Err(Error::MalformedResponse(format!(
      "homeworks is not a list: {}",
      homeworks
    )));
  }

  serde_json::from_value(homeworks.clone())
    .map_err(|e| Error::MalformedResponse(format!("Failed to parse homeworks: {}", e)))
}

pub fn current_date(body: &Value) -> Option<i64> {
  body.get("current_date").and_then(Value::as_i64)
}
