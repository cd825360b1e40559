// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

// Status stays a plain string here; `verdict` turns it into a known
// `HomeworkStatus` and rejects undocumented values.
#[derive(Debug, Deserialize, Clone)]
pub struct Homework {
  pub homework_name: String,
  pub status: String,
}
