// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod models;
pub mod response;
pub mod service;
pub mod verdict;

pub use client::{PracticumApi, PracticumClient};
pub use models::Homework;
pub use service::StatusService;
pub use verdict::HomeworkStatus;

pub(crate) const API_BASE_URL: &str =
  "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
