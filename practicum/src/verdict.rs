// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::Homework;
use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
  Approved,
  Reviewing,
  Rejected,
}

impl HomeworkStatus {
  pub fn parse(status: &str) -> Result<Self, Error> {
    match status {
      "approved" => Ok(Self::Approved),
      "reviewing" => Ok(Self::Reviewing),
      "rejected" => Ok(Self::Rejected),
      other => Err(Error::UnknownStatus(other.to_string())),
    }
  }

  pub fn verdict(&self) -> &'static str {
    match self {
      Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
      Self::Reviewing => "Работа взята на проверку ревьюером.",
      Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
    }
  }
}

pub fn parse_status(homework: &Homework) -> Result<String, Error> {
  let status = HomeworkStatus::parse(&homework.status)?;
  Ok(format!(
    "Изменился статус проверки работы \"{}\".{}",
    homework.homework_name,
    status.verdict()
  ))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_statuses_parse() {
    assert_eq!(
      HomeworkStatus::parse("approved").unwrap(),
      HomeworkStatus::Approved
    );
    assert_eq!(
      HomeworkStatus::parse("reviewing").unwrap(),
      HomeworkStatus::Reviewing
    );
    assert_eq!(
      HomeworkStatus::parse("rejected").unwrap(),
      HomeworkStatus::Rejected
    );
  }

  #[test]
  fn unknown_status_is_rejected() {
    let err = HomeworkStatus::parse("graded").unwrap_err();
    assert!(matches!(err, Error::UnknownStatus(ref s) if s == "graded"));
  }

  #[test]
  fn approved_verdict_substitutes_name() {
    let homework = Homework {
      homework_name: "hw05_final".into(),
      status: "approved".into(),
    };
    assert_eq!(
      parse_status(&homework).unwrap(),
      "Изменился статус проверки работы \"hw05_final\".\
       Работа проверена: ревьюеру всё понравилось. Ура!"
    );
  }

  #[test]
  fn rejected_verdict_mentions_remarks() {
    let homework = Homework {
      homework_name: "hw03_api".into(),
      status: "rejected".into(),
    };
    let message = parse_status(&homework).unwrap();
    assert!(message.contains("у ревьюера есть замечания"));
  }
}
