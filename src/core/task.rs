use std::fmt;

use chrono::NaiveDate;

use crate::error::ParseError;

/// 用户输入与显示统一使用的日期格式 (dd-MM-yyyy)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub const DATE_CONSTRAINTS: &str = "Dates should be valid and in the format dd-MM-yyyy";
pub const TASK_CONSTRAINTS: &str = "Task contents can take any values, and it should not be blank";

pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::invalid_value(DATE_CONSTRAINTS))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub date: NaiveDate,
    pub contents: String,
}

impl Task {
    pub fn new(date: NaiveDate, contents: &str) -> Result<Self, ParseError> {
        let contents = contents.trim();
        if contents.is_empty() {
            return Err(ParseError::invalid_value(TASK_CONSTRAINTS));
        }
        Ok(Self {
            date,
            contents: contents.to_string(),
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.date.format(DATE_FORMAT), self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_date("10-10-2022").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 10, 10).unwrap());
    }

    #[test]
    fn rejects_other_formats_and_impossible_dates() {
        for raw in ["2022-10-10", "10/10/2022", "31-02-2022", "tomorrow", ""] {
            assert_eq!(
                parse_date(raw),
                Err(ParseError::InvalidValue(DATE_CONSTRAINTS.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn task_display_uses_input_format() {
        let task = Task::new(parse_date("01-03-2023").unwrap(), " Book the gym ").unwrap();
        assert_eq!(task.to_string(), "[01-03-2023] Book the gym");
    }
}
