use thiserror::Error;

use crate::command::usage::HELP_USAGE;

/// 输入行无法转换为命令时的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 空行或只有空白
    #[error("Invalid command format! \n{}", HELP_USAGE)]
    EmptyInput,

    #[error("Unknown command")]
    UnknownCommand(String),

    /// 参数结构不符合该命令的语法，附带该命令的用法
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    /// 取值存在但不合法 (日期、电话、邮箱等)
    #[error("{0}")]
    InvalidValue(String),

    #[error("Index is not a non-zero unsigned integer: {0:?}")]
    InvalidIndex(String),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage }
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        ParseError::InvalidValue(message.into())
    }

    /// 失败信息中附带的用法说明 (未知命令与取值错误没有)
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyInput => Some(HELP_USAGE),
            ParseError::InvalidFormat { usage } => Some(*usage),
            ParseError::UnknownCommand(_)
            | ParseError::InvalidValue(_)
            | ParseError::InvalidIndex(_) => None,
        }
    }
}

/// 命令执行阶段的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The {list} index provided is invalid: {index}")]
    IndexOutOfRange { list: &'static str, index: usize },

    #[error("This person already exists in the player list")]
    DuplicatePerson,

    #[error("No court image named '{0}' was found")]
    CourtNotFound(String),

    #[error("Command '{0}' is not implemented yet")]
    NotImplemented(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("General error: {0}")]
    General(#[from] anyhow::Error),
}
