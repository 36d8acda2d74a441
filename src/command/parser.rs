use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::command::{
    args::{self, ParseResult},
    definition::Command,
    tokenizer::split_command_word,
    usage::*,
};
use crate::error::ParseError;

/// 注册表中的一项：命令词 + 用法 + 参数解析函数
pub struct CommandSpec {
    pub word: &'static str,
    pub usage: &'static str,
    pub parse: fn(&str) -> ParseResult,
}

/// 我们支持的命令列表 (顺序即 help 中的显示顺序)
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec { word: "add", usage: ADD_USAGE, parse: args::add },
    CommandSpec { word: "edit", usage: EDIT_USAGE, parse: args::edit },
    CommandSpec { word: "delete", usage: DELETE_USAGE, parse: args::delete },
    CommandSpec { word: "find", usage: FIND_USAGE, parse: args::find },
    CommandSpec { word: "list", usage: LIST_USAGE, parse: args::list },
    CommandSpec { word: "clear", usage: CLEAR_USAGE, parse: args::clear },
    CommandSpec { word: "sort-strength", usage: SORT_STRENGTH_USAGE, parse: args::sort_strength },
    CommandSpec { word: "sort-weakness", usage: SORT_WEAKNESS_USAGE, parse: args::sort_weakness },
    CommandSpec { word: "add-strength", usage: ADD_STRENGTH_USAGE, parse: args::add_strength },
    CommandSpec { word: "add-weakness", usage: ADD_WEAKNESS_USAGE, parse: args::add_weakness },
    CommandSpec { word: "add-misc", usage: ADD_MISC_USAGE, parse: args::add_misc },
    CommandSpec { word: "delete-strength", usage: DELETE_STRENGTH_USAGE, parse: args::delete_strength },
    CommandSpec { word: "delete-weakness", usage: DELETE_WEAKNESS_USAGE, parse: args::delete_weakness },
    CommandSpec { word: "delete-misc", usage: DELETE_MISC_USAGE, parse: args::delete_misc },
    CommandSpec { word: "add-task", usage: ADD_TASK_USAGE, parse: args::add_task },
    CommandSpec { word: "delete-task", usage: DELETE_TASK_USAGE, parse: args::delete_task },
    CommandSpec { word: "clear-task", usage: CLEAR_TASK_USAGE, parse: args::clear_task },
    CommandSpec { word: "sort-date", usage: SORT_DATE_USAGE, parse: args::sort_date },
    CommandSpec { word: "load-court", usage: LOAD_COURT_USAGE, parse: args::load_court },
    CommandSpec { word: "help", usage: HELP_USAGE, parse: args::help },
    CommandSpec { word: "exit", usage: EXIT_USAGE, parse: args::exit },
];

/// 首次使用时建立，之后只读
static REGISTRY: Lazy<HashMap<&'static str, &'static CommandSpec>> =
    Lazy::new(|| COMMANDS.iter().map(|spec| (spec.word, spec)).collect());

pub fn lookup(word: &str) -> Option<&'static CommandSpec> {
    REGISTRY.get(word).copied()
}

/// 所有命令词，按注册顺序
pub fn command_words() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|spec| spec.word)
}

/// 唯一入口：把一行输入解析为命令
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let (word, rest) = split_command_word(input)?;

    let spec = lookup(word).ok_or_else(|| {
        debug!("未知命令词: {:?}", word);
        ParseError::UnknownCommand(word.to_string())
    })?;

    debug!("dispatch '{}' with args {:?}", spec.word, rest);
    (spec.parse)(rest)
}
