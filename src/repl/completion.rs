use log::debug;
use reedline::{Completer, Span, Suggestion};

use crate::command::parser::command_words;

/// 命令词补全器
pub struct CmdPromptCompleter;

/// 以 `input` 开头的所有命令词
pub fn matching_words(input: &str) -> Vec<&'static str> {
    command_words().filter(|word| word.starts_with(input)).collect()
}

impl Completer for CmdPromptCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let current_input = line.get(..pos).unwrap_or(line).trim_start();

        // 只补全第一个词，参数部分不补全
        if current_input.contains(char::is_whitespace) {
            debug!("光标不在命令词上，返回空建议。");
            return Vec::new();
        }

        let start = pos - current_input.len();
        let suggestions: Vec<Suggestion> = matching_words(current_input)
            .into_iter()
            .map(|word| Suggestion {
                value: word.to_string(),
                span: Span { start, end: pos },
                append_whitespace: true,
                ..Default::default()
            })
            .collect();

        debug!("'{}' 的补全建议数量: {}", current_input, suggestions.len());
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_by_prefix() {
        assert_eq!(matching_words("delete-"), ["delete-strength", "delete-weakness", "delete-misc", "delete-task"]);
        assert!(matching_words("zzz").is_empty());
    }

    #[test]
    fn no_suggestions_after_the_command_word() {
        let mut completer = CmdPromptCompleter;
        assert!(completer.complete("delete 1", 8).is_empty());

        let suggestions = completer.complete("sort-", 5);
        let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["sort-strength", "sort-weakness", "sort-date"]);
        assert_eq!(suggestions[0].span, Span { start: 0, end: 5 });
    }
}
