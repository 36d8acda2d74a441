//! 把输入行拆成命令词与参数，并从参数中提取带前缀的字段和序号

use std::collections::HashMap;

use log::debug;

use crate::core::index::Index;
use crate::error::ParseError;

/// 字段前缀标记，例如 `n/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_CONTENT: Prefix = Prefix::new("c/");

/// 拆出命令词与其余部分；空行返回 `EmptyInput`
pub fn split_command_word(line: &str) -> Result<(&str, &str), ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    match trimmed.find(char::is_whitespace) {
        Some(pos) => Ok((&trimmed[..pos], trimmed[pos..].trim())),
        None => Ok((trimmed, "")),
    }
}

/// 只接受纯十进制数字且大于 0 的序号 (`+1`、`-1`、`0`、`1a` 都不行)
pub fn parse_index(token: &str) -> Result<Index, ParseError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex(token.to_string()));
    }

    token
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(token.to_string()))
}

/// `tokenize` 的结果：前导文本 + 每个前缀按出现顺序收集的取值
#[derive(Debug, Default)]
pub struct ArgMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// 同一前缀出现多次时取最后一次
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|all| all.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

/// 扫描 `args` 中出现的前缀标记。
///
/// 标记只在开头或空白之后才算数 (`abc/n/x` 中的 `n/` 不是标记)，
/// 每个取值延伸到下一个标记或行尾，两端空白去掉一次。
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgMultimap {
    let mut marks: Vec<(usize, Prefix)> = Vec::new();
    let mut after_whitespace = true;
    let mut skip_until = 0;

    for (pos, ch) in args.char_indices() {
        if pos >= skip_until && after_whitespace {
            if let Some(prefix) = prefixes.iter().find(|p| args[pos..].starts_with(p.as_str())) {
                marks.push((pos, *prefix));
                skip_until = pos + prefix.as_str().len();
            }
        }
        after_whitespace = ch.is_whitespace();
    }

    let preamble_end = marks.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in marks.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = marks.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    debug!("tokenize: preamble={:?}, fields={}", map.preamble, marks.len());
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Prefix] = &[PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, PREFIX_DATE];

    #[test]
    fn split_separates_word_and_trimmed_remainder() {
        assert_eq!(split_command_word("  delete   3  ").unwrap(), ("delete", "3"));
        assert_eq!(split_command_word("list").unwrap(), ("list", ""));
        assert_eq!(
            split_command_word("add-strength\t2  Note  Stub").unwrap(),
            ("add-strength", "2  Note  Stub")
        );
    }

    #[test]
    fn split_rejects_blank_lines() {
        assert_eq!(split_command_word(""), Err(ParseError::EmptyInput));
        assert_eq!(split_command_word(" \t "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn index_accepts_positive_integers_only() {
        assert_eq!(parse_index("1").unwrap().one_based(), 1);
        assert_eq!(parse_index(" 12 ").unwrap().one_based(), 12);
        for bad in ["0", "-1", "+1", "abc", "1a", "", "99999999999999999999999"] {
            assert!(
                matches!(parse_index(bad), Err(ParseError::InvalidIndex(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn tokenize_without_prefixes_is_all_preamble() {
        let map = tokenize("  some text  ", ALL);
        assert_eq!(map.preamble(), "some text");
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn tokenize_collects_values_up_to_next_prefix() {
        let map = tokenize("1 n/Amy  Bee p/123 t/a t/b", ALL);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy  Bee"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123"));
        assert_eq!(map.all_values(PREFIX_TAG), ["a", "b"]);
        assert!(map.all_values(PREFIX_DATE).is_empty());
    }

    #[test]
    fn repeated_single_field_keeps_last_value() {
        let map = tokenize("n/first n/second", ALL);
        assert_eq!(map.value(PREFIX_NAME), Some("second"));
        assert_eq!(map.all_values(PREFIX_NAME).len(), 2);
    }

    #[test]
    fn prefix_inside_a_word_is_not_a_marker() {
        let map = tokenize("n/Amy a/n/b", &[PREFIX_NAME, PREFIX_ADDRESS]);
        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
        assert_eq!(map.value(PREFIX_ADDRESS), Some("n/b"));
    }

    #[test]
    fn empty_value_is_kept() {
        let map = tokenize("t/", ALL);
        assert_eq!(map.all_values(PREFIX_TAG), [""]);
        assert!(map.contains_all(&[PREFIX_TAG]));
    }
}
