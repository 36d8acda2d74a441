use crate::core::person::Person;

/// 名字中任意一个单词与任意关键词相同 (忽略大小写) 即匹配
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        person
            .name
            .as_str()
            .split_whitespace()
            .any(|word| self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word)))
    }
}

/// 任意一个标签与任意关键词相同 (忽略大小写) 即匹配
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagContainsKeywords {
    keywords: Vec<String>,
}

impl TagContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        person
            .tags
            .iter()
            .any(|tag| self.keywords.iter().any(|k| k.eq_ignore_ascii_case(tag.as_str())))
    }
}

/// 当前显示的球员列表所使用的过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    Matching {
        names: NameContainsKeywords,
        tags: TagContainsKeywords,
    },
}

impl PersonFilter {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::Matching { names, tags } => names.test(person) || tags.test(person),
        }
    }
}
