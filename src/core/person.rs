use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::note::{Note, NoteKind};
use crate::error::ParseError;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and these special characters +_.- \
(not at the start or end), and the domain should end with a label at least 2 characters long";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(ParseError::invalid_value(NAME_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(ParseError::invalid_value(PHONE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ParseError::invalid_value(EMAIL_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::invalid_value(ADDRESS_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !TAG_RE.is_match(trimmed) {
            return Err(ParseError::invalid_value(TAG_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 把多个 `t/` 取值解析为标签集合，重复的标签只保留一个
    pub fn parse_all<'a>(raws: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Tag>, ParseError> {
        raws.into_iter().map(Tag::parse).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 一名球员的联系方式与教练笔记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
    strengths: Vec<Note>,
    weaknesses: Vec<Note>,
    miscs: Vec<Note>,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            miscs: Vec::new(),
        }
    }

    /// 名字相同即视为同一名球员 (用于查重)
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn notes(&self, kind: NoteKind) -> &[Note] {
        match kind {
            NoteKind::Strength => &self.strengths,
            NoteKind::Weakness => &self.weaknesses,
            NoteKind::Misc => &self.miscs,
        }
    }

    pub fn notes_mut(&mut self, kind: NoteKind) -> &mut Vec<Note> {
        match kind {
            NoteKind::Strength => &mut self.strengths,
            NoteKind::Weakness => &mut self.weaknesses,
            NoteKind::Misc => &mut self.miscs,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str()
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::parse("Amy Bee").is_ok());
        assert_eq!(
            Name::parse("   "),
            Err(ParseError::InvalidValue(NAME_CONSTRAINTS.to_string()))
        );
        assert!(Name::parse("peter*").is_err());
    }

    #[test]
    fn phone_needs_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9011p041").is_err());
    }

    #[test]
    fn email_format() {
        assert!(Email::parse("amy@example.com").is_ok());
        assert!(Email::parse("a1+be.d@example1.co").is_ok());
        assert!(Email::parse("peterjack@example-domain.org").is_ok());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("peterjack@").is_err());
        assert!(Email::parse("peterjack@e").is_err());
        assert!(Email::parse("-peterjack@example.com").is_err());
        assert!(Email::parse("peterjack@-example.com").is_err());
    }

    #[test]
    fn tags_collapse_duplicates() {
        let tags = Tag::parse_all(["friends", "friends", "owesMoney"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(Tag::parse_all(["hubby*"]).is_err());
    }

    #[test]
    fn same_person_is_decided_by_name() {
        let amy = Person::new(
            Name::parse("Amy Bee").unwrap(),
            Phone::parse("85355255").unwrap(),
            Email::parse("amy@gmail.com").unwrap(),
            Address::parse("123, Jurong West Ave 6").unwrap(),
            BTreeSet::new(),
        );
        let mut other = amy.clone();
        other.phone = Phone::parse("999").unwrap();
        assert!(amy.is_same_person(&other));
        assert_ne!(amy, other);
    }
}
