//! 每种命令各自的参数解析：输入为命令词之后的部分 (已去掉两端空白)

use std::collections::BTreeSet;

use crate::{
    command::{
        definition::{Command, EditPersonDescriptor},
        tokenizer::{
            parse_index, tokenize, ArgMultimap, Prefix, PREFIX_ADDRESS, PREFIX_CONTENT, PREFIX_DATE,
            PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
        },
        usage::*,
    },
    core::{
        index::Index,
        keywords::{NameContainsKeywords, TagContainsKeywords},
        note::{Note, NoteKind},
        person::{Address, Email, Name, Person, Phone, Tag},
        task::{parse_date, Task},
    },
    error::ParseError,
};

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub type ParseResult = Result<Command, ParseError>;

// 无参数命令：忽略其后的所有内容

pub fn list(_args: &str) -> ParseResult {
    Ok(Command::List)
}

pub fn clear(_args: &str) -> ParseResult {
    Ok(Command::Clear)
}

pub fn exit(_args: &str) -> ParseResult {
    Ok(Command::Exit)
}

pub fn help(_args: &str) -> ParseResult {
    Ok(Command::Help)
}

pub fn sort_strength(_args: &str) -> ParseResult {
    Ok(Command::SortStrength)
}

pub fn sort_weakness(_args: &str) -> ParseResult {
    Ok(Command::SortWeakness)
}

pub fn sort_date(_args: &str) -> ParseResult {
    Ok(Command::SortTasksByDate)
}

// 序号类命令

pub fn delete(args: &str) -> ParseResult {
    single_index(args, DELETE_USAGE).map(Command::Delete)
}

pub fn delete_task(args: &str) -> ParseResult {
    single_index(args, DELETE_TASK_USAGE).map(Command::DeleteTask)
}

pub fn add_strength(args: &str) -> ParseResult {
    add_note(args, NoteKind::Strength, ADD_STRENGTH_USAGE)
}

pub fn add_weakness(args: &str) -> ParseResult {
    add_note(args, NoteKind::Weakness, ADD_WEAKNESS_USAGE)
}

pub fn add_misc(args: &str) -> ParseResult {
    add_note(args, NoteKind::Misc, ADD_MISC_USAGE)
}

pub fn delete_strength(args: &str) -> ParseResult {
    delete_note(args, NoteKind::Strength, DELETE_STRENGTH_USAGE)
}

pub fn delete_weakness(args: &str) -> ParseResult {
    delete_note(args, NoteKind::Weakness, DELETE_WEAKNESS_USAGE)
}

pub fn delete_misc(args: &str) -> ParseResult {
    delete_note(args, NoteKind::Misc, DELETE_MISC_USAGE)
}

fn single_index(args: &str, usage: &'static str) -> Result<Index, ParseError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [token] => index_or_usage(token, usage),
        _ => Err(ParseError::invalid_format(usage)),
    }
}

/// `INDEX NOTE...`：序号之后的整段文本就是笔记内容
fn add_note(args: &str, kind: NoteKind, usage: &'static str) -> ParseResult {
    let (token, body) = match args.find(char::is_whitespace) {
        Some(pos) => (&args[..pos], args[pos..].trim()),
        None => (args, ""),
    };
    let index = index_or_usage(token, usage)?;
    if body.is_empty() {
        return Err(ParseError::invalid_format(usage));
    }

    Ok(Command::AddNote {
        kind,
        index,
        note: Note::parse(body)?,
    })
}

fn delete_note(args: &str, kind: NoteKind, usage: &'static str) -> ParseResult {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [index, note_index] => Ok(Command::DeleteNote {
            kind,
            index: index_or_usage(index, usage)?,
            note_index: index_or_usage(note_index, usage)?,
        }),
        _ => Err(ParseError::invalid_format(usage)),
    }
}

fn index_or_usage(token: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(token).map_err(|_| ParseError::invalid_format(usage))
}

// 前缀字段类命令

pub fn add(args: &str) -> ParseResult {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    if !map.preamble().is_empty()
        || !map.contains_all(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
    {
        return Err(ParseError::invalid_format(ADD_USAGE));
    }

    let name = Name::parse(required(&map, PREFIX_NAME)?)?;
    let phone = Phone::parse(required(&map, PREFIX_PHONE)?)?;
    let email = Email::parse(required(&map, PREFIX_EMAIL)?)?;
    let address = Address::parse(required(&map, PREFIX_ADDRESS)?)?;
    let tags = Tag::parse_all(map.all_values(PREFIX_TAG).iter().map(String::as_str))?;

    Ok(Command::Add(Person::new(name, phone, email, address, tags)))
}

pub fn edit(args: &str) -> ParseResult {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    let index = index_or_usage(map.preamble(), EDIT_USAGE)?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        tags: edited_tags(&map)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::invalid_value(MESSAGE_NOT_EDITED));
    }

    Ok(Command::Edit { index, descriptor })
}

/// 没有 `t/` 时不改标签；只有一个空的 `t/` 时清空标签
fn edited_tags(map: &ArgMultimap) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    let values = map.all_values(PREFIX_TAG);
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => Tag::parse_all(values.iter().map(String::as_str)).map(Some),
    }
}

pub fn find(args: &str) -> ParseResult {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_TAG]);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(FIND_USAGE));
    }

    Ok(Command::Find {
        names: NameContainsKeywords::new(keywords(&map, PREFIX_NAME)),
        tags: TagContainsKeywords::new(keywords(&map, PREFIX_TAG)),
    })
}

fn keywords(map: &ArgMultimap, prefix: Prefix) -> Vec<String> {
    map.all_values(prefix)
        .iter()
        .flat_map(|value| value.split_whitespace())
        .map(str::to_string)
        .collect()
}

// 日期类命令

pub fn add_task(args: &str) -> ParseResult {
    let map = tokenize(args, &[PREFIX_DATE, PREFIX_CONTENT]);
    if !map.preamble().is_empty() || !map.contains_all(&[PREFIX_DATE, PREFIX_CONTENT]) {
        return Err(ParseError::invalid_format(ADD_TASK_USAGE));
    }

    let date = parse_date(required(&map, PREFIX_DATE)?)?;
    let task = Task::new(date, required(&map, PREFIX_CONTENT)?)?;
    Ok(Command::AddTask(task))
}

pub fn clear_task(args: &str) -> ParseResult {
    let map = tokenize(args, &[PREFIX_DATE]);
    if !map.preamble().is_empty() || !map.contains(PREFIX_DATE) {
        return Err(ParseError::invalid_format(CLEAR_TASK_USAGE));
    }

    Ok(Command::ClearTask(parse_date(required(&map, PREFIX_DATE)?)?))
}

// 自由文本

pub fn load_court(args: &str) -> ParseResult {
    let name = args.trim();
    if name.is_empty() {
        return Err(ParseError::invalid_format(LOAD_COURT_USAGE));
    }
    Ok(Command::LoadCourt(name.to_string()))
}

fn required(map: &ArgMultimap, prefix: Prefix) -> Result<&str, ParseError> {
    map.value(prefix).ok_or_else(|| {
        ParseError::invalid_value(format!("Missing value for {}", prefix.as_str()))
    })
}
