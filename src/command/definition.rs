use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::{
    app::model::Model,
    command::executor,
    core::{
        index::Index,
        keywords::{NameContainsKeywords, TagContainsKeywords},
        note::{Note, NoteKind},
        person::{Address, Email, Name, Person, Phone, Tag},
        task::Task,
    },
    error::CommandError,
};

/// 解析完成、可执行的命令。相同种类且参数相同的两个命令相等。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Delete(Index),
    Find {
        names: NameContainsKeywords,
        tags: TagContainsKeywords,
    },
    List,
    Clear,
    Exit,
    Help,
    SortStrength,
    SortWeakness,
    SortTasksByDate,
    AddNote {
        kind: NoteKind,
        index: Index,
        note: Note,
    },
    DeleteNote {
        kind: NoteKind,
        index: Index,
        note_index: Index,
    },
    AddTask(Task),
    DeleteTask(Index),
    ClearTask(NaiveDate),
    LoadCourt(String),
}

impl Command {
    /// 对模型执行一次命令，返回给用户看的结果
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        executor::execute(self, model)
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Edit { .. } => "edit",
            Command::Delete(_) => "delete",
            Command::Find { .. } => "find",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Exit => "exit",
            Command::Help => "help",
            Command::SortStrength => "sort-strength",
            Command::SortWeakness => "sort-weakness",
            Command::SortTasksByDate => "sort-date",
            Command::AddNote { kind: NoteKind::Strength, .. } => "add-strength",
            Command::AddNote { kind: NoteKind::Weakness, .. } => "add-weakness",
            Command::AddNote { kind: NoteKind::Misc, .. } => "add-misc",
            Command::DeleteNote { kind: NoteKind::Strength, .. } => "delete-strength",
            Command::DeleteNote { kind: NoteKind::Weakness, .. } => "delete-weakness",
            Command::DeleteNote { kind: NoteKind::Misc, .. } => "delete-misc",
            Command::AddTask(_) => "add-task",
            Command::DeleteTask(_) => "delete-task",
            Command::ClearTask(_) => "clear-task",
            Command::LoadCourt(_) => "load-court",
        }
    }
}

/// `edit` 中要覆盖的字段；未给出的字段保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// 在 `person` 的基础上应用修改，笔记原样保留
    pub fn apply_to(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            edited.email = email.clone();
        }
        if let Some(address) = &self.address {
            edited.address = address.clone();
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

/// 执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}
