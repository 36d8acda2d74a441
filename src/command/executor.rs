use log::{info, warn};

use crate::{
    app::model::Model,
    command::{
        definition::{Command, CommandResult},
        parser::COMMANDS,
    },
    core::{
        index::Index, keywords::PersonFilter, note::NoteKind, person::Person, task::DATE_FORMAT,
    },
    error::CommandError,
};

pub const MESSAGE_EXIT: &str = "Exiting coachbook as requested ...";

/// 执行一个已解析的命令。序号越界在这里检查，而不是在解析阶段。
pub fn execute(cmd: &Command, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
    info!("执行 {}", cmd.word());

    let result = match cmd {
        Command::Add(person) => {
            if model.has_person(person) {
                return Err(CommandError::DuplicatePerson);
            }
            model.add_person(person.clone());
            CommandResult::new(format!("New person added: {person}"))
        }

        Command::Edit { index, descriptor } => {
            let target = person_at(model, *index)?;
            let edited = descriptor.apply_to(&target);
            if !target.is_same_person(&edited) && model.has_person(&edited) {
                return Err(CommandError::DuplicatePerson);
            }
            model.set_person(&target, edited.clone());
            model.update_person_filter(PersonFilter::All);
            CommandResult::new(format!("Edited Person: {edited}"))
        }

        Command::Delete(index) => {
            let target = person_at(model, *index)?;
            model.delete_person(&target);
            CommandResult::new(format!("Deleted Person: {target}"))
        }

        Command::Find { names, tags } => {
            model.update_person_filter(PersonFilter::Matching {
                names: names.clone(),
                tags: tags.clone(),
            });
            let shown = model.displayed_persons().len();
            CommandResult::new(format!("{shown} persons listed!"))
        }

        Command::List => {
            model.update_person_filter(PersonFilter::All);
            CommandResult::new("Listed all persons")
        }

        Command::Clear => {
            model.clear_persons();
            CommandResult::new("All players have been cleared!")
        }

        Command::Exit => CommandResult::new(MESSAGE_EXIT),

        Command::Help => CommandResult::new(help_text()),

        Command::SortStrength => {
            model.sort_persons_by_notes(NoteKind::Strength);
            CommandResult::new("Sorted persons by number of strengths")
        }

        Command::SortWeakness => {
            model.sort_persons_by_notes(NoteKind::Weakness);
            CommandResult::new("Sorted persons by number of weaknesses")
        }

        // 任务按日期排序尚未实现，解析可以成功但执行时明确报告
        Command::SortTasksByDate => return Err(CommandError::NotImplemented("sort-date")),

        Command::AddNote { kind, index, note } => {
            let target = person_at(model, *index)?;
            let mut edited = target.clone();
            edited.notes_mut(*kind).push(note.clone());
            model.set_person(&target, edited);
            CommandResult::new(format!(
                "Added {} to {}: {note}",
                kind.label(),
                target.name.as_str()
            ))
        }

        Command::DeleteNote {
            kind,
            index,
            note_index,
        } => {
            let target = person_at(model, *index)?;
            let notes = target.notes(*kind);
            if note_index.zero_based() >= notes.len() {
                return Err(CommandError::IndexOutOfRange {
                    list: "note",
                    index: note_index.one_based(),
                });
            }
            let mut edited = target.clone();
            let removed = edited.notes_mut(*kind).remove(note_index.zero_based());
            model.set_person(&target, edited);
            CommandResult::new(format!(
                "Deleted {} from {}: {removed}",
                kind.label(),
                target.name.as_str()
            ))
        }

        Command::AddTask(task) => {
            model.add_task(task.clone());
            CommandResult::new(format!("New task added: {task}"))
        }

        Command::DeleteTask(index) => {
            if index.zero_based() >= model.tasks().len() {
                return Err(CommandError::IndexOutOfRange {
                    list: "task",
                    index: index.one_based(),
                });
            }
            let removed = model.delete_task(index.zero_based());
            CommandResult::new(format!("Deleted Task: {removed}"))
        }

        Command::ClearTask(date) => {
            let removed = model.clear_tasks_on(*date);
            CommandResult::new(format!(
                "Cleared {removed} task(s) on {}",
                date.format(DATE_FORMAT)
            ))
        }

        Command::LoadCourt(name) => {
            let path = model.find_court(name).ok_or_else(|| {
                warn!("找不到球场图片: {}", name);
                CommandError::CourtNotFound(name.clone())
            })?;
            info!("  -> 加载球场图片 {:?}", path);
            model.set_court(path);
            CommandResult::new(format!("Loaded court: {name}"))
        }
    };

    Ok(result)
}

/// 取当前显示列表中的第 `index` 个球员 (克隆一份)
fn person_at(model: &dyn Model, index: Index) -> Result<Person, CommandError> {
    model
        .displayed_persons()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or(CommandError::IndexOutOfRange {
            list: "person",
            index: index.one_based(),
        })
}

/// 所有命令的用法，按注册顺序
pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    for spec in COMMANDS {
        text.push('\n');
        text.push_str(spec.usage);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{config::AppConfig, state::AppState},
        command::parser::parse,
    };

    fn run(state: &mut AppState, line: &str) -> Result<CommandResult, CommandError> {
        parse(line).expect("line should parse").execute(state)
    }

    fn state() -> AppState {
        let mut state = AppState::new(&AppConfig::default());
        run(&mut state, "add n/Alice Pauline p/94351253 e/alice@example.com a/123 Jurong West t/friends").unwrap();
        run(&mut state, "add n/Benson Meier p/98765432 e/johnd@example.com a/311 Clementi Ave 2").unwrap();
        state
    }

    fn names(state: &AppState) -> Vec<String> {
        state
            .displayed_persons()
            .iter()
            .map(|p| p.name.as_str().to_string())
            .collect()
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let mut state = state();
        let err = run(&mut state, "add n/Alice Pauline p/111 e/a@example.com a/Elsewhere").unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
        assert_eq!(state.person_count(), 2);
    }

    #[test]
    fn delete_checks_range_at_execution() {
        let mut state = state();
        let err = run(&mut state, "delete 3").unwrap_err();
        assert_eq!(
            err,
            CommandError::IndexOutOfRange {
                list: "person",
                index: 3
            }
        );

        run(&mut state, "delete 1").unwrap();
        assert_eq!(names(&state), ["Benson Meier"]);
    }

    #[test]
    fn indices_follow_the_filtered_list() {
        let mut state = state();
        let result = run(&mut state, "find n/benson").unwrap();
        assert_eq!(result.feedback, "1 persons listed!");

        run(&mut state, "delete 1").unwrap();
        run(&mut state, "list").unwrap();
        assert_eq!(names(&state), ["Alice Pauline"]);
    }

    #[test]
    fn edit_keeps_notes_and_rejects_name_clash() {
        let mut state = state();
        run(&mut state, "add-strength 1 Quick first step").unwrap();
        run(&mut state, "edit 1 p/99999999 t/").unwrap();

        let alice = state.displayed_persons()[0].clone();
        assert_eq!(alice.phone.as_str(), "99999999");
        assert!(alice.tags.is_empty());
        assert_eq!(alice.notes(NoteKind::Strength).len(), 1);

        let err = run(&mut state, "edit 2 n/Alice Pauline").unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
    }

    #[test]
    fn notes_are_added_and_deleted_by_index() {
        let mut state = state();
        run(&mut state, "add-weakness 2 Weak left hand").unwrap();
        run(&mut state, "add-weakness 2 Late on rotations").unwrap();

        let err = run(&mut state, "delete-weakness 2 3").unwrap_err();
        assert_eq!(err, CommandError::IndexOutOfRange { list: "note", index: 3 });

        let result = run(&mut state, "delete-weakness 2 1").unwrap();
        assert!(result.feedback.contains("Weak left hand"));
        let benson = state.displayed_persons()[1].clone();
        let left: Vec<&str> = benson.notes(NoteKind::Weakness).iter().map(|n| n.as_str()).collect();
        assert_eq!(left, ["Late on rotations"]);
    }

    #[test]
    fn sort_strength_puts_most_notes_first() {
        let mut state = state();
        run(&mut state, "add-strength 2 Rebounding").unwrap();
        run(&mut state, "sort-strength").unwrap();
        assert_eq!(names(&state), ["Benson Meier", "Alice Pauline"]);
    }

    #[test]
    fn sort_date_is_not_implemented() {
        let mut state = state();
        assert_eq!(
            run(&mut state, "sort-date").unwrap_err(),
            CommandError::NotImplemented("sort-date")
        );
    }

    #[test]
    fn task_commands() {
        let mut state = state();
        run(&mut state, "add-task d/10-10-2022 c/Scout the opponents").unwrap();
        run(&mut state, "add-task d/10-10-2022 c/Film session").unwrap();
        run(&mut state, "add-task d/12-10-2022 c/Book the gym").unwrap();

        let result = run(&mut state, "clear-task d/10-10-2022").unwrap();
        assert_eq!(result.feedback, "Cleared 2 task(s) on 10-10-2022");

        assert!(run(&mut state, "delete-task 2").is_err());
        run(&mut state, "delete-task 1").unwrap();
        assert!(state.tasks().is_empty());
    }

    #[test]
    fn load_court_resolves_at_execution() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("basketball.png"), b"png").unwrap();
        let mut state = AppState::new(&AppConfig {
            court_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        });

        assert_eq!(
            run(&mut state, "load-court volleyball").unwrap_err(),
            CommandError::CourtNotFound("volleyball".to_string())
        );
        run(&mut state, "load-court basketball").unwrap();
        assert_eq!(state.court, Some(dir.path().join("basketball.png")));
    }

    #[test]
    fn help_lists_every_command() {
        let text = help_text();
        for spec in COMMANDS {
            assert!(text.contains(spec.usage), "{}", spec.word);
        }
    }

    #[test]
    fn clear_empties_the_book() {
        let mut state = state();
        run(&mut state, "clear").unwrap();
        assert!(state.displayed_persons().is_empty());
    }
}
