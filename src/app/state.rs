use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    app::{config::AppConfig, model::Model},
    core::{keywords::PersonFilter, note::NoteKind, person::Person, task::Task},
};

/// 支持的球场图片扩展名，按优先级排列
pub const COURT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// 内存中的全部数据 (球员、任务、当前球场)
pub struct AppState {
    /// 全部球员，按加入/排序后的顺序
    persons: Vec<Person>,

    /// 当前显示列表的过滤条件
    filter: PersonFilter,

    tasks: Vec<Task>,

    /// 球场图片目录
    court_dir: PathBuf,

    /// 当前加载的球场图片
    pub court: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            persons: Vec::new(),
            filter: PersonFilter::All,
            tasks: Vec::new(),
            court_dir: config.court_dir.clone(),
            court: None,
        }
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }
}

impl Model for AppState {
    fn displayed_persons(&self) -> Vec<&Person> {
        self.persons.iter().filter(|p| self.filter.test(p)).collect()
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    fn add_person(&mut self, person: Person) {
        self.persons.push(person);
        self.filter = PersonFilter::All;
    }

    fn set_person(&mut self, target: &Person, edited: Person) {
        if let Some(pos) = self.persons.iter().position(|p| p == target) {
            self.persons[pos] = edited;
        }
    }

    fn delete_person(&mut self, target: &Person) {
        if let Some(pos) = self.persons.iter().position(|p| p == target) {
            self.persons.remove(pos);
        }
    }

    fn clear_persons(&mut self) {
        self.persons.clear();
        self.filter = PersonFilter::All;
    }

    fn update_person_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    fn sort_persons_by_notes(&mut self, kind: NoteKind) {
        self.persons
            .sort_by(|a, b| b.notes(kind).len().cmp(&a.notes(kind).len()));
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn delete_task(&mut self, position: usize) -> Task {
        self.tasks.remove(position)
    }

    fn clear_tasks_on(&mut self, date: NaiveDate) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.date != date);
        before - self.tasks.len()
    }

    fn find_court(&self, name: &str) -> Option<PathBuf> {
        // 不允许通过名字跳出球场目录
        if name.contains(['/', '\\']) || name == ".." {
            return None;
        }

        COURT_EXTENSIONS
            .iter()
            .map(|ext| self.court_dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }

    fn set_court(&mut self, path: PathBuf) {
        self.court = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::parse_date;

    fn state_with_courts(dir: &std::path::Path) -> AppState {
        AppState::new(&AppConfig {
            court_dir: dir.to_path_buf(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn court_lookup_prefers_png() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("full.jpg"), b"jpg").unwrap();
        std::fs::write(dir.path().join("full.png"), b"png").unwrap();
        std::fs::write(dir.path().join("half.jpeg"), b"jpeg").unwrap();

        let state = state_with_courts(dir.path());
        assert_eq!(state.find_court("full"), Some(dir.path().join("full.png")));
        assert_eq!(state.find_court("half"), Some(dir.path().join("half.jpeg")));
        assert_eq!(state.find_court("missing"), None);
        assert_eq!(state.find_court("../full"), None);
    }

    #[test]
    fn clear_tasks_on_only_removes_that_day() {
        let mut state = state_with_courts(std::path::Path::new("courts"));
        let day = parse_date("10-10-2022").unwrap();
        state.add_task(Task::new(day, "Scout").unwrap());
        state.add_task(Task::new(parse_date("11-10-2022").unwrap(), "Gym").unwrap());
        state.add_task(Task::new(day, "Film").unwrap());

        assert_eq!(state.clear_tasks_on(day), 2);
        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.tasks()[0].contents, "Gym");
    }
}
