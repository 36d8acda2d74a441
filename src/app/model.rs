use std::path::PathBuf;

use chrono::NaiveDate;

use crate::core::{keywords::PersonFilter, note::NoteKind, person::Person, task::Task};

/// 命令执行时能看到的模型接口
///
/// 序号都是相对于当前显示的列表 (过滤/排序之后)，越界检查由命令自己完成。
pub trait Model {
    /// 当前显示的球员，按显示顺序
    fn displayed_persons(&self) -> Vec<&Person>;

    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person);

    /// 用 `edited` 替换 `target`
    fn set_person(&mut self, target: &Person, edited: Person);

    fn delete_person(&mut self, target: &Person);

    fn clear_persons(&mut self);

    fn update_person_filter(&mut self, filter: PersonFilter);

    /// 按某类笔记数量从多到少排序 (稳定排序)
    fn sort_persons_by_notes(&mut self, kind: NoteKind);

    fn tasks(&self) -> &[Task];

    fn add_task(&mut self, task: Task);

    fn delete_task(&mut self, position: usize) -> Task;

    /// 删除某天的所有任务，返回删除的数量
    fn clear_tasks_on(&mut self, date: NaiveDate) -> usize;

    /// 按名字查找球场图片，找不到返回 None
    fn find_court(&self, name: &str) -> Option<PathBuf>;

    fn set_court(&mut self, path: PathBuf);
}
