use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch};

use crate::app::{model::Model, state::AppState};

/// 显示球员数与任务数的提示符，每条命令执行后刷新
#[derive(Default)]
pub struct CmdPrompt {
    person_count: usize,
    task_count: usize,
    court: Option<String>,
}

impl CmdPrompt {
    pub fn refresh(&mut self, state: &AppState) {
        self.person_count = state.person_count();
        self.task_count = state.tasks().len();
        self.court = state
            .court
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().to_string());
    }
}

impl Prompt for CmdPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "[{}] players | [{}] tasks",
            self.person_count, self.task_count
        ))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        match &self.court {
            Some(court) => Cow::Owned(format!("court: {court}")),
            None => Cow::Borrowed(""),
        }
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed(" > ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(". ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed(" history search>> ")
    }
}
