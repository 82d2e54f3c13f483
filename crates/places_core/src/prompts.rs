use std::collections::VecDeque;

pub const TITLE_PROMPT: &str = r#"Name for this place? (e.g., "Home", "Vacation spot")"#;
pub const NOTES_PROMPT: &str = "Any notes for this place? (years lived, favorite restaurant, etc.)";
pub const RESET_CONFIRMATION: &str = "Reset will remove all saved locations. Continue?";

/// Synchronous "ask the user" capability.
///
/// `ask_text` returns `None` when the user cancels. Implementations may block
/// (terminal, native dialog) or answer from a script.
pub trait Prompter {
    fn ask_text(&mut self, message: &str, default: &str) -> Option<String>;
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers prompts from pre-recorded queues and remembers what was asked.
///
/// An exhausted text queue behaves like a cancel; an exhausted confirm queue
/// declines.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    text_answers: VecDeque<Option<String>>,
    confirm_answers: VecDeque<bool>,
    asked: Vec<String>,
    text_defaults: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.text_answers.push_back(Some(text.into()));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.text_answers.push_back(None);
        self
    }

    pub fn confirm_with(mut self, confirmed: bool) -> Self {
        self.confirm_answers.push_back(confirmed);
        self
    }

    /// Messages in the order they were asked, text prompts and confirmations alike.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Defaults offered by each text prompt, in order.
    pub fn asked_defaults(&self) -> &[String] {
        &self.text_defaults
    }

    pub fn remaining_text_answers(&self) -> usize {
        self.text_answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, message: &str, default: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.text_defaults.push(default.to_string());
        self.text_answers.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }
}
