//! Prompt provider that replays a prepared sequence of answers.
//!
//! Answers are consumed strictly in order, one per prompt. Useful for
//! automation, testing, or driving the interactive builder without a terminal.

use super::interface::*;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A single prepared answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    /// Accept the default of a text prompt.
    Default,
    Confirm(bool),
    Select(usize),
    MultiSelect(Vec<usize>),
}

/// What a scripted prompter was asked, in order, with the answer it gave.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub prompt: String,
    pub answer: Answer,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    transcript: RefCell<Vec<Transcript>>,
    rejections: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, value: &str) -> Self {
        self.push(Answer::Text(value.to_string()))
    }

    pub fn accept_default(self) -> Self {
        self.push(Answer::Default)
    }

    pub fn confirm(self, value: bool) -> Self {
        self.push(Answer::Confirm(value))
    }

    pub fn select(self, index: usize) -> Self {
        self.push(Answer::Select(index))
    }

    pub fn multi_select(self, indices: &[usize]) -> Self {
        self.push(Answer::MultiSelect(indices.to_vec()))
    }

    fn push(self, answer: Answer) -> Self {
        self.answers.borrow_mut().push_back(answer);
        self
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    pub fn transcript(&self) -> Vec<Transcript> {
        self.transcript.borrow().clone()
    }

    /// Validation messages produced by rejected text answers.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.answers.borrow_mut().pop_front().ok_or_else(|| Error::ScriptError {
            prompt: prompt.to_string(),
            reason: "no answers left".to_string(),
        })
    }

    fn record(&self, prompt: &str, answer: Answer) {
        log::debug!("Scripted answer for '{prompt}': {answer:?}");
        self.transcript.borrow_mut().push(Transcript { prompt: prompt.to_string(), answer });
    }

    fn mismatch(prompt: &str, expected: &str, got: &Answer) -> Error {
        Error::ScriptError {
            prompt: prompt.to_string(),
            reason: format!("expected {expected} answer, got {got:?}"),
        }
    }
}

impl TextPrompter for ScriptedPrompter {
    /// A rejected answer is recorded and the next one is tried, like a re-prompt.
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        loop {
            let answer = self.next(&config.prompt)?;
            let value = match &answer {
                Answer::Text(value) => value.clone(),
                Answer::Default => config.default.clone().unwrap_or_default(),
                other => return Err(Self::mismatch(&config.prompt, "text", other)),
            };
            self.record(&config.prompt, answer);

            match config.validator.map(|validate| validate(&value)) {
                Some(Err(message)) => self.rejections.borrow_mut().push(message),
                _ => return Ok(value),
            }
        }
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        match self.next(&config.prompt)? {
            Answer::Select(index) if index < config.choices.len() => {
                self.record(&config.prompt, Answer::Select(index));
                Ok(index)
            }
            other => Err(Self::mismatch(&config.prompt, "in-range select", &other)),
        }
    }
}

impl MultipleChoicePrompter for ScriptedPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        match self.next(&config.prompt)? {
            Answer::MultiSelect(indices)
                if indices.iter().all(|&i| i < config.choices.len()) =>
            {
                self.record(&config.prompt, Answer::MultiSelect(indices.clone()));
                Ok(indices)
            }
            other => Err(Self::mismatch(&config.prompt, "in-range multi-select", &other)),
        }
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        match self.next(&config.prompt)? {
            Answer::Confirm(value) => {
                self.record(&config.prompt, Answer::Confirm(value));
                Ok(value)
            }
            other => Err(Self::mismatch(&config.prompt, "confirm", &other)),
        }
    }
}
