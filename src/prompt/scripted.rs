//! Prompt provider answering from a predefined script.
//!
//! Useful for automation and tests: every prompt is answered by the
//! response registered under its prompt text, or by the prompt's default.

use super::interface::*;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    multiple_choice_responses: HashMap<String, Vec<usize>>,
    confirmation_responses: HashMap<String, bool>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text response. Repeated calls for the same prompt answer
    /// successive asks in order.
    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        self.text_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response.to_string());
        self
    }

    pub fn with_multiple_choice_response(
        mut self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        self.multiple_choice_responses.insert(prompt.to_string(), choice_indices);
        self
    }

    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        log::debug!("Auto-answering text prompt '{}' with: '{response}'", config.prompt);
        Ok(response)
    }
}

impl MultipleChoicePrompter for ScriptedPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let response = self
            .multiple_choice_responses
            .get(&config.prompt)
            .cloned()
            .unwrap_or_else(|| {
                config
                    .defaults
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| selected.then_some(i))
                    .collect()
            });

        log::debug!(
            "Auto-answering multiple choice prompt '{}' with options: {response:?}",
            config.prompt
        );
        Ok(response)
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let response = self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default);

        log::debug!("Auto-answering confirmation '{}' with: {response}", config.prompt);
        Ok(response)
    }
}
