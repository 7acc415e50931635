//! Collects one completed answer record from predefined answers and prompts.

use crate::{
    answers::{split_keywords, AnswerRecord, PluginId},
    constants::{validation, STDIN_INDICATOR},
    error::{Error, Result},
    prompt::{ConfirmationConfig, MultipleChoiceConfig, PromptProvider, TextPromptConfig},
    renderer::TemplateRenderer,
    rule_set::RuleSet,
};
use serde_json::{json, Map, Value};

/// How a question is asked and what kind of answer it produces.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    Text,
    /// Comma-separated text stored as a list of keywords.
    Keywords,
    Confirm,
    MultiSelect(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Validation {
    pub condition: String,
    pub error_message: String,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            condition: validation::DEFAULT_CONDITION.to_string(),
            error_message: validation::INVALID_ANSWER.to_string(),
        }
    }
}

/// A single question asked by the collector.
#[derive(Debug, Clone)]
pub struct Question {
    /// Answer key, matching the fields of [`AnswerRecord`].
    pub key: &'static str,
    pub help: String,
    pub kind: QuestionKind,
    pub default: Value,
    /// Expression over the answers so far; the question is skipped when false.
    pub ask_if: String,
    pub validation: Validation,
}

impl Question {
    fn new(key: &'static str, help: &str, kind: QuestionKind, default: Value) -> Self {
        Self {
            key,
            help: help.to_string(),
            kind,
            default,
            ask_if: String::new(),
            validation: Validation::default(),
        }
    }

    fn ask_if(mut self, expr: &str) -> Self {
        self.ask_if = expr.to_string();
        self
    }

    fn validate(mut self, condition: String, error_message: &str) -> Self {
        self.validation = Validation { condition, error_message: error_message.to_string() };
        self
    }
}

/// The ordered questions asked under `rule_set`.
///
/// `default_name` is offered as the package name, usually the base name of
/// the destination directory.
pub fn questions(rule_set: RuleSet, default_name: &str) -> Vec<Question> {
    let plugins = PluginId::ALL.iter().map(|plugin| plugin.to_string()).collect();

    let mut questions = vec![
        Question::new("name", "Package name", QuestionKind::Text, json!(default_name))
            .validate(
                format!("name | regex('{}')", validation::NAME_PATTERN),
                "'{{ name }}' is not a valid package name",
            ),
        Question::new("description", "Description", QuestionKind::Text, json!("")),
        Question::new(
            "keywords",
            "Package keywords (comma-separated)",
            QuestionKind::Keywords,
            json!([]),
        ),
        Question::new("transform", "Add Babel functionality", QuestionKind::Confirm, json!(true)),
        Question::new(
            "plugins",
            "What plugins should I include?",
            QuestionKind::MultiSelect(plugins),
            json!([]),
        )
        .ask_if("transform"),
    ];

    if rule_set.asks_visibility() {
        questions.push(Question::new(
            "private",
            "Private package?",
            QuestionKind::Confirm,
            json!(false),
        ));
        questions.push(
            Question::new("ci", "Add Travis CI configuration?", QuestionKind::Confirm, json!(false))
                .ask_if("not private"),
        );
    }

    questions.push(Question::new("cli", "Add a CLI?", QuestionKind::Confirm, json!(false)));
    questions
}

/// Collects answers from command line arguments and user prompts
pub struct AnswerCollector<'a> {
    engine: &'a dyn TemplateRenderer,
    provider: &'a dyn PromptProvider,
    non_interactive: bool,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        provider: &'a dyn PromptProvider,
        non_interactive: bool,
    ) -> Self {
        Self { engine, provider, non_interactive }
    }

    /// Read content from a reader into a string.
    fn read_from(&self, mut reader: impl std::io::Read) -> Result<String> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Collects one answer record.
    ///
    /// Predefined answers (`cli_answers`, a JSON object or `-` for stdin) are
    /// taken as given; every other question is prompted for, or takes its
    /// default when skipped or when running non-interactively.
    pub fn collect_answers(
        &self,
        questions: &[Question],
        cli_answers: Option<String>,
    ) -> Result<AnswerRecord> {
        let mut answers = Map::new();

        if let Some(answers_arg) = cli_answers {
            let answers_str = if answers_arg == STDIN_INDICATOR {
                self.read_from(std::io::stdin())?
            } else {
                answers_arg
            };
            answers.extend(self.parse_string_to_json(answers_str)?);
        }

        for question in questions {
            if answers.contains_key(question.key) {
                log::debug!("Using predefined answer for '{}'", question.key);
            } else if self.should_ask(question, &answers) {
                self.ask_until_valid(&mut answers, question)?;
                continue;
            } else {
                answers.insert(question.key.to_string(), question.default.clone());
            }

            self.validate_answer(question, &answers).map_err(Error::ValidationError)?;
        }

        log::debug!("Collected answers: {}", Value::Object(answers.clone()));
        AnswerRecord::from_answers(Value::Object(answers))
    }

    fn should_ask(&self, question: &Question, answers: &Map<String, Value>) -> bool {
        if self.non_interactive {
            return false;
        }
        self.engine
            .execute_expression(&question.ask_if, &Value::Object(answers.clone()))
            .unwrap_or(true)
    }

    fn ask_until_valid(
        &self,
        answers: &mut Map<String, Value>,
        question: &Question,
    ) -> Result<()> {
        loop {
            let answer = self.ask(question)?;
            answers.insert(question.key.to_string(), answer);

            match self.validate_answer(question, answers) {
                Ok(()) => return Ok(()),
                Err(msg) => println!("{msg}"),
            }
        }
    }

    fn ask(&self, question: &Question) -> Result<Value> {
        let prompt = question.help.clone();
        let answer = match &question.kind {
            QuestionKind::Text => {
                let default = question.default.as_str().map(String::from);
                json!(self.provider.prompt_text(&TextPromptConfig { prompt, default })?)
            }
            QuestionKind::Keywords => {
                let input =
                    self.provider.prompt_text(&TextPromptConfig { prompt, default: None })?;
                json!(split_keywords(&input))
            }
            QuestionKind::Confirm => {
                let default = question.default.as_bool().unwrap_or(false);
                json!(self
                    .provider
                    .prompt_confirmation(&ConfirmationConfig { prompt, default })?)
            }
            QuestionKind::MultiSelect(choices) => {
                let selected: Vec<&str> = question
                    .default
                    .as_array()
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str)
                    .collect();
                let defaults =
                    choices.iter().map(|choice| selected.contains(&choice.as_str())).collect();
                let indices = self.provider.prompt_multiple_choice(&MultipleChoiceConfig {
                    prompt,
                    choices: choices.clone(),
                    defaults,
                })?;
                json!(indices
                    .into_iter()
                    .filter_map(|i| choices.get(i).cloned())
                    .collect::<Vec<_>>())
            }
        };
        Ok(answer)
    }

    /// Checks the question's validation expression against the answers so far.
    fn validate_answer(
        &self,
        question: &Question,
        answers: &Map<String, Value>,
    ) -> Result<(), String> {
        let context = Value::Object(answers.clone());
        let is_valid = self
            .engine
            .execute_expression(&question.validation.condition, &context)
            .unwrap_or(true);

        if is_valid {
            return Ok(());
        }
        Err(self
            .engine
            .render(&question.validation.error_message, &context, Some("validation_error"))
            .unwrap_or_else(|_| "Validation failed".to_string()))
    }

    /// Parse a string into a JSON object.
    fn parse_string_to_json(&self, buf: String) -> Result<Map<String, Value>> {
        let value = match serde_json::from_str::<Value>(&buf) {
            Ok(value) => value,
            // Shell invocations sometimes over-escape quotes; retry once unescaped.
            Err(initial_err) if buf.contains("\\\"") => {
                serde_json::from_str(&buf.replace("\\\"", "\""))
                    .map_err(|_| Error::JSONParseError(initial_err))?
            }
            Err(err) => return Err(Error::JSONParseError(err)),
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(Error::Other(anyhow::anyhow!(
                "Predefined answers must be a JSON object, got: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::renderer::new_renderer;

    fn collect(
        provider: &ScriptedPrompter,
        rule_set: RuleSet,
        non_interactive: bool,
        cli_answers: Option<&str>,
    ) -> Result<AnswerRecord> {
        let engine = new_renderer();
        let collector = AnswerCollector::new(&engine, provider, non_interactive);
        collector.collect_answers(
            &questions(rule_set, "my-lib"),
            cli_answers.map(String::from),
        )
    }

    #[test]
    fn question_order_per_rule_set() {
        let keys = |rule_set| -> Vec<&'static str> {
            questions(rule_set, "x").iter().map(|q| q.key).collect()
        };
        assert_eq!(
            keys(RuleSet::V1),
            vec!["name", "description", "keywords", "transform", "plugins", "cli"]
        );
        assert_eq!(
            keys(RuleSet::V2),
            vec![
                "name",
                "description",
                "keywords",
                "transform",
                "plugins",
                "private",
                "ci",
                "cli"
            ]
        );
    }

    #[test]
    fn non_interactive_uses_defaults() {
        let record = collect(&ScriptedPrompter::new(), RuleSet::V2, true, None).unwrap();
        assert_eq!(record, AnswerRecord::new("my-lib"));
    }

    #[test]
    fn prompts_for_every_visible_question() {
        let provider = ScriptedPrompter::new()
            .with_text_response("Package name", "foo")
            .with_text_response("Description", "bar")
            .with_text_response("Package keywords (comma-separated)", "a, b ,c")
            .with_multiple_choice_response("What plugins should I include?", vec![0, 5])
            .with_confirmation_response("Add Travis CI configuration?", true)
            .with_confirmation_response("Add a CLI?", true);

        let record = collect(&provider, RuleSet::V2, false, None).unwrap();
        assert_eq!(record.name, "foo");
        assert_eq!(record.description, "bar");
        assert_eq!(record.keywords, vec!["a", "b", "c"]);
        assert!(record.transform_enabled);
        assert_eq!(
            record.transform_plugins,
            vec![PluginId::AsyncToGenerator, PluginId::Es2015Spread]
        );
        assert!(record.wants_ci);
        assert!(record.wants_cli);
    }

    #[test]
    fn empty_keywords_answer_yields_no_keywords() {
        let provider =
            ScriptedPrompter::new().with_text_response("Package keywords (comma-separated)", "");
        let record = collect(&provider, RuleSet::V1, false, None).unwrap();
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn skips_plugins_without_transform() {
        let provider = ScriptedPrompter::new()
            .with_confirmation_response("Add Babel functionality", false)
            .with_multiple_choice_response("What plugins should I include?", vec![1]);
        let record = collect(&provider, RuleSet::V2, false, None).unwrap();
        assert!(!record.transform_enabled);
        assert!(record.transform_plugins.is_empty());
    }

    #[test]
    fn skips_ci_for_private_packages() {
        let provider = ScriptedPrompter::new()
            .with_confirmation_response("Private package?", true)
            .with_confirmation_response("Add Travis CI configuration?", true);
        let record = collect(&provider, RuleSet::V2, false, None).unwrap();
        assert!(record.is_private);
        assert!(!record.wants_ci);
    }

    #[test]
    fn predefined_answers_are_not_prompted() {
        let provider = ScriptedPrompter::new().with_text_response("Package name", "prompted");
        let record = collect(
            &provider,
            RuleSet::V2,
            false,
            Some(r#"{"name": "given", "keywords": "x, y", "transform": false}"#),
        )
        .unwrap();
        assert_eq!(record.name, "given");
        assert_eq!(record.keywords, vec!["x", "y"]);
        assert!(!record.transform_enabled);
    }

    #[test]
    fn reasks_invalid_names() {
        let provider = ScriptedPrompter::new()
            .with_text_response("Package name", "Not Valid")
            .with_text_response("Package name", "valid-name");
        let record = collect(&provider, RuleSet::V1, false, None).unwrap();
        assert_eq!(record.name, "valid-name");
    }

    #[test]
    fn rejects_invalid_predefined_name() {
        let err =
            collect(&ScriptedPrompter::new(), RuleSet::V1, true, Some(r#"{"name": "Bad Name"}"#))
                .unwrap_err();
        match err {
            Error::ValidationError(msg) => {
                assert_eq!(msg, "'Bad Name' is not a valid package name")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_answers_json() {
        let err = collect(&ScriptedPrompter::new(), RuleSet::V1, true, Some("{not json"))
            .unwrap_err();
        assert!(matches!(err, Error::JSONParseError(_)));
    }

    #[test]
    fn rejects_non_object_answers() {
        let err = collect(&ScriptedPrompter::new(), RuleSet::V1, true, Some("[1, 2]"))
            .unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn parse_string_to_json_handles_escaped_quotes() {
        let engine = new_renderer();
        let provider = ScriptedPrompter::new();
        let collector = AnswerCollector::new(&engine, &provider, true);
        let map = collector.parse_string_to_json("{\\\"foo\\\":\\\"bar\\\"}".to_string()).unwrap();
        assert_eq!(map.get("foo"), Some(&json!("bar")));
    }
}
