//! Planning of the template outputs for one answer record.

use crate::{answers::AnswerRecord, constants::paths, rule_set::RuleSet, templates::TemplateId};
use serde_json::{json, Map, Value};
use std::path::PathBuf;

/// A directive to render one template to one path.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateInstruction {
    pub template: TemplateId,
    pub destination: PathBuf,
    pub bindings: Map<String, Value>,
    pub emit: bool,
}

impl TemplateInstruction {
    fn new(template: TemplateId, destination: &str) -> Self {
        Self {
            template,
            destination: PathBuf::from(destination),
            bindings: Map::new(),
            emit: true,
        }
    }

    fn bind(mut self, key: &str, value: Value) -> Self {
        self.bindings.insert(key.to_string(), value);
        self
    }

    fn emit_if(mut self, emit: bool) -> Self {
        self.emit = emit;
        self
    }

    /// Bindings as a render context.
    pub fn context(&self) -> Value {
        Value::Object(self.bindings.clone())
    }
}

/// Plans every template output, in a fixed order.
///
/// Instructions that should not be written are still returned, with `emit`
/// cleared, so callers can report what was skipped.
pub fn plan_instructions(
    answers: &AnswerRecord,
    rule_set: RuleSet,
) -> Vec<TemplateInstruction> {
    let mut readme = TemplateInstruction::new(TemplateId::Readme, paths::README)
        .bind("name", json!(answers.name))
        .bind("description", json!(answers.description));
    if rule_set.readme_gets_answers() {
        readme = readme.bind("answers", answers.to_context());
    }

    let library = if answers.transform_enabled {
        paths::LIBRARY_SOURCE
    } else {
        paths::LIBRARY_PLAIN
    };

    vec![
        TemplateInstruction::new(TemplateId::Ci, paths::CI_CONFIG)
            .emit_if(rule_set.emits_ci(answers)),
        readme,
        TemplateInstruction::new(TemplateId::License, paths::LICENSE),
        TemplateInstruction::new(TemplateId::Library, library),
        TemplateInstruction::new(TemplateId::GitAttributes, paths::GIT_ATTRIBUTES)
            .bind("cli", json!(answers.wants_cli)),
        TemplateInstruction::new(TemplateId::Cli, paths::CLI_BIN)
            .emit_if(answers.wants_cli),
        TemplateInstruction::new(TemplateId::GitIgnore, paths::GIT_IGNORE)
            .bind("transform", json!(answers.transform_enabled)),
        TemplateInstruction::new(TemplateId::NpmIgnore, paths::NPM_IGNORE)
            .emit_if(answers.transform_enabled),
    ]
}
