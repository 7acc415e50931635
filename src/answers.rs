//! The answer record consumed by the derivation engine.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Babel transforms a generated package can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginId {
    AsyncToGenerator,
    Es2015Destructuring,
    Es2015FunctionName,
    Es2015ModulesCommonjs,
    Es2015Parameters,
    Es2015Spread,
    Es2015StickyRegex,
    Es2015UnicodeRegex,
}

impl PluginId {
    /// Every plugin, in the order they are offered to the user.
    pub const ALL: [PluginId; 8] = [
        PluginId::AsyncToGenerator,
        PluginId::Es2015Destructuring,
        PluginId::Es2015FunctionName,
        PluginId::Es2015ModulesCommonjs,
        PluginId::Es2015Parameters,
        PluginId::Es2015Spread,
        PluginId::Es2015StickyRegex,
        PluginId::Es2015UnicodeRegex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluginId::AsyncToGenerator => "async-to-generator",
            PluginId::Es2015Destructuring => "es2015-destructuring",
            PluginId::Es2015FunctionName => "es2015-function-name",
            PluginId::Es2015ModulesCommonjs => "es2015-modules-commonjs",
            PluginId::Es2015Parameters => "es2015-parameters",
            PluginId::Es2015Spread => "es2015-spread",
            PluginId::Es2015StickyRegex => "es2015-sticky-regex",
            PluginId::Es2015UnicodeRegex => "es2015-unicode-regex",
        }
    }
}

impl Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Splits a comma-separated keyword string into trimmed, non-empty keywords.
///
/// An empty or blank input yields no keywords at all.
pub fn split_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keywords {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<Keywords>::deserialize(deserializer)? {
        Some(Keywords::Joined(joined)) => split_keywords(&joined),
        Some(Keywords::List(list)) => list,
        None => Vec::new(),
    })
}

fn default_transform() -> bool {
    true
}

/// One completed round of answers.
///
/// Built once per run by the collector and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_keywords")]
    pub keywords: Vec<String>,
    #[serde(rename = "transform", default = "default_transform")]
    pub transform_enabled: bool,
    #[serde(rename = "plugins", default)]
    pub transform_plugins: Vec<PluginId>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(rename = "ci", default)]
    pub wants_ci: bool,
    #[serde(rename = "cli", default)]
    pub wants_cli: bool,
}

impl AnswerRecord {
    /// Creates a record for `name` with every other answer at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            transform_enabled: default_transform(),
            transform_plugins: Vec::new(),
            is_private: false,
            wants_ci: false,
            wants_cli: false,
        }
    }

    /// Builds a validated record from the collector's answer map.
    pub fn from_answers(answers: serde_json::Value) -> Result<Self> {
        let mut record: AnswerRecord = serde_json::from_value(answers)?;
        let mut seen = Vec::with_capacity(record.transform_plugins.len());
        record.transform_plugins.retain(|plugin| {
            if seen.contains(plugin) {
                false
            } else {
                seen.push(*plugin);
                true
            }
        });
        record.validate()?;
        Ok(record)
    }

    /// Rejects records the derivation engine must never see.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError("package name must not be empty".into()));
        }
        Ok(())
    }

    /// Plugins that take effect. Empty whenever the transform step is disabled.
    pub fn plugins(&self) -> &[PluginId] {
        if self.transform_enabled {
            &self.transform_plugins
        } else {
            &[]
        }
    }

    /// The record as a template context, keyed like the collected answers.
    pub fn to_context(&self) -> serde_json::Value {
        let plugins: Vec<&str> = self.plugins().iter().map(PluginId::as_str).collect();
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "keywords": self.keywords,
            "transform": self.transform_enabled,
            "plugins": plugins,
            "private": self.is_private,
            "ci": self.wants_ci,
            "cli": self.wants_cli,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_and_trims_keywords() {
        assert_eq!(split_keywords("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_keyword_string_yields_no_keywords() {
        assert!(split_keywords("").is_empty());
        assert!(split_keywords("   ").is_empty());
        assert_eq!(split_keywords("a,,b, "), vec!["a", "b"]);
    }

    #[test]
    fn plugin_ids_match_serde_names() {
        for plugin in PluginId::ALL {
            assert_eq!(serde_json::to_value(plugin).unwrap(), json!(plugin.as_str()));
            let parsed: PluginId = serde_json::from_value(json!(plugin.as_str())).unwrap();
            assert_eq!(parsed, plugin);
        }
    }

    #[test]
    fn from_answers_applies_defaults() {
        let record = AnswerRecord::from_answers(json!({"name": "foo"})).unwrap();
        assert_eq!(record, AnswerRecord::new("foo"));
        assert!(record.transform_enabled);
        assert!(!record.is_private);
    }

    #[test]
    fn from_answers_accepts_joined_or_listed_keywords() {
        let joined =
            AnswerRecord::from_answers(json!({"name": "foo", "keywords": "x , y"})).unwrap();
        assert_eq!(joined.keywords, vec!["x", "y"]);

        let listed =
            AnswerRecord::from_answers(json!({"name": "foo", "keywords": ["x y"]})).unwrap();
        assert_eq!(listed.keywords, vec!["x y"]);

        let null =
            AnswerRecord::from_answers(json!({"name": "foo", "keywords": null})).unwrap();
        assert!(null.keywords.is_empty());
    }

    #[test]
    fn from_answers_deduplicates_plugins_in_order() {
        let record = AnswerRecord::from_answers(json!({
            "name": "foo",
            "plugins": ["es2015-spread", "async-to-generator", "es2015-spread"]
        }))
        .unwrap();
        assert_eq!(
            record.transform_plugins,
            vec![PluginId::Es2015Spread, PluginId::AsyncToGenerator]
        );
    }

    #[test]
    fn from_answers_rejects_blank_name() {
        let err = AnswerRecord::from_answers(json!({"name": "  "})).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn from_answers_rejects_unknown_plugin() {
        let err = AnswerRecord::from_answers(json!({"name": "foo", "plugins": ["nope"]}))
            .unwrap_err();
        assert!(matches!(err, Error::JSONParseError(_)));
    }

    #[test]
    fn context_round_trips_through_from_answers() {
        let mut record = AnswerRecord::new("foo");
        record.keywords = vec!["a".into(), "b".into()];
        record.transform_plugins = vec![PluginId::Es2015Parameters];
        record.wants_cli = true;
        assert_eq!(AnswerRecord::from_answers(record.to_context()).unwrap(), record);
    }

    #[test]
    fn plugins_are_ignored_without_transform() {
        let mut record = AnswerRecord::new("foo");
        record.transform_plugins = vec![PluginId::Es2015Spread];
        assert_eq!(record.plugins(), &[PluginId::Es2015Spread]);

        record.transform_enabled = false;
        assert!(record.plugins().is_empty());
    }
}
