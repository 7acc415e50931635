//! Versioned rule sets selecting how answers map to artifacts.

use crate::answers::AnswerRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum RuleSet {
    /// No visibility question, CI config always emitted.
    V1,
    /// Private packages and opt-in CI.
    #[default]
    V2,
}

impl RuleSet {
    /// Minimum Node.js version written to `engines.node`.
    pub fn node_engine(&self) -> &'static str {
        match self {
            RuleSet::V1 => ">=4",
            RuleSet::V2 => ">=6",
        }
    }

    /// Whether the collector asks about visibility and CI.
    pub fn asks_visibility(&self) -> bool {
        matches!(self, RuleSet::V2)
    }

    /// Whether the package is private. V1 never asks, so it is always public.
    pub fn is_private(&self, answers: &AnswerRecord) -> bool {
        match self {
            RuleSet::V1 => false,
            RuleSet::V2 => answers.is_private,
        }
    }

    /// Whether the CI config is written. A private package never gets one.
    pub fn emits_ci(&self, answers: &AnswerRecord) -> bool {
        if self.is_private(answers) {
            return false;
        }
        match self {
            RuleSet::V1 => true,
            RuleSet::V2 => answers.wants_ci,
        }
    }

    /// Whether the readme receives the whole answer record.
    pub fn readme_gets_answers(&self) -> bool {
        matches!(self, RuleSet::V2)
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RuleSet::V1 => "v1",
            RuleSet::V2 => "v2",
        };
        write!(f, "{s}")
    }
}
