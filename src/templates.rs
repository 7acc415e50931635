//! Built-in template sources.

use serde::Serialize;
use std::fmt::Display;

/// Identifies one of the templates shipped with pkgseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Ci,
    Readme,
    License,
    Library,
    GitAttributes,
    Cli,
    GitIgnore,
    NpmIgnore,
}

impl TemplateId {
    /// Template name handed to the renderer, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::Ci => "travis.yml",
            TemplateId::Readme => "readme.md.j2",
            TemplateId::License => "license.md",
            TemplateId::Library => "index.js",
            TemplateId::GitAttributes => "gitattributes.j2",
            TemplateId::Cli => "bin/cli",
            TemplateId::GitIgnore => "gitignore.j2",
            TemplateId::NpmIgnore => "npmignore",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            TemplateId::Ci => include_str!("../templates/travis.yml"),
            TemplateId::Readme => include_str!("../templates/readme.md.j2"),
            TemplateId::License => include_str!("../templates/license.md"),
            TemplateId::Library => include_str!("../templates/index.js"),
            TemplateId::GitAttributes => include_str!("../templates/gitattributes.j2"),
            TemplateId::Cli => include_str!("../templates/bin/cli"),
            TemplateId::GitIgnore => include_str!("../templates/gitignore.j2"),
            TemplateId::NpmIgnore => include_str!("../templates/npmignore"),
        }
    }

    /// Whether the rendered file must be executable.
    pub fn executable(&self) -> bool {
        matches!(self, TemplateId::Cli)
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
