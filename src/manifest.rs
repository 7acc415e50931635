//! Derivation of the `package.json` manifest from an answer record.

use crate::{
    answers::AnswerRecord,
    constants::manifest::*,
    error::Result,
    rule_set::RuleSet,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identity written into `author`, `homepage` and `repository`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default = "default_author_name")]
    pub name: String,
    #[serde(default = "default_author_email")]
    pub email: String,
    /// GitHub account owning the generated repository.
    #[serde(default = "default_github_owner")]
    pub github: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            email: default_author_email(),
            github: default_github_owner(),
        }
    }
}

impl Author {
    fn identity(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

fn default_author_name() -> String {
    DEFAULT_AUTHOR_NAME.to_string()
}

fn default_author_email() -> String {
    DEFAULT_AUTHOR_EMAIL.to_string()
}

fn default_github_owner() -> String {
    DEFAULT_GITHUB_OWNER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scripts {
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepublish: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engines {
    pub node: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BabelConfig {
    pub plugins: Vec<String>,
}

/// The generated project manifest.
///
/// Field declaration order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub scripts: Scripts,
    pub homepage: String,
    pub author: String,
    pub repository: String,
    pub license: String,
    pub engines: Engines,
    pub main: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub babel: Option<BabelConfig>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

impl Manifest {
    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// npm package name of a Babel transform plugin.
pub fn plugin_package_name(plugin: &str) -> String {
    format!("{PLUGIN_PACKAGE_PREFIX}{plugin}")
}

/// Builds manifests for one author under one rule set.
pub struct ManifestBuilder {
    author: Author,
    rule_set: RuleSet,
}

impl ManifestBuilder {
    pub fn new(author: Author, rule_set: RuleSet) -> Self {
        Self { author, rule_set }
    }

    pub fn build(&self, answers: &AnswerRecord) -> Manifest {
        let name = answers.name.clone();
        let transform = answers.transform_enabled;
        let plugins: Vec<String> =
            answers.plugins().iter().map(|plugin| plugin.to_string()).collect();

        let scripts = Scripts {
            test: TEST_SCRIPT.to_string(),
            build: transform.then(|| BUILD_SCRIPT.to_string()),
            prepublish: transform.then(|| format!("npm run {BUILD_SCRIPT_KEY}")),
        };

        let dev_dependencies = transform.then(|| {
            plugins
                .iter()
                .map(|plugin| {
                    (plugin_package_name(plugin), PLUGIN_VERSION_RANGE.to_string())
                })
                .collect::<IndexMap<_, _>>()
        });

        Manifest {
            homepage: format!("https://github.com/{}/{name}", self.author.github),
            repository: format!("{}/{name}", self.author.github),
            name,
            version: INITIAL_VERSION.to_string(),
            description: answers.description.clone(),
            scripts,
            author: self.author.identity(),
            license: LICENSE.to_string(),
            engines: Engines { node: self.rule_set.node_engine().to_string() },
            main: if transform { BUILD_MAIN } else { SOURCE_MAIN }.to_string(),
            keywords: answers.keywords.clone(),
            files: transform.then(|| vec![BUILD_DIR.to_string()]),
            private: self.rule_set.is_private(answers),
            babel: transform.then(|| BabelConfig { plugins }),
            dev_dependencies,
        }
    }
}

/// Builds a manifest with the default author identity.
pub fn build_manifest(answers: &AnswerRecord, rule_set: RuleSet) -> Manifest {
    ManifestBuilder::new(Author::default(), rule_set).build(answers)
}
