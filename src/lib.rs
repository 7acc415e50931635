/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// The answer record and its normalisation rules.
pub mod answers;

/// Versioned rule sets.
pub mod rule_set;

/// Derivation of the package manifest.
pub mod manifest;

/// Planning of template outputs.
pub mod plan;

/// Built-in templates.
pub mod templates;

/// Template parsing and rendering functionality.
pub mod renderer;

/// User input and interaction handling.
pub mod prompt;

/// Question flow producing an answer record.
pub mod collector;

/// Writing generated files.
pub mod emitter;

/// Dependency installation.
pub mod install;

/// Generator configuration.
pub mod config;

/// A set of helpers for working with the file system.
pub mod ioutils;
