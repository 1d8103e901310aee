/// Handles argument parsing and the interactive flow.
pub mod cli;

/// Per-user settings persisted between runs.
pub mod config;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Colorized console messages.
pub mod output;

/// User input and interaction handling.
pub mod prompt;

/// Outcomes of a run, as values.
pub mod report;

/// Built-in default files.
pub mod templates;

/// Directory tree rendering.
pub mod tree;

/// Answer validators
pub mod validation;
