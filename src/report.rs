//! Results of a scaffolding run, kept as values so callers can inspect them.

use crate::constants::exit_codes;
use crate::output;
use crate::templates::DefaultArtifact;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntryKind::Folder => "Folder",
            EntryKind::File => "File",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Created,
    /// Something with that name was already there; nothing was touched.
    AlreadyExists,
    Failed(String),
}

/// What happened to one requested file or folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub kind: EntryKind,
    pub path: PathBuf,
    pub outcome: ItemOutcome,
}

impl ItemReport {
    pub fn is_created(&self) -> bool {
        self.outcome == ItemOutcome::Created
    }

    /// Prints the report as one colorized line.
    pub fn print(&self) {
        let name = self.path.file_name().unwrap_or_default().to_string_lossy();
        match &self.outcome {
            ItemOutcome::Created => output::success(&format!("{} created: {name}", self.kind)),
            ItemOutcome::AlreadyExists => {
                output::warning(&format!("{} skipped, already exists: {name}", self.kind))
            }
            ItemOutcome::Failed(e) => {
                output::error(&format!("{} not created ({name}): {e}", self.kind))
            }
        }
    }
}

/// Everything a completed run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub defaults: Vec<DefaultArtifact>,
    pub items: Vec<ItemReport>,
    pub warnings: Vec<String>,
}

impl ScaffoldReport {
    pub fn created(&self) -> impl Iterator<Item = &ItemReport> {
        self.items.iter().filter(|item| item.is_created())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(ScaffoldReport),
    /// The user declined to replace an existing project folder.
    Aborted,
}

impl Outcome {
    /// Declining the overwrite is a normal ending, not a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed(_) | Outcome::Aborted => exit_codes::SUCCESS,
        }
    }
}
