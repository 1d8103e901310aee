use crate::{
    constants::{MAX_DESCENT_DEPTH, TREE_PREVIEW_DEPTH},
    error::Result,
    ioutils, output,
    prompt::{self, PromptProvider, TextPromptConfig},
    report::{EntryKind, ItemOutcome, ItemReport},
    tree::render_tree,
    validation::{parse_names, validate_entry_names},
};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// One entry of the builder menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderAction {
    CreateFolder,
    CreateFile,
    Preview,
    Finish,
}

impl BuilderAction {
    pub const ALL: [BuilderAction; 4] = [
        BuilderAction::CreateFolder,
        BuilderAction::CreateFile,
        BuilderAction::Preview,
        BuilderAction::Finish,
    ];
}

impl Display for BuilderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BuilderAction::CreateFolder => "📁 Folder",
            BuilderAction::CreateFile => "📄 File",
            BuilderAction::Preview => "👁 Preview",
            BuilderAction::Finish => "✅ Finish",
        };
        write!(f, "{s}")
    }
}

/// What the builder did, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildLog {
    pub items: Vec<ItemReport>,
    pub warnings: Vec<String>,
    /// Number of times a directory tree was shown.
    pub trees_shown: usize,
}

impl BuildLog {
    fn warn(&mut self, message: String) {
        output::warning(&message);
        log::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Interactive loop that adds files and folders below a directory.
///
/// Descending into a new folder pushes a frame; finishing pops one. The loop ends
/// once the frame it started with is finished.
pub struct Builder<'a, P: PromptProvider + ?Sized> {
    prompter: &'a P,
    max_depth: usize,
}

impl<'a, P: PromptProvider + ?Sized> Builder<'a, P> {
    pub fn new(prompter: &'a P) -> Self {
        Self { prompter, max_depth: MAX_DESCENT_DEPTH }
    }

    /// Limits how many frames may be open at once, the starting one included.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn run(&self, root: &Path) -> Result<BuildLog> {
        let mut build_log = BuildLog::default();
        let mut frames: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(current) = frames.last().cloned() {
            show_current_tree(&current, &mut build_log);

            let action = prompt::select(
                self.prompter,
                &format!("What do you want to create in {}?", current.display()),
                &BuilderAction::ALL,
                BuilderAction::CreateFolder,
            )?;
            log::debug!("Builder action in {}: {action:?}", current.display());

            let kind = match action {
                BuilderAction::Finish => {
                    frames.pop();
                    continue;
                }
                // Shown again at the top of the loop.
                BuilderAction::Preview => continue,
                BuilderAction::CreateFolder => EntryKind::Folder,
                BuilderAction::CreateFile => EntryKind::File,
            };

            let names = self.ask_names(kind)?;
            if names.is_empty() {
                continue;
            }

            let reports = create_entries(&current, kind, &names);
            for report in &reports {
                report.print();
            }

            let descend_target = match (kind, reports.as_slice()) {
                (EntryKind::Folder, [only]) if only.is_created() => Some(only.path.clone()),
                _ => None,
            };
            build_log.items.extend(reports);

            if let Some(target) = descend_target {
                if frames.len() >= self.max_depth {
                    build_log.warn(format!(
                        "Not offering to enter {}: nesting limit of {} folders reached",
                        target.display(),
                        self.max_depth
                    ));
                    continue;
                }
                let name = target.file_name().unwrap_or_default().to_string_lossy();
                if prompt::confirm(self.prompter, &format!("Enter folder '{name}'?"), false)? {
                    frames.push(target);
                }
            }
        }

        Ok(build_log)
    }

    fn ask_names(&self, kind: EntryKind) -> Result<Vec<String>> {
        let label = match kind {
            EntryKind::Folder => "Folder names (comma separated)",
            EntryKind::File => "File names (comma separated)",
        };
        let config = TextPromptConfig::new(label).with_validator(validate_entry_names);
        let input = self.prompter.prompt_text(&config)?;
        Ok(parse_names(&input))
    }
}

/// Creates each of `names` inside `dir`.
///
/// Existing entries are skipped and a failure never stops the remaining names.
pub fn create_entries(dir: &Path, kind: EntryKind, names: &[String]) -> Vec<ItemReport> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            let outcome = if ioutils::exists(&path) {
                ItemOutcome::AlreadyExists
            } else {
                let created = match kind {
                    EntryKind::Folder => ioutils::create_dir(&path),
                    EntryKind::File => ioutils::create_empty_file(&path),
                };
                match created {
                    Ok(()) => ItemOutcome::Created,
                    Err(e) => {
                        log::debug!("Failed to create {}: {e}", path.display());
                        ItemOutcome::Failed(e.to_string())
                    }
                }
            };
            ItemReport { kind, path, outcome }
        })
        .collect()
}

fn show_current_tree(dir: &Path, build_log: &mut BuildLog) {
    match render_tree(dir, Some(TREE_PREVIEW_DEPTH)) {
        Ok(rendered) => {
            output::tree(&format!("📂 {}", dir.display()), &rendered);
            build_log.trees_shown += 1;
        }
        Err(e) => build_log.warn(format!("Cannot show {}: {e}", dir.display())),
    }
}
