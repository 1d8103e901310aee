use crate::{
    cli::{builder::Builder, Args},
    config::{ConfigStore, Configuration},
    error::{Error, Result},
    ioutils, output,
    prompt::{self, PromptProvider, TextPromptConfig},
    report::{Outcome, ScaffoldReport},
    templates::{DefaultArtifact, TemplateSet},
    tree::render_tree,
    validation::validate_project_name,
};
use std::path::{Path, PathBuf};

/// Orchestrates one scaffolding session from root path to final tree.
pub struct Runner<'a, P: PromptProvider + ?Sized> {
    prompter: &'a P,
    store: ConfigStore,
    home_dir: PathBuf,
    templates: TemplateSet,
}

impl<'a, P: PromptProvider + ?Sized> Runner<'a, P> {
    pub fn new(prompter: &'a P, store: ConfigStore) -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { prompter, store, home_dir, templates: TemplateSet::new() }
    }

    /// Overrides the directory used as default root and for `~` expansion.
    pub fn with_home_dir<D: Into<PathBuf>>(mut self, home_dir: D) -> Self {
        self.home_dir = home_dir.into();
        self
    }

    /// Executes the complete scaffolding workflow
    pub fn run(&self) -> Result<Outcome> {
        let mut warnings = Vec::new();

        let config = self.load_config(&mut warnings);
        let root = self.resolve_root(&config)?;
        self.save_config(config, &root, &mut warnings);

        let name = self.ask_project_name()?;
        let project_dir = root.join(&name);

        if ioutils::exists(&project_dir) && !self.replace_existing(&project_dir)? {
            output::warning(&format!("Left {} untouched.", project_dir.display()));
            return Ok(Outcome::Aborted);
        }
        self.create_project_dir(&project_dir)?;

        let defaults = self.select_defaults()?;
        self.write_defaults(&project_dir, &name, &defaults)?;

        let mut items = Vec::new();
        if prompt::confirm(self.prompter, "Add more files and folders?", true)? {
            let build_log = Builder::new(self.prompter).run(&project_dir)?;
            items = build_log.items;
            warnings.extend(build_log.warnings);
        }

        self.render_final_tree(&project_dir, &mut warnings);

        Ok(Outcome::Completed(ScaffoldReport { project_dir, defaults, items, warnings }))
    }

    /// Loads the saved configuration; a broken file only costs a warning.
    fn load_config(&self, warnings: &mut Vec<String>) -> Configuration {
        self.store.load().unwrap_or_else(|e| {
            warn(warnings, format!("Could not read settings, using defaults: {e}"));
            Configuration::default()
        })
    }

    fn save_config(&self, config: Configuration, root: &Path, warnings: &mut Vec<String>) {
        let config = config.with_last_path(root.to_string_lossy());
        if let Err(e) = self.store.save(&config) {
            warn(warnings, format!("Could not save settings: {e}"));
        }
    }

    /// Asks for the root directory and makes sure it exists.
    fn resolve_root(&self, config: &Configuration) -> Result<PathBuf> {
        // A blank saved path would silently resolve to the working directory.
        let default = config
            .last_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| self.home_dir.to_string_lossy().to_string());

        let input = self.prompter.prompt_text(
            &TextPromptConfig::new("📁 Where should the project be created? (path)")
                .with_default(default.clone()),
        )?;
        let input = input.trim();
        let root = self.expand_home(if input.is_empty() { &default } else { input });
        log::debug!("Resolved root directory: {}", root.display());

        if !ioutils::exists(&root) {
            ioutils::create_dir_all(&root).map_err(|e| Error::RootDirectoryError {
                root_dir: root.display().to_string(),
                e,
            })?;
            output::success(&format!("Created directory {}", root.display()));
        } else if !root.is_dir() {
            return Err(Error::RootNotADirectoryError { root_dir: root.display().to_string() });
        }

        Ok(root)
    }

    fn expand_home(&self, input: &str) -> PathBuf {
        match input.strip_prefix('~') {
            Some("") => self.home_dir.clone(),
            Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => {
                self.home_dir.join(&rest[1..])
            }
            _ => PathBuf::from(input),
        }
    }

    fn ask_project_name(&self) -> Result<String> {
        let name = self.prompter.prompt_text(
            &TextPromptConfig::new("📝 Project name").with_validator(validate_project_name),
        )?;
        Ok(name.trim().to_string())
    }

    /// Asks before deleting an existing project folder; deletes it on yes.
    fn replace_existing(&self, project_dir: &Path) -> Result<bool> {
        let replace = prompt::confirm(
            self.prompter,
            &format!("{} already exists. Delete it and start over?", project_dir.display()),
            false,
        )?;
        if replace {
            ioutils::remove_dir_all(project_dir).map_err(|e| Error::ProjectDirectoryError {
                project_dir: project_dir.display().to_string(),
                e,
            })?;
            log::info!("Removed existing {}", project_dir.display());
        }
        Ok(replace)
    }

    fn create_project_dir(&self, project_dir: &Path) -> Result<()> {
        ioutils::create_dir(project_dir).map_err(|e| Error::ProjectDirectoryError {
            project_dir: project_dir.display().to_string(),
            e,
        })?;
        output::success(&format!("Project created: {}", project_dir.display()));
        Ok(())
    }

    fn select_defaults(&self) -> Result<Vec<DefaultArtifact>> {
        prompt::multi_select(
            self.prompter,
            "📄 Default files to create",
            &DefaultArtifact::ALL,
            |artifact| artifact.preselected(),
        )
    }

    fn write_defaults(
        &self,
        project_dir: &Path,
        name: &str,
        defaults: &[DefaultArtifact],
    ) -> Result<()> {
        for &artifact in defaults {
            let target = project_dir.join(artifact.relative_path());
            let content = self.templates.render(artifact, name, defaults)?;
            ioutils::write_file(&content, &target).map_err(|e| Error::DefaultFileError {
                path: target.display().to_string(),
                e,
            })?;
            output::success(&format!("{} created", artifact.relative_path()));
        }
        Ok(())
    }

    fn render_final_tree(&self, project_dir: &Path, warnings: &mut Vec<String>) {
        match render_tree(project_dir, None) {
            Ok(rendered) => output::tree("📂 Project structure:", &rendered),
            Err(e) => warn(warnings, format!("Cannot show {}: {e}", project_dir.display())),
        }
    }
}

fn warn(warnings: &mut Vec<String>, message: String) {
    output::warning(&message);
    log::warn!("{message}");
    warnings.push(message);
}

/// Main entry point for CLI execution
pub fn run(_args: Args) -> Result<i32> {
    println!("{}", output::banner(env!("CARGO_PKG_VERSION")));

    let prompter = prompt::get_prompt_provider();
    let store = ConfigStore::from_home();
    log::debug!("Using settings file {}", store.path().display());

    let outcome = Runner::new(&prompter, store).run()?;
    match &outcome {
        Outcome::Completed(report) => log::info!(
            "Finished {}: {} default file(s), {} extra entr(ies) created",
            report.project_dir.display(),
            report.defaults.len(),
            report.created().count()
        ),
        Outcome::Aborted => log::info!("Aborted by user"),
    }
    Ok(outcome.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::ScriptedPrompter;

    fn runner<'a>(prompter: &'a ScriptedPrompter, home: &Path) -> Runner<'a, ScriptedPrompter> {
        Runner::new(prompter, ConfigStore::new(home.join("settings.json"))).with_home_dir(home)
    }

    #[test]
    fn expands_tilde_against_home() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = ScriptedPrompter::new();
        let runner = runner(&prompter, tmp.path());

        assert_eq!(runner.expand_home("~"), tmp.path());
        assert_eq!(runner.expand_home("~/work"), tmp.path().join("work"));
        assert_eq!(runner.expand_home("~work"), PathBuf::from("~work"));
        assert_eq!(runner.expand_home("/abs"), PathBuf::from("/abs"));
    }

    #[test]
    fn root_defaults_to_home_without_saved_path() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = ScriptedPrompter::new().accept_default();
        let runner = runner(&prompter, tmp.path());

        let root = runner.resolve_root(&Configuration::default()).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn blank_saved_path_falls_back_to_home() {
        let tmp = tempfile::tempdir().unwrap();
        for saved in ["", "   "] {
            let prompter = ScriptedPrompter::new().accept_default();
            let runner = runner(&prompter, tmp.path());

            let root = runner.resolve_root(&Configuration::default().with_last_path(saved)).unwrap();
            assert_eq!(root, tmp.path());
        }
    }

    #[test]
    fn missing_root_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("a/b/c");
        let prompter = ScriptedPrompter::new().text(&wanted.to_string_lossy());
        let runner = runner(&prompter, tmp.path());

        let root = runner.resolve_root(&Configuration::default()).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn file_as_root_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("file");
        std::fs::write(&file, "").unwrap();
        let prompter = ScriptedPrompter::new().text(&file.to_string_lossy());
        let runner = runner(&prompter, tmp.path());

        let result = runner.resolve_root(&Configuration::default());
        assert!(matches!(result, Err(Error::RootNotADirectoryError { .. })));
    }

    #[test]
    fn project_name_is_trimmed_and_reprompted() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = ScriptedPrompter::new().text("   ").text("a|b").text("  demo ");
        let runner = runner(&prompter, tmp.path());

        assert_eq!(runner.ask_project_name().unwrap(), "demo");
        assert_eq!(prompter.rejections().len(), 2);
    }
}
