use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use structra::cli::Runner;
use structra::config::ConfigStore;
use structra::constants::CONFIG_FILENAME;
use structra::error::Result;
use structra::prompt::scripted::ScriptedPrompter;
use structra::report::Outcome;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A throwaway home directory plus a not yet existing root for projects.
pub struct Sandbox {
    _tmp: TempDir,
    pub home: PathBuf,
    pub root: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("home");
        fs::create_dir(&home).unwrap();
        let root = tmp.path().join("work");
        Self { _tmp: tmp, home, root }
    }

    pub fn root_str(&self) -> String {
        self.root.to_string_lossy().to_string()
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.home.join(CONFIG_FILENAME))
    }

    /// Runs a full session answering from `prompter`.
    pub fn run(&self, prompter: &ScriptedPrompter) -> Result<Outcome> {
        Runner::new(prompter, self.store()).with_home_dir(&self.home).run()
    }
}

fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints which files differ between the generated and the expected tree.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in actual_files.difference(&expected_files) {
        println!("  + {:?}", file);
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {:?}", file);
    }
    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let expected_content = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if actual_content != expected_content {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual_content}");
            println!("  --- Expected content:\n{expected_content}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold the same files with the same contents.
pub fn assert_same_tree<A: AsRef<Path>, E: AsRef<Path>>(actual: A, expected: E) {
    let (actual, expected) = (actual.as_ref(), expected.as_ref());
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
