use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse config file '{path}'. Original error: {e}")]
    ConfigParseError { path: String, e: serde_json::Error },

    #[error("Failed to render '{name}'. Original error: {e}")]
    TemplateError { name: String, e: minijinja::Error },

    #[error("Cannot create root directory '{root_dir}'. Original error: {e}")]
    RootDirectoryError { root_dir: String, e: std::io::Error },

    #[error("Cannot use '{root_dir}' as root directory: not a directory.")]
    RootNotADirectoryError { root_dir: String },

    #[error("Cannot create project folder '{project_dir}'. Original error: {e}")]
    ProjectDirectoryError { project_dir: String, e: std::io::Error },

    #[error("Cannot write default file '{path}'. Original error: {e}")]
    DefaultFileError { path: String, e: std::io::Error },

    #[error("Cannot render tree for '{path}'. Original error: {e}")]
    TreeError { path: String, e: walkdir::Error },

    /// A scripted prompter ran out of answers, or was asked a prompt of another kind.
    #[error("Scripted answer unavailable for '{prompt}': {reason}.")]
    ScriptError { prompt: String, reason: String },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", crate::output::error_line(&err.to_string()));
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
