pub mod args;
pub mod builder;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args};
pub use builder::{BuildLog, Builder, BuilderAction};
pub use runner::{run, Runner};
