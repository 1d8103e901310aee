//! Constants used throughout structra

/// Name of the per-user configuration file, stored in the home directory.
pub const CONFIG_FILENAME: &str = ".structra-config.json";

/// Characters that are never accepted in file or folder names.
pub const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Separator for entering several names in one input.
pub const NAME_SEPARATOR: char = ',';

/// Depth of the tree shown while building and on preview.
pub const TREE_PREVIEW_DEPTH: usize = 3;

/// Maximum number of nested folders the builder descends into.
pub const MAX_DESCENT_DEPTH: usize = 64;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
