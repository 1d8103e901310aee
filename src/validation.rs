//! Answer validators for names typed by the user.

use crate::constants::{FORBIDDEN_NAME_CHARS, NAME_SEPARATOR};

/// Returns the first forbidden character in `name`, if any.
pub fn find_forbidden_char(name: &str) -> Option<char> {
    name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c))
}

fn forbidden_message(name: &str, c: char) -> String {
    let listed: String = FORBIDDEN_NAME_CHARS
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("'{name}' contains '{c}'. Names cannot contain any of: {listed}")
}

/// Project names must be non-blank and free of forbidden characters.
pub fn validate_project_name(input: &str) -> Result<(), String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("'{name}' is not a folder name"));
    }
    match find_forbidden_char(name) {
        Some(c) => Err(forbidden_message(name, c)),
        None => Ok(()),
    }
}

/// Splits a comma separated list of names, trimming each and dropping empties.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(NAME_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Every name in a comma separated list must be free of forbidden characters.
pub fn validate_entry_names(input: &str) -> Result<(), String> {
    for name in parse_names(input) {
        if let Some(c) = find_forbidden_char(&name) {
            return Err(forbidden_message(&name, c));
        }
    }
    Ok(())
}
