//! Colorized, user-facing console messages.
//!
//! These are what the person at the terminal reads. Diagnostics for developers go
//! through the `log` macros instead.

use console::style;

pub fn banner(version: &str) -> String {
    style(format!("\nWelcome to structra v{version}\n")).cyan().bold().to_string()
}

pub fn success_line(message: &str) -> String {
    style(format!("✔ {message}")).green().to_string()
}

pub fn warning_line(message: &str) -> String {
    style(format!("⚠ {message}")).yellow().to_string()
}

pub fn error_line(message: &str) -> String {
    style(format!("✘ {message}")).red().to_string()
}

pub fn heading_line(message: &str) -> String {
    style(message).blue().bold().to_string()
}

pub fn success(message: &str) {
    println!("{}", success_line(message));
}

pub fn warning(message: &str) {
    println!("{}", warning_line(message));
}

pub fn error(message: &str) {
    println!("{}", error_line(message));
}

pub fn tree(title: &str, rendered: &str) {
    println!("\n{}", heading_line(title));
    println!("{rendered}\n");
}
