//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Replays prepared answers, for tests and automation
//!
//! The helpers below map typed menus onto the index-based interfaces so callers
//! never deal with raw indices.

use crate::error::Result;
use std::fmt::Display;

pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    dialoguer::DialoguerPrompter::new()
}

/// Asks for one of `options` and returns the chosen value.
pub fn select<T, P>(provider: &P, prompt: &str, options: &[T], default: T) -> Result<T>
where
    T: Copy + PartialEq + Display,
    P: SingleChoicePrompter + ?Sized,
{
    let config = SingleChoiceConfig {
        prompt: prompt.to_string(),
        choices: options.iter().map(ToString::to_string).collect(),
        default_index: options.iter().position(|option| *option == default),
    };
    let index = provider.prompt_single_choice(&config)?;
    Ok(options[index])
}

/// Asks for any subset of `options`; `preselected` decides the initial checks.
pub fn multi_select<T, P>(
    provider: &P,
    prompt: &str,
    options: &[T],
    preselected: impl Fn(&T) -> bool,
) -> Result<Vec<T>>
where
    T: Copy + Display,
    P: MultipleChoicePrompter + ?Sized,
{
    let config = MultipleChoiceConfig {
        prompt: prompt.to_string(),
        choices: options.iter().map(ToString::to_string).collect(),
        defaults: options.iter().map(preselected).collect(),
    };
    let mut indices = provider.prompt_multiple_choice(&config)?;
    indices.sort_unstable();
    indices.dedup();
    Ok(indices.into_iter().map(|i| options[i]).collect())
}

pub fn confirm<P>(provider: &P, prompt: &str, default: bool) -> Result<bool>
where
    P: ConfirmationPrompter + ?Sized,
{
    provider.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompter;
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl Display for Color {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{self:?}")
        }
    }

    const COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    #[test]
    fn select_maps_index_to_value() {
        let prompter = ScriptedPrompter::new().select(2);
        let chosen = select(&prompter, "Color", &COLORS, Color::Red).unwrap();
        assert_eq!(chosen, Color::Blue);
    }

    #[test]
    fn multi_select_keeps_menu_order() {
        let prompter = ScriptedPrompter::new().multi_select(&[2, 0, 2]);
        let chosen = multi_select(&prompter, "Colors", &COLORS, |_| false).unwrap();
        assert_eq!(chosen, vec![Color::Red, Color::Blue]);
    }

    #[test]
    fn confirm_passes_answer_through() {
        let prompter = ScriptedPrompter::new().confirm(true);
        assert!(confirm(&prompter, "Sure?", false).unwrap());
    }
}
