//! Interactive selection prompt

use crate::error::{AppError, SelectionError};
use crate::selection::parse_selection;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Question shown to the operator
pub const PROMPT_TEXT: &str = "Enter the numbers, separated by commas you want to kill";

/// Trait for asking the operator which inventory positions to terminate
pub trait SelectionPrompt {
    /// Returns the selected 1-based positions
    ///
    /// `default` is offered as the pre-filled answer when present.
    fn ask(&self, inventory_len: usize, default: Option<&str>) -> Result<Vec<usize>, AppError>;
}

/// Prompt on the controlling terminal
///
/// Invalid answers are reported and the question is asked again.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl SelectionPrompt for TerminalPrompt {
    fn ask(&self, inventory_len: usize, default: Option<&str>) -> Result<Vec<usize>, AppError> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(PROMPT_TEXT)
            .allow_empty(true)
            .validate_with(move |answer: &String| -> Result<(), SelectionError> {
                parse_selection(answer, inventory_len).map(|_| ())
            });
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        let answer = input.interact_text()?;
        Ok(parse_selection(&answer, inventory_len)?)
    }
}
