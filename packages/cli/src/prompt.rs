//! Confirmation prompts
//!
//! Destructive commands go through this trait so command logic can be
//! exercised in tests without a terminal attached.

use anyhow::Result;
use dialoguer::Confirm;

pub trait Confirmation {
    /// Ask the operator to confirm; returns false when declined
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt backed by dialoguer
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
