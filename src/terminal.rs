//! User-facing terminal input and output
//!
//! Command handlers talk to the user exclusively through the
//! [`Terminal`] trait so tests can capture the conversation. The
//! [`Console`] implementation writes to stdout/stderr and prompts with
//! inquire.

use color_print::{ceprintln, cformat, cprintln};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

/// Highlight an entity name (org, space, quota, user) in output
pub fn entity_name(name: &str) -> String {
    cformat!("<cyan>{}</cyan>", name)
}

/// The conversation a command handler has with the user
pub trait Terminal {
    /// Print one line of output
    fn say(&mut self, text: &str);

    /// Print the success marker after a mutation
    fn ok(&mut self);

    /// Print the failure marker followed by the error message
    fn failed(&mut self, text: &str);

    /// Ask the user to confirm a deletion; anything but an explicit
    /// yes counts as a decline
    fn confirm_delete(&mut self, kind: &str, name: &str) -> bool;

    /// Prompt for one line of input
    fn ask(&mut self, prompt: &str) -> Result<String, TerminalError>;

    /// Prompt for a secret without echoing it
    fn ask_secret(&mut self, prompt: &str) -> Result<String, TerminalError>;
}

/// Interactive terminal backed by stdout/stderr
pub struct Console;

impl Console {
    pub fn new() -> Console {
        Console
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for Console {
    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn ok(&mut self) {
        cprintln!("<green>OK</green>");
        println!();
    }

    fn failed(&mut self, text: &str) {
        ceprintln!("<red>FAILED</red>");
        eprintln!("{}", text);
    }

    fn confirm_delete(&mut self, kind: &str, name: &str) -> bool {
        let prompt = cformat!("Really delete the {} <cyan>{}</cyan>?", kind, name);
        match inquire::Confirm::new(&prompt).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(_) => false,
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, TerminalError> {
        Ok(inquire::Text::new(prompt).prompt()?)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, TerminalError> {
        Ok(inquire::Password::new(prompt)
            .without_confirmation()
            .prompt()?)
    }
}
