//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Cursor, Write};

use crate::error::{ReleaseError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_command, display_declined, display_error, display_status, display_success,
};

/// Classify a yes/no answer.
///
/// Surrounding whitespace is ignored and case does not matter. Anything
/// starting with `y` is yes, anything starting with `n` is no.
///
/// # Returns
/// * `Some(true)` - "y", "Y", "yes", "YES!"
/// * `Some(false)` - "n", "No", "nope"
/// * `None` - Anything else, including an empty answer
pub fn classify_response(input: &str) -> Option<bool> {
    let response = input.trim().to_lowercase();
    if response.starts_with('y') {
        Some(true)
    } else if response.starts_with('n') {
        Some(false)
    } else {
        None
    }
}

/// Ask a yes/no question until a recognised answer arrives.
///
/// Unrecognised answers print "Invalid response" and ask again. Reaching the
/// end of the input before a valid answer is an error.
pub fn confirm_with<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    loop {
        write!(writer, "\n{} (y/n) ", prompt)?;
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Err(ReleaseError::InputClosed);
        }

        match classify_response(&input) {
            Some(answer) => return Ok(answer),
            None => writeln!(writer, "Invalid response")?,
        }
    }
}

/// Source of answers for confirmation prompts.
pub trait Prompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Asks the user on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        confirm_with(prompt, &mut stdin.lock(), &mut stdout)
    }
}

/// Answers every prompt with yes.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        tracing::info!(prompt, "assuming yes");
        Ok(true)
    }
}

/// Replays canned answers through the same loop as the terminal prompter.
///
/// Everything written to the "terminal" is kept so tests can inspect the
/// prompts and any "Invalid response" lines.
#[derive(Debug)]
pub struct ScriptedPrompter {
    input: Cursor<Vec<u8>>,
    transcript: Vec<u8>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = String::new();
        for answer in answers {
            input.push_str(answer.as_ref());
            input.push('\n');
        }
        ScriptedPrompter {
            input: Cursor::new(input.into_bytes()),
            transcript: Vec::new(),
        }
    }

    /// Everything the prompts printed so far
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.transcript).into_owned()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        confirm_with(prompt, &mut self.input, &mut self.transcript)
    }
}
