use std::io::{self, Write};

use crate::error::{Result, WavCueError};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn ask(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompts on stdout and reads one answer line from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn ask(&mut self, prompt: &str) -> Result<bool> {
        print!("{}", prompt);
        io::stdout().flush().map_err(|source| WavCueError::IoFailure {
            target: "stdout".to_string(),
            source,
        })?;

        let mut answer = String::new();
        io::stdin()
            .read_line(&mut answer)
            .map_err(|source| WavCueError::IoFailure {
                target: "stdin".to_string(),
                source,
            })?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers every question the same way without touching the terminal.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn ask(&mut self, prompt: &str) -> Result<bool> {
        log::warn!("{} answered {} automatically", prompt.trim(), self.0);
        Ok(self.0)
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    answer == "y" || answer == "yes"
}
