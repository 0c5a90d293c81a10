//! Yes/no prompts on the terminal

use std::io::{BufRead, Write};
use umh_table::Confirm;

/// Asks on `output` and reads the answer from `input`.
///
/// Only "y" or "yes" (any case) accepts. End of input or an I/O error
/// counts as a refusal.
pub struct LineConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LineConfirm<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if let Err(err) = write!(self.output, "{} [y/N] ", message).and_then(|_| self.output.flush())
        {
            tracing::warn!("Failed to write prompt: {}", err);
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                tracing::warn!("Failed to read answer: {}", err);
                false
            }
        }
    }
}
