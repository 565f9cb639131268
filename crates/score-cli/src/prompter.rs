//! Terminal implementation of ScorePrompter

use opendag_core::{Result, ScorePrompter};
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Prompter reading lines from `R` and writing prompts to `W`
pub struct CliPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl CliPrompter<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> ScorePrompter for CliPrompter<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn display_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
