//! Line-oriented prompting with retry on malformed input

use dsc_engine::command::{parse_integer, parse_value};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

/// Why a prompt could not produce an answer
#[derive(Error, Debug)]
pub enum PromptError {
    /// End of input reached; the session should wind down quietly
    #[error("input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Reads answers from `input`, writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (tests inspect it)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line
    pub fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed);
        }
        trace!("Read line {:?}", line.trim_end());
        Ok(line.trim().to_string())
    }

    /// Integer answer, re-prompting until one parses
    pub fn read_integer(&mut self, prompt: &str) -> PromptResult<i64> {
        let mut prompt = prompt;
        loop {
            let line = self.read_line(prompt)?;
            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(_) => prompt = "Invalid input. Please enter an integer: ",
            }
        }
    }

    /// Numeric answer, re-prompting until one parses
    pub fn read_value(&mut self, prompt: &str) -> PromptResult<f64> {
        let mut prompt = prompt;
        loop {
            let line = self.read_line(prompt)?;
            match parse_value(&line) {
                Ok(value) => return Ok(value),
                Err(_) => prompt = "Invalid input. Please enter a number: ",
            }
        }
    }

    /// Yes/no answer; only `y` (any case) counts as yes
    pub fn confirm(&mut self, prompt: &str) -> PromptResult<bool> {
        let line = self.read_line(prompt)?;
        Ok(line.eq_ignore_ascii_case("y"))
    }

    /// Ask how many numbers, then read that many
    ///
    /// A count of zero or less yields an empty list.
    pub fn read_values(&mut self, count_prompt: &str, purpose: &str) -> PromptResult<Vec<f64>> {
        let count = self.read_integer(count_prompt)?;
        if count <= 0 {
            return Ok(Vec::new());
        }

        self.say(format!("Please enter {} numbers{}:", count, purpose))?;
        let mut values = Vec::new();
        for i in 1..=count {
            values.push(self.read_value(&format!("Enter number {}: ", i))?);
        }
        Ok(values)
    }
}
