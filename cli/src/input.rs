use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input {0:?}: please enter integer numbers only")]
    NotAnInteger(String),

    #[error("No input provided for {0}")]
    Missing(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Asks for one operand on `output` and parses the next line of `input`.
pub fn prompt_operand<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<i64, InputError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Enter the {label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Missing(label.to_string()));
    }

    let text = line.trim();
    text.parse()
        .map_err(|_| InputError::NotAnInteger(text.to_string()))
}
