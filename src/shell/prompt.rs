//! Line-oriented console prompting

use std::io::{BufRead, Write};

use crate::error::{InventoryError, InventoryResult};

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a prompt and read one line, without its line ending
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> InventoryResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| InventoryError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| InventoryError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| InventoryError::Io(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    /// Like `prompt`, with surrounding whitespace removed
    pub fn prompt_trimmed(&mut self, prompt: &str) -> InventoryResult<Option<String>> {
        Ok(self.prompt(prompt)?.map(|answer| answer.trim().to_string()))
    }

    /// Write one line of output
    pub fn say(&mut self, message: impl std::fmt::Display) -> InventoryResult<()> {
        writeln!(self.output, "{}", message).map_err(|e| InventoryError::Io(e.to_string()))
    }

    /// Consume the prompter, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_ending_and_echoes_prompt() {
        let mut prompter = Prompter::new(Cursor::new(" 1\r\nnext\n"), Vec::new());

        assert_eq!(prompter.prompt("Nombre: ").unwrap().as_deref(), Some(" 1"));
        assert_eq!(prompter.prompt("Precio: ").unwrap().as_deref(), Some("next"));
        assert_eq!(prompter.prompt("Unidades: ").unwrap(), None);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Nombre: Precio: Unidades: ");
    }

    #[test]
    fn test_prompt_trimmed() {
        let mut prompter = Prompter::new(Cursor::new("  Shoe \r\n"), Vec::new());
        assert_eq!(
            prompter.prompt_trimmed("Nombre: ").unwrap().as_deref(),
            Some("Shoe")
        );
        assert_eq!(prompter.prompt_trimmed("Precio: ").unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.prompt("Talla: ").unwrap().as_deref(), Some(""));
        assert_eq!(prompter.prompt("Talla: ").unwrap(), None);
    }
}
