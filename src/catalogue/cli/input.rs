use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompting over any reader/writer pair.
///
/// Every read returns `Ok(None)` once input is exhausted, which the shell
/// treats as a request to leave.
pub struct Prompter<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line verbatim, minus its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
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

    /// Prompts until the answer parses as a number.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.errors, "\tEnter a number please.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}
