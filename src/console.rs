use std::io::{self, BufRead, IsTerminal, Write};

use crate::domain::{Console, Error};

/// Console backed by stdin/stdout. PIN entry is masked through rpassword
/// when stdin is a real terminal; piped input falls back to plain reads.
pub struct Terminal {
    masked: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            masked: io::stdin().is_terminal(),
        }
    }

    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl Console for Terminal {
    fn prompt(&mut self, label: &str) -> Result<String, Error> {
        let mut out = io::stdout();
        write!(out, "{}: ", label)?;
        out.flush()?;
        self.read_line()
    }

    fn prompt_secret(&mut self, label: &str) -> Result<String, Error> {
        if self.masked {
            let secret = rpassword::prompt_password(format!("{}: ", label))?;
            Ok(secret.trim().to_string())
        } else {
            self.prompt(label)
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        let mut out = io::stdout();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Deterministic console for tests: answers prompts from a queue and
/// collects everything written.
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, _label: &str) -> Result<String, Error> {
        self.input.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }

    fn prompt_secret(&mut self, label: &str) -> Result<String, Error> {
        // Tests exercise the unmasked path only.
        self.prompt(label)
    }

    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.output.push(line.to_string());
        Ok(())
    }
}
