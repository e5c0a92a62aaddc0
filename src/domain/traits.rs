use crate::domain::Error;

/// Interactive I/O port for the session. The production implementation
/// talks to the terminal; tests substitute a scripted console so the whole
/// flow runs deterministically without a TTY.
pub trait Console {
    /// Prints `label` as a prompt and reads one trimmed line.
    fn prompt(&mut self, label: &str) -> Result<String, Error>;

    /// Like `prompt`, but masks the typed input when the execution
    /// environment supports it.
    fn prompt_secret(&mut self, label: &str) -> Result<String, Error>;

    fn write_line(&mut self, line: &str) -> Result<(), Error>;
}
