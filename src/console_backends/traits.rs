use std::fmt::Display;
use std::path::PathBuf;

use miette::Result;

/// The base of every terminal backend: a setup/teardown pair.
pub trait TerminalBackend {
    /// Initialize the terminal backend.
    fn setup(&mut self) -> Result<()>;

    /// Clean up the terminal backend.
    fn destroy(self) -> Result<()>;
}

/// Allows backends to print out content and newlines.
pub trait LogBackend {
    /// Print a new empty line into the log.
    fn log_newline(&mut self);

    /// Print a string into the log, followed by a new line.
    fn log_println<T: Display>(&mut self, content: T);
}

/// Allows backends to additionally mirror their log output into a file.
pub trait LogToFileBackend {
    fn enable_saving_logs_to_file(
        &mut self,
        log_file_path: PathBuf,
    ) -> Result<()>;

    fn disable_saving_logs_to_file(&mut self) -> Result<()>;
}
