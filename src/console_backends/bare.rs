use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};

use crate::console_backends::logging::{
    initialize_log_file_for_log_output,
    LogFileWriter,
};
use crate::console_backends::{LogBackend, LogToFileBackend, TerminalBackend};

/// The simplest terminal backend there is: prints linearly to stdout,
/// optionally mirroring every line (with ANSI styling stripped) to a log
/// file.
pub struct BareConsoleBackend {
    log_file: Option<LogFileWriter>,
}

impl BareConsoleBackend {
    pub fn new() -> Self {
        Self { log_file: None }
    }
}

impl TerminalBackend for BareConsoleBackend {
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    fn destroy(mut self) -> Result<()> {
        self.disable_saving_logs_to_file()
    }
}

impl LogBackend for BareConsoleBackend {
    fn log_newline(&mut self) {
        println!();

        if let Some(writer) = self.log_file.as_mut() {
            let _ = writeln!(writer);
        }
    }

    fn log_println<T: Display>(&mut self, content: T) {
        let content = content.to_string();
        println!("{content}");

        if let Some(writer) = self.log_file.as_mut() {
            let _ = writeln!(writer, "{content}");
        }
    }
}

impl LogToFileBackend for BareConsoleBackend {
    fn enable_saving_logs_to_file(
        &mut self,
        log_file_path: PathBuf,
    ) -> Result<()> {
        self.log_file =
            Some(initialize_log_file_for_log_output(&log_file_path)?);

        Ok(())
    }

    fn disable_saving_logs_to_file(&mut self) -> Result<()> {
        if let Some(mut writer) = self.log_file.take() {
            writer
                .flush()
                .into_diagnostic()
                .wrap_err_with(|| miette!("Failed to flush log file."))?;
        }

        Ok(())
    }
}
