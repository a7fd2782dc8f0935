use std::env::args;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use miette::{miette, Context, IntoDiagnostic, Result};
use strip_ansi_escapes::Writer as StripAnsiWriter;

use crate::STRATUS_VERSION;

/// A buffered log-file writer that strips ANSI styling from everything
/// written through it.
pub type LogFileWriter = BufWriter<StripAnsiWriter<File>>;

fn open_log_file(log_output_file_path: &Path) -> Result<File> {
    if log_output_file_path.exists() {
        OpenOptions::new()
            .append(true)
            .open(log_output_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Failed to open existing log file for appending: {:?}",
                    log_output_file_path
                )
            })
    } else {
        OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(log_output_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Failed to create log output file: {:?}",
                    log_output_file_path
                )
            })
    }
}

/// Prepares the log file for log output: creates the parent directory if
/// needed and opens the file (appending when it already exists).
///
/// A small invocation header is written to the log file before the writer
/// handle is returned.
pub fn initialize_log_file_for_log_output(
    log_output_file_path: &Path,
) -> Result<LogFileWriter> {
    let log_output_directory_path = log_output_file_path
        .parent()
        .ok_or_else(|| miette!("No log file parent directory?!"))?;

    if log_output_directory_path.exists()
        && !log_output_directory_path.is_dir()
    {
        return Err(miette!(
            "Invalid log file path: parent directory path is actually not a directory."
        ));
    }
    if !log_output_directory_path.exists() {
        fs::create_dir_all(log_output_directory_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!("Failed to create log file parent directory.")
            })?;
    }

    let output_file = open_log_file(log_output_file_path)?;

    let ansi_stripping_writer = StripAnsiWriter::new(output_file);
    let mut buf_writer = BufWriter::with_capacity(1024, ansi_stripping_writer);

    // An "invocation header" marks where each run of stratus begins.
    let invocation_time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    writeln!(
        buf_writer,
        "{} Hello from stratus {}. Started with arguments: {:?}",
        invocation_time,
        STRATUS_VERSION,
        args()
    )
    .into_diagnostic()
    .wrap_err_with(|| miette!("Could not write invocation header to file."))?;

    Ok(buf_writer)
}
