pub mod diff;
pub mod diversity;

use clap::ValueEnum;
use quill_core::errors::QuillError;
use quill_core::ExError;
use std::path::Path;

/// Output format shared by the analysis commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Read a whole input file as bytes
pub fn read_input(path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| {
        ExError::from(QuillError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .with_op("read_input")
    })
}

/// Write to `output` if given, otherwise print to stdout
pub fn write_output(output: Option<&Path>, content: &str) -> Result<(), ExError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            ExError::from(QuillError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
            .with_op("write_output")
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

/// Serialize a report as pretty JSON with a trailing newline
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| {
            ExError::from(QuillError::Serialization {
                message: e.to_string(),
            })
        })
}
