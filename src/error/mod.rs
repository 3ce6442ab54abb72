//! Error types and handling for Luapack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Luapack operations
#[derive(Error, Diagnostic, Debug)]
pub enum LuapackError {
    // Configuration errors
    #[error("Required input '{name}' is missing")]
    #[diagnostic(
        code(luapack::config::missing_input),
        help(
            "Provide the input via its CLI flag or the corresponding INPUT_* environment variable, or run with --dev to use the development paths"
        )
    )]
    MissingInput { name: String },

    // File system errors
    #[error("Failed to read directory: {path}")]
    #[diagnostic(
        code(luapack::fs::read_dir_failed),
        help("Check that the directory exists and is readable")
    )]
    ReadDirFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(luapack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(luapack::fs::io_error))]
    IoError { message: String },

    // Bundler errors
    #[error("Bundler failed for '{file}': {reason}")]
    #[diagnostic(
        code(luapack::bundler::failed),
        help("Check that the bundler executable is installed and on PATH")
    )]
    BundlerFailed { file: String, reason: String },
}

impl From<std::io::Error> for LuapackError {
    fn from(err: std::io::Error) -> Self {
        LuapackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LuapackError>;
