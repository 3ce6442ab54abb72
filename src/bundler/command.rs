//! Process-spawning bundler binding
//!
//! Runs the configured bundler executable once per source file with the file
//! name as its argument and the source directory as working directory, and
//! captures stdout as the artifact content.

use std::path::Path;
use std::process::Command;

use crate::error::{LuapackError, Result};

use super::Bundler;

/// Bundler executable used when no `--bundler` input is given
pub const DEFAULT_BUNDLER: &str = "luabundle";

/// Bundler implementation that shells out to an external executable
pub struct CommandBundler {
    program: String,
}

impl CommandBundler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this bundler invokes
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandBundler {
    fn default() -> Self {
        Self::new(DEFAULT_BUNDLER)
    }
}

impl Bundler for CommandBundler {
    fn bundle(&self, file_name: &str, source_dir: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(file_name)
            .current_dir(source_dir)
            .output()
            .map_err(|e| LuapackError::BundlerFailed {
                file: file_name.to_string(),
                reason: format!("failed to run '{}': {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(LuapackError::BundlerFailed {
                file: file_name.to_string(),
                reason,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
