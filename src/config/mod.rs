//! Driver configuration resolution
//!
//! Resolves the source and output directories either from the hardcoded
//! development paths or from the two required action inputs. The dev/prod
//! switch is decided once at the CLI edge and passed in explicitly; nothing
//! in here reads the environment.

use std::path::PathBuf;

use crate::error::{LuapackError, Result};

/// Source directory used in development mode
pub const DEV_SOURCE_PATH: &str = "lua";

/// Output directory used in development mode
pub const DEV_OUTPUT_PATH: &str = "dist";

/// Resolved directories for one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Directory holding the Lua sources to bundle
    pub source_path: PathBuf,
    /// Directory receiving the bundled artifacts
    pub output_path: PathBuf,
}

impl DriverConfig {
    /// Resolve the configuration from CLI inputs.
    ///
    /// In development mode the fixed relative paths are used and any provided
    /// inputs are ignored. Otherwise both inputs are required; each is a
    /// slash-delimited relative path joined segment by segment into a
    /// platform path.
    pub fn resolve(
        dev: bool,
        source_input: Option<&str>,
        output_input: Option<&str>,
    ) -> Result<Self> {
        if dev {
            return Ok(Self {
                source_path: PathBuf::from(DEV_SOURCE_PATH),
                output_path: PathBuf::from(DEV_OUTPUT_PATH),
            });
        }

        let source = source_input.ok_or_else(|| LuapackError::MissingInput {
            name: "source-path".to_string(),
        })?;
        let output = output_input.ok_or_else(|| LuapackError::MissingInput {
            name: "output-path".to_string(),
        })?;

        Ok(Self {
            source_path: join_segments(source),
            output_path: join_segments(output),
        })
    }
}

/// Join a `/`-delimited relative path into a platform path, skipping empty
/// segments (leading, trailing, or doubled slashes).
fn join_segments(input: &str) -> PathBuf {
    input
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}
