//! Bundling driver
//!
//! Orchestrates one run: clear the output directory, select the eligible
//! source files, bundle each through the external collaborator, and write
//! the artifacts. Execution is sequential; the first filesystem or bundler
//! error aborts the run and leaves already-written artifacts in place.

use std::fs;
use std::path::Path;

use crate::bundler::Bundler;
use crate::config::DriverConfig;
use crate::error::{LuapackError, Result};

/// File extension selecting bundleable sources
pub const LUA_EXTENSION: &str = ".lua";

/// File-name prefix excluding a source from processing
pub const RESERVED_PREFIX: &str = "personal";

/// Outcome of one driver run
#[derive(Debug, Default)]
pub struct BundleSummary {
    /// Artifact names written to the output directory, in processing order
    pub written: Vec<String>,
    /// Number of sources skipped by the reserved prefix
    pub skipped: usize,
}

/// Run the driver end to end with the given configuration and bundler.
pub fn run(config: &DriverConfig, bundler: &dyn Bundler) -> Result<BundleSummary> {
    clear_output(&config.output_path)?;

    let mut summary = BundleSummary::default();
    for file_name in select_sources(&config.source_path)? {
        if bundle_and_write(bundler, &file_name, &config.source_path, &config.output_path)? {
            summary.written.push(file_name);
        } else {
            summary.skipped += 1;
        }
    }

    Ok(summary)
}

/// Create the output directory if absent and attempt to remove its entries.
///
/// Compatibility quirk: entries are removed by bare name relative to the
/// process working directory, not joined with the output directory, so prior
/// artifacts inside the output directory survive unless a same-named file
/// exists in the working directory. Removal is best effort; failures are
/// ignored.
pub fn clear_output(output_path: &Path) -> Result<()> {
    fs::create_dir_all(output_path)?;

    let entries = fs::read_dir(output_path).map_err(|e| LuapackError::ReadDirFailed {
        path: output_path.display().to_string(),
        reason: e.to_string(),
    })?;

    for entry in entries {
        let entry = entry?;
        let _ = fs::remove_file(entry.file_name());
    }

    Ok(())
}

/// List the immediate entries of the source directory whose names end in
/// `.lua`, in directory-listing order.
pub fn select_sources(source_path: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(source_path).map_err(|e| LuapackError::ReadDirFailed {
        path: source_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if name.ends_with(LUA_EXTENSION) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}

/// Bundle one source file and write the artifact under the same name.
///
/// Returns `false` without invoking the bundler when the name carries the
/// reserved prefix.
pub fn bundle_and_write(
    bundler: &dyn Bundler,
    file_name: &str,
    source_path: &Path,
    output_path: &Path,
) -> Result<bool> {
    if file_name.starts_with(RESERVED_PREFIX) {
        return Ok(false);
    }

    let content = bundler.bundle(file_name, source_path)?;

    let target = output_path.join(file_name);
    fs::write(&target, content).map_err(|e| LuapackError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(true)
}
