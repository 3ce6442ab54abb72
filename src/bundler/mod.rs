//! External bundler seam
//!
//! The actual bundling logic (dependency resolution, require rewriting,
//! concatenation) lives in an external executable. This module only defines
//! the seam the driver talks to and the process-spawning binding to it.

pub mod command;

pub use command::CommandBundler;

use std::path::Path;

use crate::error::Result;

/// The external bundling collaborator.
///
/// Given a file name inside a source directory, returns the self-contained
/// bundled content for that file.
pub trait Bundler {
    fn bundle(&self, file_name: &str, source_dir: &Path) -> Result<String>;
}
