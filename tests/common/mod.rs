//! Common test utilities for Luapack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestSpace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the scratch root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSpace {
    /// Create a new scratch directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the scratch root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the scratch root
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists under the scratch root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a directory under the scratch root
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Write an executable fake bundler that echoes the source file back,
    /// optionally appending each invoked file name to a log file
    #[cfg(unix)]
    pub fn fake_bundler(&self, log: Option<&str>) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.path.join("fake-bundler.sh");
        let script = match log {
            Some(log) => format!(
                "#!/bin/sh\necho \"$1\" >> \"{}\"\ncat \"$1\"\n",
                self.path.join(log).display()
            ),
            None => "#!/bin/sh\ncat \"$1\"\n".to_string(),
        };
        std::fs::write(&script_path, script).expect("Failed to write fake bundler");

        let mut perms = std::fs::metadata(&script_path)
            .expect("Failed to stat fake bundler")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script_path, perms).expect("Failed to chmod fake bundler");

        script_path
    }
}
