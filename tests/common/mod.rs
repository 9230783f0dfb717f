//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Install a tracing subscriber once so `RUST_LOG` controls test output
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Scratch directory for test scenarios
///
/// Creates a temporary directory and provides utilities for seeding and
/// inspecting files within it.
pub struct Scratch {
    /// Temporary directory backing the scratch space
    pub dir: TempDir,
}

impl Scratch {
    /// Create a new scratch directory
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Resolve a name relative to the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file in the scratch directory
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Read a file from the scratch directory
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read file")
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}
