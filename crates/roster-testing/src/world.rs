//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns an isolated data directory and a running [`StubServer`],
//! and points every command it builds at both.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::backend::Backend;
use crate::server::StubServer;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use roster_testing::TestWorld;
///
/// let world = TestWorld::new().with_department("Ops");
///
/// let result = world.run(&["department", "list"]).unwrap();
/// assert!(result.success());
/// assert!(result.stdout().contains("Ops"));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    server: StubServer,
    env_vars: HashMap<String, String>,
    point_at_server: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty service.
    pub fn new() -> Self {
        Self::with_backend(Backend::new())
    }

    pub fn with_backend(backend: Backend) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".roster");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        let server = StubServer::with_backend(backend).expect("Failed to start stub server");

        Self {
            temp_dir,
            data_dir,
            server,
            env_vars: HashMap::new(),
            point_at_server: true,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server(&self) -> &StubServer {
        &self.server
    }

    pub fn with_department(self, name: &str) -> Self {
        self.server.backend().seed_department(name);
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Stop passing `--server`, so the command resolves the URL from its
    /// environment and config file.
    pub fn without_server_flag(mut self) -> Self {
        self.point_at_server = false;
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if self.point_at_server {
            cmd.arg("--server").arg(self.server.base_url());
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("ROSTER_SERVER")
            .env_remove("ROSTER_PATH")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `roster` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("roster")
            .map_err(|e| anyhow::anyhow!("Failed to find roster binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
