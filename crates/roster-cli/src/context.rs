use anyhow::Result;
use once_cell::sync::OnceCell;
use roster_client::HttpClient;
use roster_runtime::{Config, Coordinator};
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

/// Per-invocation settings shared by every handler.
pub struct ExecutionContext {
    data_dir: PathBuf,
    server_flag: Option<String>,
    pub format: OutputFormat,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, server_flag: Option<String>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            server_flag,
            format,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| -> Result<Config> {
            Ok(Config::load_from(&self.config_path())?)
        })
    }

    pub fn base_url(&self) -> Result<String> {
        Ok(self.effective_base_url(self.config()?))
    }

    /// `config`'s server with the flag and environment overrides applied.
    pub fn effective_base_url(&self, config: &Config) -> String {
        config.effective_base_url(self.server_flag.as_deref())
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn coordinator(&self) -> Result<Coordinator<HttpClient>> {
        let base_url = self.base_url()?;
        tracing::debug!(%base_url, "connecting");
        Ok(roster_runtime::connect(self.config()?, &base_url)?)
    }
}
