use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub config_exists: bool,
    /// URL requests will go to after flag and environment overrides
    pub effective_base_url: String,
    /// URL stored in config.toml (or the default)
    pub configured_base_url: String,
    pub timeout_secs: Option<u64>,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}
