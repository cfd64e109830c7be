use std::path::Path;

use roster_runtime::Config;

use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, StatusBadge};

pub fn present_config(
    config: &Config,
    path: &Path,
    effective_base_url: &str,
) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(config_view_model(config, path, effective_base_url))
}

pub fn present_server_saved(
    config: &Config,
    path: &Path,
    effective_base_url: &str,
) -> CommandResultViewModel<ConfigViewModel> {
    present_config(config, path, effective_base_url).with_badge(StatusBadge::success(format!(
        "Server set to {}",
        config.server.base_url
    )))
}

fn config_view_model(config: &Config, path: &Path, effective_base_url: &str) -> ConfigViewModel {
    ConfigViewModel {
        config_path: path.display().to_string(),
        config_exists: path.exists(),
        effective_base_url: effective_base_url.to_string(),
        configured_base_url: config.server.base_url.clone(),
        timeout_secs: config.server.timeout_secs,
    }
}
