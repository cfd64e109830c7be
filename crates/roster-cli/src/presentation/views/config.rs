use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = if self.data.config_exists {
            ""
        } else {
            " (not created yet)"
        };
        writeln!(f, "Config file:  {}{}", self.data.config_path, marker)?;
        writeln!(f, "Server:       {}", self.data.effective_base_url)?;
        if self.data.effective_base_url != self.data.configured_base_url {
            writeln!(f, "  (config.toml has {})", self.data.configured_base_url)?;
        }
        match self.data.timeout_secs {
            Some(secs) => writeln!(f, "Timeout:      {}s", secs),
            None => writeln!(f, "Timeout:      none"),
        }
    }
}
