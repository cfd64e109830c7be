use anyhow::Result;
use roster_runtime::Config;

use crate::args::ConfigCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

use super::finish;

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand) -> Result<()> {
    let path = ctx.config_path();

    match command {
        ConfigCommand::Show => {
            let config = ctx.config()?;
            let effective = ctx.base_url()?;
            finish(ctx, presenters::present_config(config, &path, &effective))
        }

        ConfigCommand::SetServer { url } => {
            let mut config = Config::load_from(&path)?;
            config.set_base_url(url.trim());
            config.save_to(&path)?;
            tracing::info!(path = %path.display(), base_url = %config.server.base_url, "server saved");

            let effective = ctx.effective_base_url(&config);
            finish(
                ctx,
                presenters::present_server_saved(&config, &path, &effective),
            )
        }
    }
}
