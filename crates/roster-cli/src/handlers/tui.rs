use anyhow::Result;
use tokio::runtime::Runtime;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

pub fn handle(ctx: &ExecutionContext, runtime: &Runtime) -> Result<()> {
    let server = ctx.base_url()?;
    let coordinator = ctx.coordinator()?;
    tracing::info!(%server, "starting tui");

    TuiRenderer::new(coordinator, server).run(runtime)
}
