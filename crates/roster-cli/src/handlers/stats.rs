use anyhow::Result;
use tokio::runtime::Runtime;

use crate::context::ExecutionContext;
use crate::presentation::presenters;

use super::finish;

pub fn handle(ctx: &ExecutionContext, runtime: &Runtime) -> Result<()> {
    let coordinator = ctx.coordinator()?;
    runtime.block_on(coordinator.load());

    let snapshot = coordinator.snapshot();
    finish(
        ctx,
        presenters::present_stats(&snapshot.employees, &snapshot.departments),
    )
}
