use anyhow::Result;
use roster_runtime::ActionOutcome;
use roster_types::RecordId;
use tokio::runtime::Runtime;

use crate::args::DepartmentCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{ActionKind, StatusBadge};

use super::{confirmer, finish};

pub fn handle(
    ctx: &ExecutionContext,
    runtime: &Runtime,
    command: DepartmentCommand,
) -> Result<()> {
    let coordinator = ctx.coordinator()?;

    let (action, outcome) = match command {
        DepartmentCommand::List => {
            let outcome = runtime.block_on(coordinator.reload_departments());
            let departments = coordinator.store().departments();
            return finish(
                ctx,
                presenters::present_department_list(&departments, &outcome),
            );
        }

        DepartmentCommand::Add { name } => (
            ActionKind::AddDepartment,
            runtime.block_on(coordinator.add_department_named(&name)),
        ),

        DepartmentCommand::Delete { id, yes } => {
            let id = RecordId::parse(&id);
            let mut confirm = confirmer(yes);
            (
                ActionKind::DeleteDepartment,
                runtime.block_on(coordinator.delete_department(&id, confirm.as_mut())),
            )
        }
    };

    let badge = match outcome {
        ActionOutcome::Skipped(roster_runtime::SkipReason::NotConfirmed) => None,
        _ => coordinator
            .snapshot()
            .department_status
            .as_ref()
            .map(StatusBadge::from),
    };
    finish(ctx, presenters::present_action(action, &outcome, badge))
}
