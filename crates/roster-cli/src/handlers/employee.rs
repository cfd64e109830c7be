use anyhow::Result;
use roster_runtime::{ActionOutcome, Coordinator};
use roster_types::{EmployeeForm, RecordId};
use tokio::runtime::Runtime;

use crate::args::{EmployeeCommand, EmployeeFields};
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{ActionKind, StatusBadge};

use super::{confirmer, finish};

pub fn handle(ctx: &ExecutionContext, runtime: &Runtime, command: EmployeeCommand) -> Result<()> {
    let coordinator = ctx.coordinator()?;

    match command {
        EmployeeCommand::List => {
            let outcome = runtime.block_on(coordinator.reload_employees());
            let employees = coordinator.store().employees();
            finish(ctx, presenters::present_employee_list(&employees, &outcome))
        }

        EmployeeCommand::Add { name, fields } => {
            let form = apply_fields(EmployeeForm::new(name), fields);
            let outcome = runtime.block_on(coordinator.submit_form(form));
            finish_with_form_status(ctx, &coordinator, ActionKind::AddEmployee, &outcome)
        }

        EmployeeCommand::Update { id, name, fields } => {
            let id = RecordId::parse(&id);
            runtime.block_on(coordinator.reload_employees());

            let outcome = coordinator.begin_edit(&id);
            if !outcome.is_success() {
                return finish_with_form_status(
                    ctx,
                    &coordinator,
                    ActionKind::UpdateEmployee,
                    &outcome,
                );
            }

            let mut form = coordinator.snapshot().form;
            if let Some(name) = name {
                form.name = name;
            }
            let form = apply_fields(form, fields);

            let outcome = runtime.block_on(coordinator.submit_form(form));
            finish_with_form_status(ctx, &coordinator, ActionKind::UpdateEmployee, &outcome)
        }

        EmployeeCommand::Delete { id, yes } => {
            let id = RecordId::parse(&id);
            let mut confirm = confirmer(yes);
            let outcome = runtime.block_on(coordinator.delete_employee(&id, confirm.as_mut()));

            let badge = match &outcome {
                ActionOutcome::Failed(_) => coordinator.snapshot().notice.map(StatusBadge::error),
                ActionOutcome::Succeeded => coordinator
                    .snapshot()
                    .form_status
                    .as_ref()
                    .map(StatusBadge::from),
                ActionOutcome::Skipped(_) => None,
            };
            finish(
                ctx,
                presenters::present_action(ActionKind::DeleteEmployee, &outcome, badge),
            )
        }
    }
}

/// Overlay the flags that were given; untouched fields keep their value.
fn apply_fields(mut form: EmployeeForm, fields: EmployeeFields) -> EmployeeForm {
    if let Some(department) = fields.department {
        form.department = department;
    }
    if let Some(salary) = fields.salary {
        form.salary = salary;
    }
    if let Some(hire_date) = fields.hire_date {
        form.hire_date = hire_date;
    }
    form
}

fn finish_with_form_status<A: roster_client::RemoteApi>(
    ctx: &ExecutionContext,
    coordinator: &Coordinator<A>,
    action: ActionKind,
    outcome: &ActionOutcome,
) -> Result<()> {
    let badge = coordinator
        .snapshot()
        .form_status
        .as_ref()
        .map(StatusBadge::from);
    finish(ctx, presenters::present_action(action, outcome, badge))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_fields_keeps_unset_values() {
        let form = EmployeeForm::new("Ana")
            .with_department("2")
            .with_salary("4200");
        let fields = EmployeeFields {
            salary: Some(String::new()),
            hire_date: Some("2024-02-01".to_string()),
            ..Default::default()
        };

        let form = apply_fields(form, fields);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.department, "2");
        assert_eq!(form.salary, "");
        assert_eq!(form.hire_date, "2024-02-01");
    }
}
