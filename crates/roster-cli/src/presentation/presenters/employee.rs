use roster_runtime::ReloadOutcome;
use roster_types::Employee;

use crate::presentation::formatters::{PLACEHOLDER, format_currency, format_date};
use crate::presentation::view_models::employee::NO_EMPLOYEES;
use crate::presentation::view_models::{
    CommandResultViewModel, EmployeeRowViewModel, EmployeeTableViewModel, Guidance, StatusBadge,
};

pub fn render_employees(list: &[Employee]) -> EmployeeTableViewModel {
    let rows: Vec<EmployeeRowViewModel> = list.iter().map(employee_row).collect();
    let empty_message = rows.is_empty().then(|| NO_EMPLOYEES.to_string());
    EmployeeTableViewModel {
        rows,
        empty_message,
    }
}

fn employee_row(employee: &Employee) -> EmployeeRowViewModel {
    EmployeeRowViewModel {
        id: serde_json::to_value(&employee.id).unwrap_or_default(),
        id_label: employee.id.to_string(),
        name: employee.name.clone(),
        department: employee
            .department_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        salary: format_currency(employee.salary.as_ref()),
        hire_date: format_date(employee.hire_date.as_deref()),
        delete_busy: false,
    }
}

pub fn present_employee_list(
    list: &[Employee],
    outcome: &ReloadOutcome,
) -> CommandResultViewModel<EmployeeTableViewModel> {
    let result = CommandResultViewModel::new(render_employees(list));
    match outcome {
        ReloadOutcome::Loaded(_) => result,
        ReloadOutcome::FailedOpen(err) => result
            .with_badge(StatusBadge::warning(format!(
                "Could not load employees: {}",
                err
            )))
            .with_suggestion(
                Guidance::new("Check the server address").with_command("roster config show"),
            ),
    }
}
