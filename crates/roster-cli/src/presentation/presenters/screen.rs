use roster_runtime::{Affordance, EditSession, Snapshot};

use crate::presentation::view_models::department::SELECT_DEPARTMENT;
use crate::presentation::view_models::{
    DepartmentPanelViewModel, EmployeeFormViewModel, ScreenViewModel, StatusBadge,
};

use super::{department_options, render_departments, render_employees, update_stats};

/// Project a coordinator snapshot into one TUI frame.
pub fn present_screen(snapshot: &Snapshot, server: &str) -> ScreenViewModel {
    let mut employees = render_employees(&snapshot.visible_employees);
    for (row, employee) in employees.rows.iter_mut().zip(snapshot.visible_employees.iter()) {
        row.delete_busy = snapshot.is_disabled(&Affordance::DeleteEmployee(employee.id.clone()));
    }

    let mut departments = render_departments(&snapshot.departments);
    for (item, department) in departments.items.iter_mut().zip(snapshot.departments.iter()) {
        item.remove_busy =
            snapshot.is_disabled(&Affordance::DeleteDepartment(department.id.clone()));
    }

    let options = department_options(&snapshot.departments);
    let department_label = options
        .iter()
        .find(|option| option.value == snapshot.form.department)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| {
            if snapshot.form.department.is_empty() {
                SELECT_DEPARTMENT.to_string()
            } else {
                format!("#{}", snapshot.form.department)
            }
        });

    let title = match &snapshot.session {
        EditSession::Idle => "New employee".to_string(),
        EditSession::Editing(id) => format!("Employee #{}", id),
    };

    ScreenViewModel {
        server: server.to_string(),
        stats: update_stats(&snapshot.employees, &snapshot.departments),
        employees,
        form: EmployeeFormViewModel {
            title,
            name: snapshot.form.name.clone(),
            department: snapshot.form.department.clone(),
            department_label,
            salary: snapshot.form.salary.clone(),
            hire_date: snapshot.form.hire_date.clone(),
            submit_label: snapshot.submit_label.to_string(),
            cancel_visible: snapshot.cancel_visible,
            submit_busy: snapshot.is_disabled(&Affordance::SubmitEmployee),
            status: snapshot.form_status.as_ref().map(StatusBadge::from),
            department_options: options,
        },
        departments: DepartmentPanelViewModel {
            list: departments,
            input: snapshot.department_input.clone(),
            add_busy: snapshot.is_disabled(&Affordance::AddDepartment),
            status: snapshot.department_status.as_ref().map(StatusBadge::from),
        },
        notice: snapshot.notice.clone(),
    }
}
