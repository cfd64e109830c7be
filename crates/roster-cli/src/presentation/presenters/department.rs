use roster_runtime::ReloadOutcome;
use roster_types::Department;

use crate::presentation::view_models::department::{NO_DEPARTMENTS, SELECT_DEPARTMENT};
use crate::presentation::view_models::{
    CommandResultViewModel, DepartmentItemViewModel, DepartmentListViewModel,
    DepartmentOptionViewModel, Guidance, StatusBadge,
};

pub fn render_departments(list: &[Department]) -> DepartmentListViewModel {
    let items: Vec<DepartmentItemViewModel> = list
        .iter()
        .map(|department| DepartmentItemViewModel {
            id: serde_json::to_value(&department.id).unwrap_or_default(),
            id_label: department.id.to_string(),
            name: department.name.clone(),
            remove_busy: false,
        })
        .collect();
    let empty_message = items.is_empty().then(|| NO_DEPARTMENTS.to_string());
    DepartmentListViewModel {
        items,
        empty_message,
    }
}

/// Options for the employee form's department selector, led by an empty
/// "Select department" entry.
pub fn department_options(list: &[Department]) -> Vec<DepartmentOptionViewModel> {
    std::iter::once(DepartmentOptionViewModel {
        value: String::new(),
        label: SELECT_DEPARTMENT.to_string(),
    })
    .chain(list.iter().map(|department| DepartmentOptionViewModel {
        value: department.id.to_string(),
        label: department.name.clone(),
    }))
    .collect()
}

pub fn present_department_list(
    list: &[Department],
    outcome: &ReloadOutcome,
) -> CommandResultViewModel<DepartmentListViewModel> {
    let result = CommandResultViewModel::new(render_departments(list));
    match outcome {
        ReloadOutcome::Loaded(_) => result,
        ReloadOutcome::FailedOpen(err) => result
            .with_badge(StatusBadge::warning(format!(
                "Could not load departments: {}",
                err
            )))
            .with_suggestion(
                Guidance::new("Check the server address").with_command("roster config show"),
            ),
    }
}
