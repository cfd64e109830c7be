use serde::Serialize;

use super::{
    DepartmentListViewModel, DepartmentOptionViewModel, EmployeeTableViewModel, StatsViewModel,
    StatusBadge,
};

/// Employee form as drawn: field values plus derived mode attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeFormViewModel {
    pub title: String,
    pub name: String,
    pub department: String,
    /// Label of the selected department option
    pub department_label: String,
    pub salary: String,
    pub hire_date: String,
    pub submit_label: String,
    pub cancel_visible: bool,
    pub submit_busy: bool,
    pub status: Option<StatusBadge>,
    pub department_options: Vec<DepartmentOptionViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPanelViewModel {
    pub list: DepartmentListViewModel,
    pub input: String,
    pub add_busy: bool,
    pub status: Option<StatusBadge>,
}

/// Everything the TUI draws in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenViewModel {
    pub server: String,
    pub employees: EmployeeTableViewModel,
    pub form: EmployeeFormViewModel,
    pub departments: DepartmentPanelViewModel,
    pub stats: StatsViewModel,
    pub notice: Option<String>,
}
