use serde::Serialize;
use std::fmt;

use super::CreateView;

pub const NO_EMPLOYEES: &str = "No employees found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRowViewModel {
    /// Identifier exactly as the server sent it
    pub id: serde_json::Value,
    pub id_label: String,
    pub name: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
    /// Delete request in flight for this row
    pub delete_busy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeTableViewModel {
    pub rows: Vec<EmployeeRowViewModel>,
    /// Single placeholder row shown instead of an empty table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl CreateView for EmployeeTableViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::employee::EmployeeTableView;
        Box::new(EmployeeTableView::new(self))
    }
}
