use serde::Serialize;
use std::fmt;

use super::CreateView;

pub const NO_DEPARTMENTS: &str = "No departments defined yet.";
pub const SELECT_DEPARTMENT: &str = "Select department";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentItemViewModel {
    pub id: serde_json::Value,
    pub id_label: String,
    pub name: String,
    pub remove_busy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentListViewModel {
    pub items: Vec<DepartmentItemViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Entry of the employee form's department selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentOptionViewModel {
    /// Empty for the leading "Select department" entry
    pub value: String,
    pub label: String,
}

impl CreateView for DepartmentListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::department::DepartmentListView;
        Box::new(DepartmentListView::new(self))
    }
}
