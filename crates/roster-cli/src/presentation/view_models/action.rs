use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AddEmployee,
    UpdateEmployee,
    DeleteEmployee,
    AddDepartment,
    DeleteDepartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionState {
    Succeeded,
    Failed,
    Declined,
    Skipped,
}

/// Result of one mutating subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResultViewModel {
    pub action: ActionKind,
    pub state: ActionState,
    /// Raw failure as received, before quote stripping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl CreateView for ActionResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::action::ActionResultView;
        Box::new(ActionResultView::new(self))
    }
}
