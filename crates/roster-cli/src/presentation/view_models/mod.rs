pub mod action;
pub mod common;
pub mod config;
pub mod department;
pub mod employee;
pub mod result;
pub mod screen;
pub mod stats;

use std::fmt;

pub use action::{ActionKind, ActionResultViewModel, ActionState};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use department::{DepartmentItemViewModel, DepartmentListViewModel, DepartmentOptionViewModel};
pub use employee::{EmployeeRowViewModel, EmployeeTableViewModel};
pub use result::CommandResultViewModel;
pub use screen::{DepartmentPanelViewModel, EmployeeFormViewModel, ScreenViewModel};
pub use stats::StatsViewModel;

/// Bridge from a view model to its plain-text view.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
