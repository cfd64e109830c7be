//! TUI View Components
//!
//! Ratatui widgets over the screen view models. Each wrapper borrows its
//! view model plus the bits of renderer state it needs (focus, selection);
//! no formatting happens here beyond layout and color.

pub mod dashboard;
pub mod departments;
pub mod employee_form;
pub mod employee_table;
pub mod modal;
pub mod status_bar;

pub use dashboard::DashboardView;
pub use departments::DepartmentPanelView;
pub use employee_form::EmployeeFormView;
pub use employee_table::EmployeeTableView;
pub use modal::ModalView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Modifier, Style};

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Employees,
    Form(FormField),
    Departments,
    DepartmentInput,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Employees => Focus::Form(FormField::Name),
            Focus::Form(_) => Focus::Departments,
            Focus::Departments => Focus::DepartmentInput,
            Focus::DepartmentInput => Focus::Employees,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Employees => Focus::DepartmentInput,
            Focus::Form(_) => Focus::Employees,
            Focus::Departments => Focus::Form(FormField::Name),
            Focus::DepartmentInput => Focus::Departments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Department,
    Salary,
    HireDate,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Department,
        FormField::Salary,
        FormField::HireDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Department => "Department",
            FormField::Salary => "Salary",
            FormField::HireDate => "Hire date",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Department,
            FormField::Department => FormField::Salary,
            FormField::Salary => FormField::HireDate,
            FormField::HireDate => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::HireDate,
            FormField::Department => FormField::Name,
            FormField::Salary => FormField::Department,
            FormField::HireDate => FormField::Salary,
        }
    }
}

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

pub(crate) fn disabled_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
