pub mod action;
pub mod config;
pub mod department;
pub mod employee;
pub mod screen;
pub mod stats;

pub use action::present_action;
pub use config::{present_config, present_server_saved};
pub use department::{department_options, present_department_list, render_departments};
pub use employee::{present_employee_list, render_employees};
pub use screen::present_screen;
pub use stats::{present_stats, update_stats};
