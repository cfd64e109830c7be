use std::fmt;

use crate::presentation::view_models::EmployeeTableViewModel;

pub struct EmployeeTableView<'a> {
    data: &'a EmployeeTableViewModel,
}

impl<'a> EmployeeTableView<'a> {
    pub fn new(data: &'a EmployeeTableViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for EmployeeTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<24} {:<18} {:>14}  HIRE DATE",
            "ID", "NAME", "DEPARTMENT", "SALARY"
        )?;
        writeln!(f, "{}", "-".repeat(78))?;

        if let Some(message) = &self.data.empty_message {
            writeln!(f, "{}", message)?;
            return Ok(());
        }

        for row in &self.data.rows {
            writeln!(
                f,
                "{:<8} {:<24} {:<18} {:>14}  {}",
                row.id_label, row.name, row.department, row.salary, row.hire_date
            )?;
        }

        Ok(())
    }
}
