use std::fmt;

use crate::presentation::view_models::StatsViewModel;

pub struct StatsView<'a> {
    data: &'a StatsViewModel,
}

impl<'a> StatsView<'a> {
    pub fn new(data: &'a StatsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Employees:      {}", self.data.employee_count)?;
        writeln!(f, "Departments:    {}", self.data.department_count)?;
        writeln!(f, "Average salary: {}", self.data.average_salary)
    }
}
