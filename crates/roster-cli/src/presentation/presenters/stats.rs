use roster_types::{Department, Employee};

use crate::presentation::formatters::PLACEHOLDER;
use crate::presentation::formatters::currency::format_number;
use crate::presentation::view_models::{CommandResultViewModel, StatsViewModel};

/// Counts plus the mean over employees whose salary is present and numeric.
pub fn update_stats(employees: &[Employee], departments: &[Department]) -> StatsViewModel {
    let salaries: Vec<f64> = employees.iter().filter_map(Employee::numeric_salary).collect();
    let average_salary = if salaries.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format_number(salaries.iter().sum::<f64>() / salaries.len() as f64)
    };

    StatsViewModel {
        employee_count: employees.len(),
        department_count: departments.len(),
        average_salary,
    }
}

pub fn present_stats(
    employees: &[Employee],
    departments: &[Department],
) -> CommandResultViewModel<StatsViewModel> {
    CommandResultViewModel::new(update_stats(employees, departments))
}
