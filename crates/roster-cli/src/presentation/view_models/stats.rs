use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsViewModel {
    pub employee_count: usize,
    pub department_count: usize,
    /// Formatted average over numeric salaries, or the placeholder
    pub average_salary: String,
}

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::stats::StatsView;
        Box::new(StatsView::new(self))
    }
}
