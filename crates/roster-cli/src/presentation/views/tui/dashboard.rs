//! Summary statistics strip.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatsViewModel;

pub struct DashboardView<'a> {
    model: &'a StatsViewModel,
    server: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a StatsViewModel, server: &'a str) -> Self {
        Self { model, server }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::raw("Employees: "),
            Span::styled(self.model.employee_count.to_string(), bold),
            Span::raw("   Departments: "),
            Span::styled(self.model.department_count.to_string(), bold),
            Span::raw("   Average salary: "),
            Span::styled(self.model.average_salary.as_str(), bold),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .title(format!("Roster @ {}", self.server))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
