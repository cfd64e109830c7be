//! Employee table with per-row edit/delete affordances.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::EmployeeTableViewModel;

use super::{border_style, disabled_style};

pub struct EmployeeTableView<'a> {
    model: &'a EmployeeTableViewModel,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> EmployeeTableView<'a> {
    pub fn new(model: &'a EmployeeTableViewModel, selected: Option<usize>, focused: bool) -> Self {
        Self {
            model,
            selected,
            focused,
        }
    }
}

impl<'a> Widget for EmployeeTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("Employees ({})", self.model.rows.len()))
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));

        let header = Row::new(vec!["ID", "Name", "Department", "Salary", "Hired", ""])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(10),
        ];

        let rows: Vec<Row> = match &self.model.empty_message {
            Some(message) => vec![Row::new(vec![Cell::from(""), Cell::from(message.as_str())])],
            None => self
                .model
                .rows
                .iter()
                .map(|row| {
                    let actions = if row.delete_busy {
                        Cell::from(Span::styled("deleting…", disabled_style()))
                    } else {
                        Cell::from("[e] [d]")
                    };
                    Row::new(vec![
                        Cell::from(row.id_label.as_str()),
                        Cell::from(row.name.as_str()),
                        Cell::from(row.department.as_str()),
                        Cell::from(row.salary.as_str()),
                        Cell::from(row.hire_date.as_str()),
                        actions,
                    ])
                })
                .collect(),
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let selected = if self.model.empty_message.is_some() {
            None
        } else {
            self.selected
        };
        let mut state = TableState::default().with_selected(selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
