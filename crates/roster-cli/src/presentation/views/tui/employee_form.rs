//! Create/edit form. Title, submit label and the cancel hint follow the
//! edit session.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::EmployeeFormViewModel;

use super::{FormField, border_style, disabled_style, status_level_to_color};

pub struct EmployeeFormView<'a> {
    model: &'a EmployeeFormViewModel,
    active: Option<FormField>,
}

impl<'a> EmployeeFormView<'a> {
    pub fn new(model: &'a EmployeeFormViewModel, active: Option<FormField>) -> Self {
        Self { model, active }
    }

    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.model.name,
            FormField::Department => &self.model.department_label,
            FormField::Salary => &self.model.salary,
            FormField::HireDate => &self.model.hire_date,
        }
    }
}

impl<'a> Widget for EmployeeFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL)
            .border_style(border_style(self.active.is_some()));

        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|&field| {
                let active = self.active == Some(field);
                let marker = if active { "> " } else { "  " };
                let value_style = if active {
                    Style::default().add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default()
                };
                let value = match field {
                    FormField::Department => format!("< {} >", self.value(field)),
                    _ if active => format!("{}_", self.value(field)),
                    _ => self.value(field).to_string(),
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{:<11}", field.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        lines.push(Line::default());
        let submit_style = if self.model.submit_busy {
            disabled_style()
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut actions = vec![Span::styled(
            format!("[Enter] {}", self.model.submit_label),
            submit_style,
        )];
        if self.model.cancel_visible {
            actions.push(Span::raw("  "));
            actions.push(Span::styled("[Esc] Cancel", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(actions));

        if let Some(status) = &self.model.status {
            lines.push(Line::from(Span::styled(
                status.label.as_str(),
                Style::default().fg(status_level_to_color(status.level)),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
