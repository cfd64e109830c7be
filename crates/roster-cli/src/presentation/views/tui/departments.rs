//! Department chips, the add-department input and its status line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::DepartmentPanelViewModel;

use super::{border_style, disabled_style, status_level_to_color};

pub struct DepartmentPanelView<'a> {
    model: &'a DepartmentPanelViewModel,
    selected: Option<usize>,
    list_focused: bool,
    input_focused: bool,
}

impl<'a> DepartmentPanelView<'a> {
    pub fn new(
        model: &'a DepartmentPanelViewModel,
        selected: Option<usize>,
        list_focused: bool,
        input_focused: bool,
    ) -> Self {
        Self {
            model,
            selected,
            list_focused,
            input_focused,
        }
    }
}

impl<'a> Widget for DepartmentPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).split(area);

        let chips: Vec<Span> = match &self.model.list.empty_message {
            Some(message) => vec![Span::styled(
                message.as_str(),
                Style::default().fg(Color::DarkGray),
            )],
            None => self
                .model
                .list
                .items
                .iter()
                .enumerate()
                .flat_map(|(i, item)| {
                    let mut style = if item.remove_busy {
                        disabled_style()
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    if self.list_focused && self.selected == Some(i) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    [
                        Span::styled(format!("[{} ×]", item.name), style),
                        Span::raw(" "),
                    ]
                })
                .collect(),
        };

        Paragraph::new(Line::from(chips))
            .block(
                Block::default()
                    .title("Departments")
                    .borders(Borders::ALL)
                    .border_style(border_style(self.list_focused)),
            )
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let cursor = if self.input_focused { "_" } else { "" };
        let add_style = if self.model.add_busy {
            disabled_style()
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut lines = vec![Line::from(vec![
            Span::raw(format!("{}{}  ", self.model.input, cursor)),
            Span::styled("[Enter] Add", add_style),
        ])];
        if let Some(status) = &self.model.status {
            lines.push(Line::from(Span::styled(
                status.label.as_str(),
                Style::default().fg(status_level_to_color(status.level)),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("New department")
                    .borders(Borders::ALL)
                    .border_style(border_style(self.input_focused)),
            )
            .render(chunks[1], buf);
    }
}
