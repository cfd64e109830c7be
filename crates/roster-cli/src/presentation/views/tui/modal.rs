//! Centered popup for confirmation prompts and failure notices.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ModalView<'a> {
    title: &'a str,
    message: &'a str,
    hint: &'a str,
    color: Color,
}

impl<'a> ModalView<'a> {
    pub fn confirm(message: &'a str) -> Self {
        Self {
            title: "Confirm",
            message,
            hint: "[y] yes   [n] no",
            color: Color::Yellow,
        }
    }

    pub fn notice(message: &'a str) -> Self {
        Self {
            title: "Error",
            message,
            hint: "[any key] dismiss",
            color: Color::Red,
        }
    }
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [row] = Layout::vertical([Constraint::Length(6)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Percentage(50)])
            .flex(Flex::Center)
            .areas(row);

        Clear.render(popup, buf);
        Paragraph::new(vec![
            Line::from(self.message),
            Line::default(),
            Line::from(self.hint),
        ])
        .block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.color)),
        )
        .wrap(Wrap { trim: true })
        .render(popup, buf);
    }
}
