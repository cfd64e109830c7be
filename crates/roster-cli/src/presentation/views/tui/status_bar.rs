//! Key hints for the focused pane.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Focus;

pub struct StatusBarView {
    focus: Focus,
}

impl StatusBarView {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Employees => &[
                ("[↑/↓]", "select "),
                ("[e]", "dit "),
                ("[d]", "elete "),
                ("[n]", "ew "),
                ("[r]", "efresh "),
                ("[Tab]", "next pane "),
                ("[q]", "uit"),
            ],
            Focus::Form(_) => &[
                ("[↑/↓]", "field "),
                ("[←/→]", "department "),
                ("[Enter]", "submit "),
                ("[Esc]", "cancel edit "),
                ("[Tab]", "next pane"),
            ],
            Focus::Departments => &[
                ("[←/→]", "select "),
                ("[x]", "remove "),
                ("[Tab]", "next pane "),
                ("[q]", "uit"),
            ],
            Focus::DepartmentInput => &[("[Enter]", "add "), ("[Tab]", "next pane")],
        }
    }
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Color::Yellow);
        let spans: Vec<Span> = self
            .hints()
            .iter()
            .flat_map(|(k, text)| [Span::styled(*k, key), Span::raw(*text)])
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
