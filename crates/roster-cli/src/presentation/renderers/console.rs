use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel,
};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        use is_terminal::IsTerminal;
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Text that `render` would print, without writing it.
    pub fn to_text<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();
        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), self.paint_badge(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            let heading = "Tips:";
            if self.color {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }

    fn paint_badge(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return badge.label.clone();
        }
        match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.cyan().bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
            StatusLevel::Error => badge.label.red().bold().to_string(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.to_text(result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{render_employees, update_stats};
    use roster_types::{Amount, Employee, RecordId};

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer {
            json_mode: false,
            color: false,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            Employee {
                id: RecordId::Number(2),
                name: "Bo".to_string(),
                department_id: None,
                department_name: None,
                salary: None,
                hire_date: None,
            },
            Employee {
                id: RecordId::Number(1),
                name: "Ana".to_string(),
                department_id: Some(RecordId::Number(1)),
                department_name: Some("Ops".to_string()),
                salary: Some(Amount::Number(50000.0)),
                hire_date: Some("2024-03-01".to_string()),
            },
        ]
    }

    #[test]
    fn test_employee_table_plain() {
        let result = CommandResultViewModel::new(render_employees(&staff()));
        insta::assert_snapshot!(plain().to_text(&result).unwrap());
    }

    #[test]
    fn test_empty_employee_table_plain() {
        let result = CommandResultViewModel::new(render_employees(&[]));
        let text = plain().to_text(&result).unwrap();
        assert!(text.ends_with("No employees found.\n"));
    }

    #[test]
    fn test_badge_and_stats_plain() {
        let result = CommandResultViewModel::new(update_stats(&staff(), &[]))
            .with_badge(StatusBadge::info("2 employees"));
        insta::assert_snapshot!(plain().to_text(&result).unwrap());
    }

    #[test]
    fn test_json_mode_serializes_view_model() {
        let renderer = ConsoleRenderer {
            json_mode: true,
            color: false,
        };
        let result = CommandResultViewModel::new(update_stats(&staff(), &[]));
        let value: serde_json::Value =
            serde_json::from_str(&renderer.to_text(&result).unwrap()).unwrap();
        assert_eq!(value["content"]["employee_count"], 2);
        assert_eq!(value["content"]["average_salary"], "$50,000.00");
        assert!(value.get("badge").is_none());
    }
}
