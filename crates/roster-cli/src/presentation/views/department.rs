use std::fmt;

use crate::presentation::view_models::DepartmentListViewModel;

pub struct DepartmentListView<'a> {
    data: &'a DepartmentListViewModel,
}

impl<'a> DepartmentListView<'a> {
    pub fn new(data: &'a DepartmentListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DepartmentListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(message) = &self.data.empty_message {
            writeln!(f, "{}", message)?;
            return Ok(());
        }

        writeln!(f, "{:<8} NAME", "ID")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for item in &self.data.items {
            writeln!(f, "{:<8} {}", item.id_label, item.name)?;
        }

        Ok(())
    }
}
