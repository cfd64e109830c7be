use std::fmt;

use crate::presentation::view_models::{ActionResultViewModel, ActionState};

/// The badge carries the message; only failure details are printed here.
pub struct ActionResultView<'a> {
    data: &'a ActionResultViewModel,
}

impl<'a> ActionResultView<'a> {
    pub fn new(data: &'a ActionResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ActionResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.state != ActionState::Failed {
            return Ok(());
        }
        if let Some(status) = self.data.http_status {
            writeln!(f, "HTTP status: {}", status)?;
        }
        Ok(())
    }
}
