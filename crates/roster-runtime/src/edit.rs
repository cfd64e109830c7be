use roster_types::{Employee, EmployeeForm, EmployeePayload, RecordId};
use serde::Serialize;

use crate::status::StatusMessage;

pub const ADD_LABEL: &str = "Add Employee";
pub const UPDATE_LABEL: &str = "Update Employee";

/// What the employee form currently represents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum EditSession {
    /// Form describes a new employee
    #[default]
    Idle,
    /// Form was populated from the cached employee with this id
    Editing(RecordId),
}

/// Where a submit goes, fixed at the moment the user submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(RecordId),
}

impl SubmitTarget {
    pub fn success_text(&self) -> &'static str {
        match self {
            SubmitTarget::Create => "Employee added successfully!",
            SubmitTarget::Update(_) => "Employee updated successfully!",
        }
    }

    pub fn fallback_error(&self) -> &'static str {
        match self {
            SubmitTarget::Create => "Unable to add employee.",
            SubmitTarget::Update(_) => "Unable to update employee.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub target: SubmitTarget,
    pub payload: EmployeePayload,
}

/// Create-vs-edit state of the employee form plus the form contents.
///
/// UI attributes (button label, cancel visibility) are derived from the
/// session, never stored.
#[derive(Debug, Clone, Default)]
pub struct EditStateMachine {
    session: EditSession,
    form: EmployeeForm,
}

impl EditStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.session {
            EditSession::Editing(id) => Some(id),
            EditSession::Idle => None,
        }
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn set_form(&mut self, form: EmployeeForm) {
        self.form = form;
    }

    pub fn submit_label(&self) -> &'static str {
        match self.session {
            EditSession::Idle => ADD_LABEL,
            EditSession::Editing(_) => UPDATE_LABEL,
        }
    }

    pub fn cancel_visible(&self) -> bool {
        matches!(self.session, EditSession::Editing(_))
    }

    /// Enter `Editing` for `employee`, from any state. The form is fully
    /// overwritten; re-entering for another id needs no confirmation.
    pub fn begin_edit(&mut self, employee: &Employee) -> StatusMessage {
        self.session = EditSession::Editing(employee.id.clone());
        self.form = EmployeeForm::from_employee(employee);
        StatusMessage::info(format!("Editing employee #{}", employee.id))
    }

    /// Leave `Editing`. Returns `None` when there was nothing to cancel.
    pub fn cancel(&mut self) -> Option<StatusMessage> {
        if self.session == EditSession::Idle {
            return None;
        }
        self.reset();
        Some(StatusMessage::info("Edit cancelled."))
    }

    /// Clear the form and return to `Idle`.
    pub fn reset(&mut self) {
        self.session = EditSession::Idle;
        self.form = EmployeeForm::default();
    }

    /// Build the request for `form` against the current session.
    pub fn prepare_submit(&self, form: &EmployeeForm) -> SubmitRequest {
        let target = match &self.session {
            EditSession::Idle => SubmitTarget::Create,
            EditSession::Editing(id) => SubmitTarget::Update(id.clone()),
        };
        SubmitRequest {
            target,
            payload: EmployeePayload::from_form(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::Amount;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id: RecordId::Number(id),
            name: name.to_string(),
            department_id: Some(RecordId::Number(2)),
            department_name: Some("Ops".to_string()),
            salary: Some(Amount::Number(4200.0)),
            hire_date: Some("2023-01-09".to_string()),
        }
    }

    #[test]
    fn test_idle_by_default() {
        let machine = EditStateMachine::new();
        assert_eq!(machine.session(), &EditSession::Idle);
        assert_eq!(machine.submit_label(), ADD_LABEL);
        assert!(!machine.cancel_visible());
        assert!(machine.form().is_empty());
    }

    #[test]
    fn test_begin_edit_populates_form() {
        let mut machine = EditStateMachine::new();
        let status = machine.begin_edit(&employee(7, "Ana"));

        assert_eq!(machine.session(), &EditSession::Editing(RecordId::Number(7)));
        assert_eq!(machine.submit_label(), UPDATE_LABEL);
        assert!(machine.cancel_visible());
        assert_eq!(status, StatusMessage::info("Editing employee #7"));
        assert_eq!(machine.form().name, "Ana");
        assert_eq!(machine.form().department, "2");
        assert_eq!(machine.form().salary, "4200");
        assert_eq!(machine.form().hire_date, "2023-01-09");
    }

    #[test]
    fn test_begin_edit_again_overwrites_form() {
        let mut machine = EditStateMachine::new();
        machine.begin_edit(&employee(7, "Ana"));
        machine.form_mut().name = "Ana (typing)".to_string();

        let mut other = employee(8, "Bo");
        other.salary = None;
        machine.begin_edit(&other);

        assert_eq!(machine.editing_id(), Some(&RecordId::Number(8)));
        assert_eq!(machine.form().name, "Bo");
        assert_eq!(machine.form().salary, "");
    }

    #[test]
    fn test_cancel_then_submit_creates() {
        let mut machine = EditStateMachine::new();
        machine.begin_edit(&employee(7, "Ana"));

        let status = machine.cancel();
        assert_eq!(status, Some(StatusMessage::info("Edit cancelled.")));
        assert_eq!(machine.session(), &EditSession::Idle);
        assert!(machine.form().is_empty());

        let request = machine.prepare_submit(&EmployeeForm::new("Cy"));
        assert_eq!(request.target, SubmitTarget::Create);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut machine = EditStateMachine::new();
        machine.form_mut().name = "draft".to_string();
        assert_eq!(machine.cancel(), None);
        assert_eq!(machine.form().name, "draft");
    }

    #[test]
    fn test_prepare_submit_while_editing_targets_update() {
        let mut machine = EditStateMachine::new();
        machine.begin_edit(&employee(7, "Ana"));

        let request = machine.prepare_submit(machine.form());
        assert_eq!(request.target, SubmitTarget::Update(RecordId::Number(7)));
        assert_eq!(request.payload.department_id, Some(RecordId::Number(2)));
        assert_eq!(request.payload.salary.as_deref(), Some("4200"));
    }
}
