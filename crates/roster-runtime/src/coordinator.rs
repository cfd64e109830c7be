//! Action handlers binding user intents to the store, the edit-state machine
//! and the remote API.
//!
//! Every handler takes `&self`, so two different actions may be in flight at
//! once on the same task. Locks are never held across an `.await`; the only
//! suspension points are the API calls and the reloads that follow them.

use std::sync::{Arc, Mutex};

use roster_client::{RemoteApi, RequestError};
use roster_types::{Department, DepartmentPayload, Employee, EmployeeForm, RecordId};

use crate::busy::{Affordance, Affordances};
use crate::confirm::Confirm;
use crate::edit::{EditSession, EditStateMachine, SubmitTarget};
use crate::status::StatusMessage;
use crate::store::{RecordStore, ReloadOutcome};
use crate::sync::lock;

pub const DELETE_EMPLOYEE_PROMPT: &str = "Are you sure you want to delete this employee?";
pub const DELETE_DEPARTMENT_PROMPT: &str = "Remove this department?";
pub const DELETE_EMPLOYEE_FAILED: &str = "Failed to delete employee. Check the log for details.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The triggering affordance is disabled by an in-flight request
    Busy,
    /// The user declined the confirmation prompt
    NotConfirmed,
    /// Required input missing; nothing was sent
    Invalid,
    /// The id is not in the cached list
    UnknownRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(RequestError),
    Skipped(SkipReason),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Succeeded)
    }
}

#[derive(Debug, Default)]
struct UiState {
    /// Rows currently on screen; may run ahead of the store after a delete
    visible_employees: Arc<[Employee]>,
    form_status: Option<StatusMessage>,
    department_status: Option<StatusMessage>,
    notice: Option<String>,
    department_input: String,
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub departments: Arc<[Department]>,
    pub employees: Arc<[Employee]>,
    pub visible_employees: Arc<[Employee]>,
    pub session: EditSession,
    pub form: EmployeeForm,
    pub submit_label: &'static str,
    pub cancel_visible: bool,
    pub form_status: Option<StatusMessage>,
    pub department_status: Option<StatusMessage>,
    pub notice: Option<String>,
    pub department_input: String,
    pub disabled: Vec<Affordance>,
}

impl Snapshot {
    pub fn is_disabled(&self, affordance: &Affordance) -> bool {
        self.disabled.contains(affordance)
    }
}

pub struct Coordinator<A> {
    api: A,
    store: RecordStore,
    edit: Mutex<EditStateMachine>,
    ui: Mutex<UiState>,
    affordances: Affordances,
}

impl<A: RemoteApi> Coordinator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: RecordStore::new(),
            edit: Mutex::new(EditStateMachine::new()),
            ui: Mutex::new(UiState::default()),
            affordances: Affordances::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn affordances(&self) -> &Affordances {
        &self.affordances
    }

    pub fn snapshot(&self) -> Snapshot {
        let (session, form, submit_label, cancel_visible) = {
            let edit = lock(&self.edit);
            (
                edit.session().clone(),
                edit.form().clone(),
                edit.submit_label(),
                edit.cancel_visible(),
            )
        };
        let ui = lock(&self.ui);
        Snapshot {
            departments: self.store.departments(),
            employees: self.store.employees(),
            visible_employees: ui.visible_employees.clone(),
            session,
            form,
            submit_label,
            cancel_visible,
            form_status: ui.form_status.clone(),
            department_status: ui.department_status.clone(),
            notice: ui.notice.clone(),
            department_input: ui.department_input.clone(),
            disabled: self.affordances.disabled(),
        }
    }

    /// Initial load: departments first, then employees.
    pub async fn load(&self) {
        self.reload_departments().await;
        self.reload_employees().await;
    }

    /// Manual refresh of the employee table. Does not touch the edit session.
    pub async fn refresh(&self) -> ReloadOutcome {
        self.reload_employees().await
    }

    pub async fn reload_departments(&self) -> ReloadOutcome {
        self.store.reload_departments(&self.api).await
    }

    pub async fn reload_employees(&self) -> ReloadOutcome {
        let outcome = self.store.reload_employees(&self.api).await;
        lock(&self.ui).visible_employees = self.store.employees();
        outcome
    }

    pub fn update_form(&self, apply: impl FnOnce(&mut EmployeeForm)) {
        apply(lock(&self.edit).form_mut());
    }

    pub fn set_form(&self, form: EmployeeForm) {
        lock(&self.edit).set_form(form);
    }

    pub fn set_department_input(&self, value: impl Into<String>) {
        lock(&self.ui).department_input = value.into();
    }

    pub fn dismiss_notice(&self) {
        lock(&self.ui).notice = None;
    }

    /// Switch the form to editing the cached employee `id`.
    pub fn begin_edit(&self, id: &RecordId) -> ActionOutcome {
        let Some(employee) = self.store.find_employee(id) else {
            self.set_form_status(StatusMessage::error(format!(
                "Employee #{} is not in the current list.",
                id
            )));
            return ActionOutcome::Skipped(SkipReason::UnknownRecord);
        };

        let status = lock(&self.edit).begin_edit(&employee);
        self.set_form_status(status);
        ActionOutcome::Succeeded
    }

    pub fn cancel_edit(&self) -> ActionOutcome {
        let status = lock(&self.edit).cancel();
        match status {
            Some(status) => {
                self.set_form_status(status);
                ActionOutcome::Succeeded
            }
            None => ActionOutcome::Skipped(SkipReason::Invalid),
        }
    }

    /// Replace the form contents with `form` and submit it.
    pub async fn submit_form(&self, form: EmployeeForm) -> ActionOutcome {
        self.set_form(form);
        self.submit().await
    }

    /// Submit the current form as a create (`Idle`) or update (`Editing`).
    ///
    /// On failure the session and the form are left exactly as they were so
    /// the user can retry. On success the form resets to `Idle`, discarding
    /// any edit begun while the request was in flight.
    pub async fn submit(&self) -> ActionOutcome {
        let Some(_guard) = self.affordances.try_acquire(Affordance::SubmitEmployee) else {
            return ActionOutcome::Skipped(SkipReason::Busy);
        };

        let request = {
            let edit = lock(&self.edit);
            if edit.form().name.trim().is_empty() {
                None
            } else {
                Some(edit.prepare_submit(edit.form()))
            }
        };
        let Some(request) = request else {
            self.set_form_status(StatusMessage::error("Name is required."));
            return ActionOutcome::Skipped(SkipReason::Invalid);
        };

        self.clear_form_status();
        let result = match &request.target {
            SubmitTarget::Create => self.api.create_employee(&request.payload).await,
            SubmitTarget::Update(id) => {
                self.api.update_employee(id, &request.payload).await
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(mode = ?request.target, "employee saved");
                self.set_form_status(StatusMessage::success(request.target.success_text()));
                lock(&self.edit).reset();
                self.reload_employees().await;
                ActionOutcome::Succeeded
            }
            Err(err) => {
                tracing::error!(error = %err, mode = ?request.target, "employee save failed");
                let text = err
                    .user_message()
                    .unwrap_or_else(|| request.target.fallback_error().to_string());
                self.set_form_status(StatusMessage::error(text));
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Delete employee `id` after confirmation.
    ///
    /// Success removes the row from the visible table right away, then
    /// reloads employees to resynchronize with the server.
    pub async fn delete_employee<C>(&self, id: &RecordId, confirm: &mut C) -> ActionOutcome
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_EMPLOYEE_PROMPT) {
            return ActionOutcome::Skipped(SkipReason::NotConfirmed);
        }
        let Some(_guard) = self
            .affordances
            .try_acquire(Affordance::DeleteEmployee(id.clone()))
        else {
            return ActionOutcome::Skipped(SkipReason::Busy);
        };

        match self.api.delete_employee(id).await {
            Ok(()) => {
                tracing::info!(%id, "employee deleted");
                self.hide_row(id);
                self.reload_employees().await;
                {
                    let mut edit = lock(&self.edit);
                    if edit.editing_id() == Some(id) {
                        edit.reset();
                    }
                }
                self.set_form_status(StatusMessage::success("Employee deleted."));
                ActionOutcome::Succeeded
            }
            Err(err) => {
                tracing::error!(error = %err, %id, "employee delete failed");
                lock(&self.ui).notice = Some(DELETE_EMPLOYEE_FAILED.to_string());
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Create a department named after the department input.
    pub async fn add_department(&self) -> ActionOutcome {
        let name = lock(&self.ui).department_input.trim().to_string();
        if name.is_empty() {
            self.set_department_status(StatusMessage::error("Please enter a department name."));
            return ActionOutcome::Skipped(SkipReason::Invalid);
        }

        let Some(_guard) = self.affordances.try_acquire(Affordance::AddDepartment) else {
            return ActionOutcome::Skipped(SkipReason::Busy);
        };

        let payload = DepartmentPayload { name };
        match self.api.create_department(&payload).await {
            Ok(()) => {
                tracing::info!(name = %payload.name, "department added");
                lock(&self.ui).department_input.clear();
                self.set_department_status(StatusMessage::success("Department added."));
                self.reload_departments().await;
                ActionOutcome::Succeeded
            }
            Err(err) => {
                tracing::error!(error = %err, name = %payload.name, "department create failed");
                let text = err
                    .user_message()
                    .unwrap_or_else(|| "Unable to add department.".to_string());
                self.set_department_status(StatusMessage::error(text));
                ActionOutcome::Failed(err)
            }
        }
    }

    pub async fn add_department_named(&self, name: &str) -> ActionOutcome {
        self.set_department_input(name);
        self.add_department().await
    }

    pub async fn delete_department<C>(&self, id: &RecordId, confirm: &mut C) -> ActionOutcome
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_DEPARTMENT_PROMPT) {
            return ActionOutcome::Skipped(SkipReason::NotConfirmed);
        }
        let Some(_guard) = self
            .affordances
            .try_acquire(Affordance::DeleteDepartment(id.clone()))
        else {
            return ActionOutcome::Skipped(SkipReason::Busy);
        };

        match self.api.delete_department(id).await {
            Ok(()) => {
                tracing::info!(%id, "department removed");
                self.set_department_status(StatusMessage::success("Department removed."));
                self.reload_departments().await;
                ActionOutcome::Succeeded
            }
            Err(err) => {
                tracing::error!(error = %err, %id, "department delete failed");
                let text = err
                    .user_message()
                    .unwrap_or_else(|| "Unable to remove department.".to_string());
                self.set_department_status(StatusMessage::error(text));
                ActionOutcome::Failed(err)
            }
        }
    }

    fn hide_row(&self, id: &RecordId) {
        let mut ui = lock(&self.ui);
        let remaining: Vec<Employee> = ui
            .visible_employees
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        ui.visible_employees = Arc::from(remaining);
    }

    fn set_form_status(&self, status: StatusMessage) {
        lock(&self.ui).form_status = Some(status);
    }

    fn clear_form_status(&self) {
        lock(&self.ui).form_status = None;
    }

    fn set_department_status(&self, status: StatusMessage) {
        lock(&self.ui).department_status = Some(status);
    }
}
