//! `RemoteApi` double backed by the in-memory [`Backend`].
//!
//! Every call is recorded, and a failure can be scripted for the next call
//! to any endpoint. Each method yields to the scheduler once before touching
//! the backend, so concurrently polled actions really interleave. A call can
//! also be held open at a [`Gate`] to observe state mid-action.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use roster_client::{RemoteApi, RequestError};
use roster_types::{Department, DepartmentPayload, Employee, EmployeePayload, RecordId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Notify;

use crate::backend::{Backend, Outcome, Rejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListDepartments,
    CreateDepartment,
    DeleteDepartment,
    ListEmployees,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListDepartments,
    CreateDepartment(DepartmentPayload),
    DeleteDepartment(RecordId),
    ListEmployees,
    CreateEmployee(EmployeePayload),
    UpdateEmployee(RecordId, EmployeePayload),
    DeleteEmployee(RecordId),
}

impl Call {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Call::ListDepartments => Endpoint::ListDepartments,
            Call::CreateDepartment(_) => Endpoint::CreateDepartment,
            Call::DeleteDepartment(_) => Endpoint::DeleteDepartment,
            Call::ListEmployees => Endpoint::ListEmployees,
            Call::CreateEmployee(_) => Endpoint::CreateEmployee,
            Call::UpdateEmployee(..) => Endpoint::UpdateEmployee,
            Call::DeleteEmployee(_) => Endpoint::DeleteEmployee,
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::ListDepartments | Call::ListEmployees)
    }
}

/// Pause point for one held call.
///
/// The call is recorded, then waits at the gate before it reaches the
/// backend.
#[derive(Debug, Default)]
pub struct Gate {
    arrived: Notify,
    opened: Notify,
}

impl Gate {
    /// Resolves once the held call is waiting at the gate.
    pub async fn reached(&self) {
        self.arrived.notified().await;
    }

    /// Let the held call through.
    pub fn release(&self) {
        self.opened.notify_one();
    }
}

#[derive(Debug, Default)]
pub struct FakeApi {
    backend: Mutex<Backend>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<Endpoint, VecDeque<RequestError>>>,
    gates: Mutex<HashMap<Endpoint, VecDeque<Arc<Gate>>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend: Mutex::new(backend),
            ..Self::default()
        }
    }

    /// Seed or inspect the backing data.
    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap()
    }

    /// Make the next call to `endpoint` fail with `error` instead of
    /// reaching the backend.
    pub fn fail_next(&self, endpoint: Endpoint, error: RequestError) {
        self.failures
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(error);
    }

    /// Script a rejection the way the service reports it: the message
    /// arrives as a JSON string literal.
    pub fn reject_next(&self, endpoint: Endpoint, status: u16, message: &str) {
        self.fail_next(
            endpoint,
            RequestError::Rejected {
                status,
                message: Value::String(message.to_string()).to_string(),
            },
        );
    }

    /// Hold the next call to `endpoint` until the returned gate is released.
    pub fn hold_next(&self, endpoint: Endpoint) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.gates
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    async fn dispatch(
        &self,
        call: Call,
        run: impl FnOnce(&mut Backend) -> Outcome,
    ) -> Result<Option<Value>, RequestError> {
        tokio::task::yield_now().await;

        let endpoint = call.endpoint();
        self.calls.lock().unwrap().push(call);

        let gate = self
            .gates
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            gate.arrived.notify_one();
            gate.opened.notified().await;
        }

        let scripted = self
            .failures
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);
        if let Some(error) = scripted {
            return Err(error);
        }

        let outcome = run(&mut self.backend.lock().unwrap());
        outcome.map(|reply| reply.body).map_err(into_request_error)
    }
}

fn into_request_error(rejection: Rejection) -> RequestError {
    RequestError::Rejected {
        status: rejection.status,
        message: rejection.body(),
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<Vec<T>, RequestError> {
    let value = value.ok_or_else(|| RequestError::Parse("expected a JSON array".to_string()))?;
    serde_json::from_value(value).map_err(|err| RequestError::Parse(err.to_string()))
}

fn to_value<T: serde::Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

#[async_trait]
impl RemoteApi for FakeApi {
    async fn list_departments(&self) -> Result<Vec<Department>, RequestError> {
        let body = self
            .dispatch(Call::ListDepartments, |b| b.list_departments())
            .await?;
        decode(body)
    }

    async fn create_department(&self, payload: &DepartmentPayload) -> Result<(), RequestError> {
        let body = to_value(payload);
        self.dispatch(Call::CreateDepartment(payload.clone()), |b| {
            b.create_department(&body)
        })
        .await
        .map(|_| ())
    }

    async fn delete_department(&self, id: &RecordId) -> Result<(), RequestError> {
        let key = id.to_string();
        self.dispatch(Call::DeleteDepartment(id.clone()), |b| {
            b.delete_department(&key)
        })
        .await
        .map(|_| ())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, RequestError> {
        let body = self
            .dispatch(Call::ListEmployees, |b| b.list_employees())
            .await?;
        decode(body)
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<(), RequestError> {
        let body = to_value(payload);
        self.dispatch(Call::CreateEmployee(payload.clone()), |b| {
            b.create_employee(&body)
        })
        .await
        .map(|_| ())
    }

    async fn update_employee(
        &self,
        id: &RecordId,
        payload: &EmployeePayload,
    ) -> Result<(), RequestError> {
        let key = id.to_string();
        let body = to_value(payload);
        self.dispatch(Call::UpdateEmployee(id.clone(), payload.clone()), |b| {
            b.update_employee(&key, &body)
        })
        .await
        .map(|_| ())
    }

    async fn delete_employee(&self, id: &RecordId) -> Result<(), RequestError> {
        let key = id.to_string();
        self.dispatch(Call::DeleteEmployee(id.clone()), |b| b.delete_employee(&key))
            .await
            .map(|_| ())
    }
}
