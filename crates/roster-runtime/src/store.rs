//! Process-local cache of the last fetched department and employee lists.
//!
//! Each list is an immutable `Arc` slice swapped wholesale by the reload
//! operations, so readers always hold one complete snapshot.

use std::sync::{Arc, RwLock};

use roster_client::{RemoteApi, RequestError};
use roster_types::{Department, Employee, RecordId};

use crate::sync::{read, write};

/// What a reload did to its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// List replaced with `count` fresh records
    Loaded(usize),
    /// Fetch failed; list replaced with an empty one
    FailedOpen(RequestError),
}

impl ReloadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ReloadOutcome::Loaded(_))
    }
}

#[derive(Debug)]
pub struct RecordStore {
    departments: RwLock<Arc<[Department]>>,
    employees: RwLock<Arc<[Employee]>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            departments: RwLock::new(Arc::from(Vec::new())),
            employees: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departments(&self) -> Arc<[Department]> {
        read(&self.departments).clone()
    }

    pub fn employees(&self) -> Arc<[Employee]> {
        read(&self.employees).clone()
    }

    pub fn find_employee(&self, id: &RecordId) -> Option<Employee> {
        read(&self.employees).iter().find(|e| &e.id == id).cloned()
    }

    pub fn find_department(&self, id: &RecordId) -> Option<Department> {
        read(&self.departments).iter().find(|d| &d.id == id).cloned()
    }

    pub async fn reload_departments<A>(&self, api: &A) -> ReloadOutcome
    where
        A: RemoteApi + ?Sized,
    {
        match api.list_departments().await {
            Ok(departments) => {
                let count = departments.len();
                *write(&self.departments) = Arc::from(departments);
                tracing::debug!(count, "departments reloaded");
                ReloadOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, endpoint = roster_client::DEPARTMENTS_PATH, "failed to load departments");
                *write(&self.departments) = Arc::from(Vec::new());
                ReloadOutcome::FailedOpen(err)
            }
        }
    }

    pub async fn reload_employees<A>(&self, api: &A) -> ReloadOutcome
    where
        A: RemoteApi + ?Sized,
    {
        match api.list_employees().await {
            Ok(employees) => {
                let count = employees.len();
                *write(&self.employees) = Arc::from(employees);
                tracing::debug!(count, "employees reloaded");
                ReloadOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, endpoint = roster_client::EMPLOYEES_PATH, "failed to load employees");
                *write(&self.employees) = Arc::from(Vec::new());
                ReloadOutcome::FailedOpen(err)
            }
        }
    }
}
