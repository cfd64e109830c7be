use std::collections::HashSet;
use std::sync::Mutex;

use roster_types::RecordId;
use serde::Serialize;

use crate::sync::lock;

/// A user-visible trigger that can be disabled while its request runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Affordance {
    SubmitEmployee,
    AddDepartment,
    DeleteEmployee(RecordId),
    DeleteDepartment(RecordId),
}

/// Set of currently disabled affordances.
///
/// Each affordance is independent: holding one never blocks another.
#[derive(Debug, Default)]
pub struct Affordances {
    busy: Mutex<HashSet<Affordance>>,
}

impl Affordances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable `affordance` until the returned guard drops.
    /// `None` if it is already disabled.
    pub fn try_acquire(&self, affordance: Affordance) -> Option<BusyGuard<'_>> {
        let mut busy = lock(&self.busy);
        if !busy.insert(affordance.clone()) {
            return None;
        }
        Some(BusyGuard {
            owner: self,
            affordance,
        })
    }

    pub fn is_disabled(&self, affordance: &Affordance) -> bool {
        lock(&self.busy).contains(affordance)
    }

    pub fn disabled(&self) -> Vec<Affordance> {
        lock(&self.busy).iter().cloned().collect()
    }
}

/// Re-enables its affordance on drop, on every exit path.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    owner: &'a Affordances,
    affordance: Affordance,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        lock(&self.owner.busy).remove(&self.affordance);
    }
}
