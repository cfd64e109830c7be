pub mod form;
pub mod record;

pub use form::{DepartmentPayload, EmployeeForm, EmployeePayload};
pub use record::{Amount, Department, Employee, RecordId};
