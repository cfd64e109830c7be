use serde::{Deserialize, Serialize};

use crate::record::{Employee, RecordId};

/// Raw values of the employee form, exactly as typed or selected.
///
/// An empty string means "nothing entered"; the department field holds the
/// selected option value (empty for the "Select department" entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Form contents for editing a cached row. Every field is overwritten.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            department: employee
                .department_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            salary: employee
                .salary
                .as_ref()
                .map(|amount| amount.to_input())
                .unwrap_or_default(),
            hire_date: employee.hire_date.clone().unwrap_or_default(),
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    pub fn with_hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = hire_date.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// Optional fields always serialize, as `null` when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub department_id: Option<RecordId>,
    pub salary: Option<String>,
    pub hire_date: Option<String>,
}

impl EmployeePayload {
    pub fn from_form(form: &EmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            department_id: non_blank(&form.department).map(|v| RecordId::parse(&v)),
            salary: non_blank(&form.salary),
            hire_date: non_blank(&form.hire_date),
        }
    }
}

/// Body of `POST /api/departments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub name: String,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
