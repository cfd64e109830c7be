//! In-memory stand-in for the employee/department service.
//!
//! Shared by [`FakeApi`](crate::FakeApi) and [`StubServer`](crate::StubServer)
//! so both doubles enforce the same validation and ordering rules:
//! - departments list ordered by name, case-insensitively
//! - employees list newest first, with the department name joined in
//! - department names are unique ignoring case
//! - a department that still has employees cannot be deleted

use serde_json::{Map, Value, json};

/// A failed call: HTTP status plus the plain message the service reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub message: String,
}

impl Rejection {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Body as the service sends it: the message as a JSON string literal.
    pub fn body(&self) -> String {
        Value::String(self.message.clone()).to_string()
    }
}

/// A successful call: HTTP status plus an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    fn created(body: Value) -> Self {
        Self {
            status: 201,
            body: Some(body),
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}

pub type Outcome = Result<Reply, Rejection>;

#[derive(Debug, Clone)]
struct StoredDepartment {
    id: i64,
    name: String,
}

#[derive(Debug, Clone)]
struct StoredEmployee {
    id: i64,
    name: String,
    department_id: Option<i64>,
    salary: Option<f64>,
    hire_date: Option<String>,
}

#[derive(Debug, Default)]
struct EmployeeChanges {
    name: Option<String>,
    department_id: Option<Option<i64>>,
    salary: Option<Option<f64>>,
    hire_date: Option<Option<String>>,
}

impl EmployeeChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department_id.is_none()
            && self.salary.is_none()
            && self.hire_date.is_none()
    }
}

#[derive(Debug, Default)]
pub struct Backend {
    departments: Vec<StoredDepartment>,
    employees: Vec<StoredEmployee>,
    last_department_id: i64,
    last_employee_id: i64,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a department directly, bypassing validation. Returns its id.
    pub fn seed_department(&mut self, name: &str) -> i64 {
        self.last_department_id += 1;
        self.departments.push(StoredDepartment {
            id: self.last_department_id,
            name: name.to_string(),
        });
        self.last_department_id
    }

    /// Insert an employee directly, bypassing validation. Returns its id.
    pub fn seed_employee(
        &mut self,
        name: &str,
        department_id: Option<i64>,
        salary: Option<f64>,
        hire_date: Option<&str>,
    ) -> i64 {
        self.last_employee_id += 1;
        self.employees.push(StoredEmployee {
            id: self.last_employee_id,
            name: name.to_string(),
            department_id,
            salary,
            hire_date: hire_date.map(str::to_string),
        });
        self.last_employee_id
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn list_departments(&self) -> Outcome {
        let mut rows = self.departments.clone();
        rows.sort_by_key(|d| d.name.to_lowercase());
        Ok(Reply::ok(Value::Array(
            rows.iter().map(department_json).collect(),
        )))
    }

    pub fn create_department(&mut self, payload: &Value) -> Outcome {
        let name = match payload.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                return Err(Rejection::new(
                    400,
                    "`name` is required and must be a non-empty string.",
                ));
            }
        };

        let lowered = name.to_lowercase();
        if self
            .departments
            .iter()
            .any(|d| d.name.to_lowercase() == lowered)
        {
            return Err(Rejection::new(
                409,
                "A department with that name already exists.",
            ));
        }

        let id = self.seed_department(&name);
        Ok(Reply::created(json!({ "id": id, "name": name })))
    }

    pub fn delete_department(&mut self, id: &str) -> Outcome {
        let id = parse_path_id(id)?;
        if self.employees.iter().any(|e| e.department_id == Some(id)) {
            return Err(Rejection::new(
                400,
                "Cannot delete a department that still has employees.",
            ));
        }
        let before = self.departments.len();
        self.departments.retain(|d| d.id != id);
        if self.departments.len() == before {
            return Err(Rejection::new(404, format!("Department {} not found.", id)));
        }
        Ok(Reply::no_content())
    }

    pub fn list_employees(&self) -> Outcome {
        let mut rows: Vec<&StoredEmployee> = self.employees.iter().collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(Reply::ok(Value::Array(
            rows.into_iter().map(|e| self.employee_json(e)).collect(),
        )))
    }

    pub fn create_employee(&mut self, payload: &Value) -> Outcome {
        let changes = normalize_employee(payload, false)?;
        self.last_employee_id += 1;
        let employee = StoredEmployee {
            id: self.last_employee_id,
            name: changes.name.unwrap_or_default(),
            department_id: changes.department_id.flatten(),
            salary: changes.salary.flatten(),
            hire_date: changes.hire_date.flatten(),
        };
        let body = self.employee_json(&employee);
        self.employees.push(employee);
        Ok(Reply::created(body))
    }

    pub fn update_employee(&mut self, id: &str, payload: &Value) -> Outcome {
        let id = parse_path_id(id)?;
        if payload.as_object().is_none_or(Map::is_empty) {
            return Err(Rejection::new(400, "Request body cannot be empty."));
        }
        let changes = normalize_employee(payload, true)?;
        if changes.is_empty() {
            return Err(Rejection::new(400, "No valid fields provided for update."));
        }

        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return Err(Rejection::new(404, format!("Employee {} not found.", id)));
        };
        let employee = &mut self.employees[index];
        if let Some(name) = changes.name {
            employee.name = name;
        }
        if let Some(department_id) = changes.department_id {
            employee.department_id = department_id;
        }
        if let Some(salary) = changes.salary {
            employee.salary = salary;
        }
        if let Some(hire_date) = changes.hire_date {
            employee.hire_date = hire_date;
        }

        let body = self.employee_json(&self.employees[index]);
        Ok(Reply::ok(body))
    }

    pub fn delete_employee(&mut self, id: &str) -> Outcome {
        let id = parse_path_id(id)?;
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() == before {
            return Err(Rejection::new(404, format!("Employee {} not found.", id)));
        }
        Ok(Reply::no_content())
    }

    fn employee_json(&self, employee: &StoredEmployee) -> Value {
        let department_name = employee.department_id.and_then(|id| {
            self.departments
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.name.clone())
        });
        json!({
            "id": employee.id,
            "name": employee.name,
            "department_id": employee.department_id,
            "department_name": department_name,
            "salary": employee.salary,
            "hire_date": employee.hire_date,
        })
    }
}

fn department_json(department: &StoredDepartment) -> Value {
    json!({ "id": department.id, "name": department.name })
}

fn parse_path_id(id: &str) -> Result<i64, Rejection> {
    id.parse::<i64>()
        .map_err(|_| Rejection::new(404, "The requested URL was not found on the server."))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn normalize_employee(payload: &Value, allow_partial: bool) -> Result<EmployeeChanges, Rejection> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let mut changes = EmployeeChanges::default();

    if fields.contains_key("name") || !allow_partial {
        match fields.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => changes.name = Some(name.trim().to_string()),
            _ => {
                return Err(Rejection::new(
                    400,
                    "`name` is required and must be a non-empty string.",
                ));
            }
        }
    }

    if let Some(value) = fields.get("department_id") {
        let parsed = if is_blank(value) {
            None
        } else {
            let id = match value {
                Value::Number(n) => n.as_i64(),
                Value::String(s) if is_digits(s.trim()) => s.trim().parse().ok(),
                _ => None,
            };
            Some(id.ok_or_else(|| {
                Rejection::new(400, "`department_id` must be an integer if provided.")
            })?)
        };
        changes.department_id = Some(parsed);
    }

    if let Some(value) = fields.get("salary") {
        let parsed = if is_blank(value) {
            None
        } else {
            let amount = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            Some(amount.ok_or_else(|| {
                Rejection::new(400, "`salary` must be numeric if provided.")
            })?)
        };
        changes.salary = Some(parsed);
    }

    if let Some(value) = fields.get("hire_date") {
        let parsed = if is_blank(value) {
            None
        } else {
            match value.as_str() {
                Some(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => {
                    return Err(Rejection::new(
                        400,
                        "`hire_date` must be a non-empty string if provided.",
                    ));
                }
            }
        };
        changes.hire_date = Some(parsed);
    }

    Ok(changes)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departments_sorted_ignoring_case() {
        let mut backend = Backend::new();
        backend.seed_department("ops");
        backend.seed_department("Engineering");
        backend.seed_department("Design");

        let body = backend.list_departments().unwrap().body.unwrap();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Design", "Engineering", "ops"]);
    }

    #[test]
    fn test_duplicate_department_conflicts() {
        let mut backend = Backend::new();
        backend.seed_department("Ops");
        let err = backend.create_department(&json!({ "name": " ops " })).unwrap_err();
        assert_eq!(err.status, 409);
        assert_eq!(err.body(), "\"A department with that name already exists.\"");
    }

    #[test]
    fn test_department_in_use_cannot_be_deleted() {
        let mut backend = Backend::new();
        let ops = backend.seed_department("Ops");
        backend.seed_employee("Ana", Some(ops), None, None);

        let err = backend.delete_department(&ops.to_string()).unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(backend.department_count(), 1);
    }

    #[test]
    fn test_employees_newest_first_with_department_name() {
        let mut backend = Backend::new();
        let ops = backend.seed_department("Ops");
        backend
            .create_employee(&json!({ "name": "Ana", "department_id": ops.to_string(), "salary": "50000" }))
            .unwrap();
        backend.create_employee(&json!({ "name": "Bo" })).unwrap();

        let body = backend.list_employees().unwrap().body.unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows[0]["name"], "Bo");
        assert_eq!(rows[1]["department_name"], "Ops");
        assert_eq!(rows[1]["salary"], 50000.0);
    }

    #[test]
    fn test_non_numeric_salary_rejected() {
        let mut backend = Backend::new();
        let err = backend
            .create_employee(&json!({ "name": "Ana", "salary": "lots" }))
            .unwrap_err();
        assert_eq!(err.message, "`salary` must be numeric if provided.");
    }

    #[test]
    fn test_update_unknown_employee_is_not_found() {
        let mut backend = Backend::new();
        let err = backend
            .update_employee("41", &json!({ "name": "Ana" }))
            .unwrap_err();
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "Employee 41 not found.");
    }
}
