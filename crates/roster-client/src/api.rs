use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RequestError;
use crate::http::HttpClient;
use roster_types::{Department, DepartmentPayload, Employee, EmployeePayload, RecordId};

pub const DEPARTMENTS_PATH: &str = "/api/departments";
pub const EMPLOYEES_PATH: &str = "/api/employees";

pub fn department_path(id: &RecordId) -> String {
    format!("{}/{}", DEPARTMENTS_PATH, urlencoding::encode(&id.to_string()))
}

pub fn employee_path(id: &RecordId) -> String {
    format!("{}/{}", EMPLOYEES_PATH, urlencoding::encode(&id.to_string()))
}

/// The endpoints the client consumes.
///
/// Mutations return `()` on purpose: whatever the server echoes back is never
/// merged into cached state, callers reload the affected list instead.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn list_departments(&self) -> Result<Vec<Department>, RequestError>;
    async fn create_department(&self, payload: &DepartmentPayload) -> Result<(), RequestError>;
    async fn delete_department(&self, id: &RecordId) -> Result<(), RequestError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, RequestError>;
    async fn create_employee(&self, payload: &EmployeePayload) -> Result<(), RequestError>;
    async fn update_employee(
        &self,
        id: &RecordId,
        payload: &EmployeePayload,
    ) -> Result<(), RequestError>;
    async fn delete_employee(&self, id: &RecordId) -> Result<(), RequestError>;
}

#[async_trait]
impl RemoteApi for HttpClient {
    async fn list_departments(&self) -> Result<Vec<Department>, RequestError> {
        let value = self.request(DEPARTMENTS_PATH, Method::GET, None).await?;
        decode_list(DEPARTMENTS_PATH, value)
    }

    async fn create_department(&self, payload: &DepartmentPayload) -> Result<(), RequestError> {
        let body = encode(payload)?;
        self.request(DEPARTMENTS_PATH, Method::POST, Some(&body))
            .await
            .map(|_| ())
    }

    async fn delete_department(&self, id: &RecordId) -> Result<(), RequestError> {
        self.request(&department_path(id), Method::DELETE, None)
            .await
            .map(|_| ())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, RequestError> {
        let value = self.request(EMPLOYEES_PATH, Method::GET, None).await?;
        decode_list(EMPLOYEES_PATH, value)
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<(), RequestError> {
        let body = encode(payload)?;
        self.request(EMPLOYEES_PATH, Method::POST, Some(&body))
            .await
            .map(|_| ())
    }

    async fn update_employee(
        &self,
        id: &RecordId,
        payload: &EmployeePayload,
    ) -> Result<(), RequestError> {
        let body = encode(payload)?;
        self.request(&employee_path(id), Method::PUT, Some(&body))
            .await
            .map(|_| ())
    }

    async fn delete_employee(&self, id: &RecordId) -> Result<(), RequestError> {
        self.request(&employee_path(id), Method::DELETE, None)
            .await
            .map(|_| ())
    }
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<Value, RequestError> {
    serde_json::to_value(payload).map_err(|err| RequestError::Parse(err.to_string()))
}

fn decode_list<T: DeserializeOwned>(
    path: &str,
    value: Option<Value>,
) -> Result<Vec<T>, RequestError> {
    let value = value
        .ok_or_else(|| RequestError::Parse(format!("GET {}: expected a JSON array", path)))?;
    serde_json::from_value(value).map_err(|err| RequestError::Parse(format!("GET {}: {}", path, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(employee_path(&RecordId::Number(5)), "/api/employees/5");
        assert_eq!(department_path(&RecordId::Number(2)), "/api/departments/2");
        assert_eq!(
            employee_path(&RecordId::Text("a b/c".to_string())),
            "/api/employees/a%20b%2Fc"
        );
        assert_eq!(
            department_path(&RecordId::Text("r&d?x=1".to_string())),
            "/api/departments/r%26d%3Fx%3D1"
        );
    }

    #[test]
    fn test_decode_list_requires_body() {
        let err = decode_list::<Department>(DEPARTMENTS_PATH, None).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_decode_list_rejects_wrong_shape() {
        let err =
            decode_list::<Department>(DEPARTMENTS_PATH, Some(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_decode_list_keeps_server_order() {
        let list: Vec<Department> = decode_list(
            DEPARTMENTS_PATH,
            Some(json!([{"id": 2, "name": "Sales"}, {"id": 1, "name": "Ops"}])),
        )
        .unwrap();
        let names: Vec<&str> = list.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Ops"]);
    }
}
