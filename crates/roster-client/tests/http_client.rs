use roster_client::{HttpClient, Method, RemoteApi, RequestError};
use roster_testing::{Backend, StubServer, closed_port_url};
use roster_types::{Amount, DepartmentPayload, EmployeePayload, RecordId};

fn server_with_staff() -> StubServer {
    let mut backend = Backend::new();
    let ops = backend.seed_department("Ops");
    backend.seed_department("design");
    backend.seed_employee("Ana", Some(ops), Some(50000.0), Some("2024-03-01"));
    StubServer::with_backend(backend).unwrap()
}

#[tokio::test]
async fn test_list_endpoints_decode_records() {
    let server = server_with_staff();
    let client = HttpClient::new(&server.base_url()).unwrap();

    let departments = client.list_departments().await.unwrap();
    let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["design", "Ops"]);

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, RecordId::Number(1));
    assert_eq!(employees[0].department_name.as_deref(), Some("Ops"));
    assert_eq!(employees[0].salary, Some(Amount::Number(50000.0)));
}

#[tokio::test]
async fn test_create_sends_json_with_nulls() {
    let server = StubServer::start().unwrap();
    let client = HttpClient::new(&server.base_url()).unwrap();

    let payload = EmployeePayload {
        name: "Ana".to_string(),
        department_id: None,
        salary: None,
        hire_date: None,
    };
    client.create_employee(&payload).await.unwrap();

    let hits = server.hits();
    assert_eq!(hits.len(), 1);
    let (method, path, body) = &hits[0];
    assert_eq!(method, &Method::POST);
    assert_eq!(path, "/api/employees");
    let sent: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({ "name": "Ana", "department_id": null, "salary": null, "hire_date": null })
    );
    assert_eq!(server.backend().employee_count(), 1);
}

#[tokio::test]
async fn test_no_content_is_success() {
    let server = server_with_staff();
    let client = HttpClient::new(&server.base_url()).unwrap();

    client.delete_employee(&RecordId::Number(1)).await.unwrap();
    client.delete_department(&RecordId::Number(2)).await.unwrap();

    assert_eq!(server.backend().employee_count(), 0);
    assert_eq!(server.backend().department_count(), 1);
}

#[tokio::test]
async fn test_rejection_keeps_body_verbatim() {
    let server = server_with_staff();
    let client = HttpClient::new(&server.base_url()).unwrap();

    let err = client
        .delete_department(&RecordId::Number(1))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RequestError::Rejected {
            status: 400,
            message: "\"Cannot delete a department that still has employees.\"".to_string(),
        }
    );
    assert_eq!(
        err.user_message().as_deref(),
        Some("Cannot delete a department that still has employees.")
    );
}

#[tokio::test]
async fn test_plain_text_rejection() {
    let server = StubServer::start().unwrap();
    server.respond_once(Method::POST, "/api/departments", 500, "database is locked");
    let client = HttpClient::new(&server.base_url()).unwrap();

    let err = client
        .create_department(&DepartmentPayload {
            name: "Ops".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "database is locked");
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = StubServer::start().unwrap();
    server.respond_once(Method::GET, "/api/employees", 200, "<html>oops</html>");
    let client = HttpClient::new(&server.base_url()).unwrap();

    let err = client.list_employees().await.unwrap_err();

    assert!(matches!(err, RequestError::Parse(_)));
}

#[tokio::test]
async fn test_text_ids_are_path_encoded() {
    let server = StubServer::start().unwrap();
    let client = HttpClient::new(&server.base_url()).unwrap();

    let err = client
        .delete_employee(&RecordId::Text("a b".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(server.hits()[0].1, "/api/employees/a%20b");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = HttpClient::new(&closed_port_url()).unwrap();

    let err = client.list_departments().await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
    assert_eq!(err.status(), None);
}
