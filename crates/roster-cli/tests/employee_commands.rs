use roster_testing::{Method, TestWorld};

#[test]
fn test_add_then_list_shows_formatted_row() {
    let world = TestWorld::new();

    let add = world
        .run(&["employee", "add", "--name", "Ana", "--salary", "50000"])
        .unwrap();
    assert!(add.success(), "stderr: {}", add.stderr());
    assert!(add.stdout().contains("Employee added successfully!"));

    let list = world.run(&["employee", "list"]).unwrap();
    assert!(list.success());
    let row = list
        .stdout()
        .lines()
        .find(|line| line.contains("Ana"))
        .expect("row for Ana");
    assert!(row.contains("$50,000.00"));
    assert!(row.contains("—"), "blank department and hire date use a placeholder");
}

#[test]
fn test_add_sends_null_for_blank_fields() {
    let world = TestWorld::new();

    let result = world.run(&["employee", "add", "--name", "Bo"]).unwrap();
    assert!(result.success());

    let hits = world.server().hits();
    let (_, _, body) = hits
        .iter()
        .find(|(method, path, _)| *method == Method::POST && path == "/api/employees")
        .expect("create request");
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Bo",
            "department_id": null,
            "salary": null,
            "hire_date": null,
        })
    );
}

#[test]
fn test_rejected_add_exits_nonzero_with_server_message() {
    let world = TestWorld::new();

    let result = world
        .run(&["employee", "add", "--name", "Ana", "--salary", "lots"])
        .unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("`salary` must be numeric if provided.")
    );
    assert!(result.stdout().contains("HTTP status: 400"));
    assert!(!result.stderr().contains("Error:"));
    assert_eq!(world.server().backend().employee_count(), 0);
}

#[test]
fn test_blank_name_is_not_sent() {
    let world = TestWorld::new();

    let result = world.run(&["employee", "add", "--name", "   "]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("Name is required."));
    assert!(world.server().hits().is_empty());
}

#[test]
fn test_update_keeps_fields_that_were_not_given() {
    let world = TestWorld::new().with_department("Ops");
    let id = world
        .server()
        .backend()
        .seed_employee("Ana", Some(1), Some(4200.0), Some("2023-01-09"));

    let result = world
        .run(&["employee", "update", &id.to_string(), "--salary", "5000"])
        .unwrap();
    assert!(result.success(), "stdout: {}", result.stdout());
    assert!(result.stdout().contains("Employee updated successfully!"));

    let list = world.run(&["employee", "list"]).unwrap();
    let row = list
        .stdout()
        .lines()
        .find(|line| line.contains("Ana"))
        .expect("row for Ana");
    assert!(row.contains("Ops"));
    assert!(row.contains("$5,000.00"));
    assert!(row.contains("1/9/2023"));
}

#[test]
fn test_update_unknown_id_sends_nothing() {
    let world = TestWorld::new();

    let result = world.run(&["employee", "update", "41", "--name", "X"]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("Employee #41 is not in the current list."));
    assert!(
        world
            .server()
            .hits()
            .iter()
            .all(|(method, _, _)| *method == Method::GET)
    );
}

#[test]
fn test_delete_without_yes_is_declined_off_terminal() {
    let world = TestWorld::new();
    let id = world.server().backend().seed_employee("Ana", None, None, None);

    let result = world.run(&["employee", "delete", &id.to_string()]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Cancelled. Nothing was sent."));
    assert_eq!(world.server().backend().employee_count(), 1);
    assert!(world.server().hits().is_empty());
}

#[test]
fn test_delete_with_yes_removes_employee() {
    let world = TestWorld::new();
    let id = world.server().backend().seed_employee("Ana", None, None, None);

    let result = world
        .run(&["employee", "delete", &id.to_string(), "--yes"])
        .unwrap();

    assert!(result.success(), "stdout: {}", result.stdout());
    assert!(result.stdout().contains("Employee deleted."));
    assert_eq!(world.server().backend().employee_count(), 0);
}

#[test]
fn test_failed_delete_reports_generic_notice() {
    let world = TestWorld::new();

    let result = world.run(&["employee", "delete", "99", "-y"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("Failed to delete employee. Check the log for details.")
    );
    assert!(result.stdout().contains("HTTP status: 404"));
}

#[test]
fn test_list_json_keeps_raw_ids() {
    let world = TestWorld::new();
    world
        .server()
        .backend()
        .seed_employee("Ana", None, Some(1234.5), None);

    let result = world.run(&["--format", "json", "employee", "list"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    let row = &json["content"]["rows"][0];
    assert_eq!(row["id"], 1);
    assert_eq!(row["name"], "Ana");
    assert_eq!(row["salary"], "$1,234.50");
    assert_eq!(row["department"], "—");
}

#[test]
fn test_unreachable_server_lists_empty_table_with_warning() {
    let world = TestWorld::new()
        .without_server_flag()
        .with_env("ROSTER_SERVER", roster_testing::closed_port_url());

    let result = world.run(&["employee", "list"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Could not load employees"));
    assert!(result.stdout().contains("No employees found."));
    assert!(result.stdout().contains("roster config show"));
}
