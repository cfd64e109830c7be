use roster_testing::{Method, TestWorld};

#[test]
fn test_add_and_list_departments_sorted() {
    let world = TestWorld::new().with_department("sales");

    let result = world.run(&["department", "add", "  Ops  "]).unwrap();
    assert!(result.success(), "stdout: {}", result.stdout());
    assert!(result.stdout().contains("Department added."));

    let list = world.run(&["department", "list"]).unwrap();
    assert!(list.success());
    let ops = list.stdout().find("Ops").expect("Ops listed");
    let sales = list.stdout().find("sales").expect("sales listed");
    assert!(ops < sales);
}

#[test]
fn test_duplicate_department_is_rejected() {
    let world = TestWorld::new().with_department("Ops");

    let result = world.run(&["department", "add", "ops"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("A department with that name already exists.")
    );
    assert!(!result.stdout().contains("\"A department"));
    assert_eq!(world.server().backend().department_count(), 1);
}

#[test]
fn test_blank_department_name_is_not_sent() {
    let world = TestWorld::new();

    let result = world.run(&["department", "add", "   "]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("Please enter a department name."));
    assert!(world.server().hits().is_empty());
}

#[test]
fn test_department_in_use_is_kept() {
    let world = TestWorld::new().with_department("Ops");
    world
        .server()
        .backend()
        .seed_employee("Ana", Some(1), None, None);

    let result = world.run(&["department", "delete", "1", "--yes"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("Cannot delete a department that still has employees.")
    );
    assert_eq!(world.server().backend().department_count(), 1);
}

#[test]
fn test_delete_unused_department() {
    let world = TestWorld::new().with_department("Ops");

    let result = world.run(&["department", "delete", "1", "--yes"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Department removed."));
    assert_eq!(world.server().backend().department_count(), 0);
    assert!(
        world
            .server()
            .hits()
            .iter()
            .any(|(method, path, _)| *method == Method::DELETE && path == "/api/departments/1")
    );
}

#[test]
fn test_delete_department_without_yes_is_declined() {
    let world = TestWorld::new().with_department("Ops");

    let result = world.run(&["department", "delete", "1"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Cancelled. Nothing was sent."));
    assert_eq!(world.server().backend().department_count(), 1);
}

#[test]
fn test_json_action_result() {
    let world = TestWorld::new();

    let result = world
        .run(&["--format", "json", "department", "add", "Ops"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "add_department");
    assert_eq!(json["content"]["state"], "succeeded");
    assert_eq!(json["badge"]["label"], "Department added.");
}
