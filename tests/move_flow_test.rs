mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_move_employee_flow_success() {
    println!("\n\n[+] Running test: test_move_employee_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_department("Engineering").await;
    client.seed_department("Sales").await;
    ctx.db
        .add_employee(
            "Engineering",
            test_data::employee_with_email("Alice", "alice@example.com"),
        )
        .await
        .unwrap();

    let req = test::TestRequest::put()
        .uri("/api/employee/move")
        .set_json(json!({
            "current_department_name": "Engineering",
            "employee_name": "Alice",
            "new_department_name": "Sales",
            "new_location": "NY",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Employee 'Alice' successfully moved to department 'Sales' and located at 'NY'"
    );

    // The source record is retagged in place, not removed.
    let req = test::TestRequest::get()
        .uri("/api/department/employees?department_name=Engineering")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let source = body["employees"].as_array().unwrap();
    assert_eq!(source.len(), 1);
    assert_eq!(source[0]["name"], "Alice");
    assert_eq!(source[0]["department_name"], "Sales");
    assert_eq!(source[0]["location"], "NY");
    assert_eq!(source[0]["email"], "alice@example.com");
    assert!(source[0]["employee_id"].is_string());

    // The destination gains a second record reduced to name and location.
    let req = test::TestRequest::get()
        .uri("/api/department/employees?department_name=Sales")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let destination = body["employees"].as_array().unwrap();
    assert_eq!(destination.len(), 1);
    assert_eq!(destination[0]["name"], "Alice");
    assert_eq!(destination[0]["location"], "NY");
    assert!(destination[0].get("employee_id").is_none());
    assert!(destination[0].get("email").is_none());
    println!("[/] Test passed: move employee flow successful.");
}

#[tokio::test]
async fn test_move_employee_flow_source_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_department("Sales").await;

    let req = test::TestRequest::put()
        .uri("/api/employee/move")
        .set_json(json!({
            "current_department_name": "Engineering",
            "employee_name": "Alice",
            "new_department_name": "Sales",
            "new_location": "NY",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Employee 'Alice' not found in department 'Engineering'"
    );

    // The destination was never written.
    let req = test::TestRequest::get()
        .uri("/api/department/employees?department_name=Sales")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["employees"], json!([]));
}

#[tokio::test]
async fn test_move_employee_flow_destination_missing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_department("Engineering").await;
    client.seed_employee("Engineering", "Alice").await;

    let req = test::TestRequest::put()
        .uri("/api/employee/move")
        .set_json(json!({
            "current_department_name": "Engineering",
            "employee_name": "Alice",
            "new_department_name": "Sales",
            "new_location": "NY",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(
        body["message"],
        "Unable to move employee 'Alice' to department 'Sales'"
    );

    // The first write is already applied and stays applied.
    let req = test::TestRequest::get()
        .uri("/api/department/employee?department_name=Engineering&employee_name=Alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["employee"]["department_name"], "Sales");
    assert_eq!(body["employee"]["location"], "NY");
}

#[tokio::test]
async fn test_move_employee_flow_missing_fields() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for payload in [
        json!({}),
        json!({
            "current_department_name": "Engineering",
            "employee_name": "Alice",
            "new_department_name": "Sales",
        }),
        json!({
            "current_department_name": "Engineering",
            "employee_name": "Alice",
            "new_location": "NY",
        }),
    ] {
        let req = test::TestRequest::put()
            .uri("/api/employee/move")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "current_department_name, employee_name, new_department_name, and new_location are required"
        );
    }
}
