use axum::http::StatusCode;
use ems_tests::{request, sqlite_app};
use platform_db::{NewEmployee, employee_count, find_employee, save_employee, save_employees};
use serde_json::json;

fn new_employee(first_name: &str, last_name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    }
}

#[tokio::test]
async fn create_employee_persists_and_returns_record() {
    let (db, router) = sqlite_app().await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/employees",
        Some(json!({
            "firstName": "Ramesh",
            "lastName": "Fadatare",
            "email": "ramesh@gmail.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let saved = body.expect("create response body");
    assert_eq!(saved["firstName"], "Ramesh");
    assert_eq!(saved["lastName"], "Fadatare");
    assert_eq!(saved["email"], "ramesh@gmail.com");

    let id = saved["id"].as_i64().expect("assigned id");
    let stored = find_employee(db.as_ref(), id)
        .await
        .unwrap()
        .expect("record persisted");
    assert_eq!(stored.first_name, "Ramesh");
}

#[tokio::test]
async fn list_employees_returns_every_stored_record() {
    let (db, router) = sqlite_app().await;
    save_employees(
        db.as_ref(),
        vec![
            new_employee("Ramesh", "Fadatare", "ramesh@gmail.com"),
            new_employee("Tony", "Stark", "tony@gmail.com"),
        ],
    )
    .await
    .unwrap();

    let (status, body) = request(&router, "GET", "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.expect("list body");
    let count = employee_count(db.as_ref()).await.unwrap();
    assert_eq!(listed.as_array().unwrap().len() as u64, count);
    assert_eq!(count, 2);
}

#[tokio::test]
async fn list_employees_is_empty_array_without_records() {
    let (_db, router) = sqlite_app().await;

    let (status, body) = request(&router, "GET", "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("list body"), json!([]));
}

#[tokio::test]
async fn get_employee_returns_record_when_present() {
    let (db, router) = sqlite_app().await;
    let saved = save_employee(
        db.as_ref(),
        new_employee("Ramesh", "Fadatare", "ramesh@gmail.com"),
    )
    .await
    .unwrap();

    let (status, body) = request(&router, "GET", &format!("/api/employees/{}", saved.id), None).await;

    assert_eq!(status, StatusCode::OK);
    let found = body.expect("get body");
    assert_eq!(found["id"], saved.id);
    assert_eq!(found["firstName"], "Ramesh");
    assert_eq!(found["lastName"], "Fadatare");
    assert_eq!(found["email"], "ramesh@gmail.com");
}

#[tokio::test]
async fn get_employee_returns_404_when_missing() {
    let (_db, router) = sqlite_app().await;

    let (status, body) = request(&router, "GET", "/api/employees/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());
}

#[tokio::test]
async fn update_employee_overwrites_fields_and_keeps_id() {
    let (db, router) = sqlite_app().await;
    let saved = save_employee(
        db.as_ref(),
        new_employee("Ramesh", "Fadatare", "ramesh@gmail.com"),
    )
    .await
    .unwrap();

    let (status, body) = request(
        &router,
        "PUT",
        &format!("/api/employees/{}", saved.id),
        Some(json!({
            "firstName": "Ram",
            "lastName": "Jadav",
            "email": "ram@gmail.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = body.expect("update body");
    assert_eq!(updated["id"], saved.id);
    assert_eq!(updated["firstName"], "Ram");
    assert_eq!(updated["lastName"], "Jadav");
    assert_eq!(updated["email"], "ram@gmail.com");

    let stored = find_employee(db.as_ref(), saved.id)
        .await
        .unwrap()
        .expect("record still present");
    assert_eq!(stored.first_name, "Ram");
    assert_eq!(stored.email, "ram@gmail.com");
}

#[tokio::test]
async fn update_employee_returns_404_when_missing() {
    let (_db, router) = sqlite_app().await;

    let (status, body) = request(
        &router,
        "PUT",
        "/api/employees/42",
        Some(json!({
            "firstName": "Ram",
            "lastName": "Jadav",
            "email": "ram@gmail.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());
}

#[tokio::test]
async fn delete_employee_returns_ok_for_any_id() {
    let (db, router) = sqlite_app().await;
    let saved = save_employee(
        db.as_ref(),
        new_employee("Ramesh", "Fadatare", "ramesh@gmail.com"),
    )
    .await
    .unwrap();

    let uri = format!("/api/employees/{}", saved.id);
    let (status, body) = request(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_none());

    // Idempotent: the record is gone, a second delete still succeeds.
    let (status, _) = request(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employee_lifecycle_roundtrip() {
    let (_db, router) = sqlite_app().await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/employees",
        Some(json!({
            "firstName": "Ramesh",
            "lastName": "Fadatare",
            "email": "ramesh@gmail.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body.expect("create body")["id"].as_i64().unwrap();
    let uri = format!("/api/employees/{id}");

    let (status, body) = request(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("get body")["email"], "ramesh@gmail.com");

    let (status, body) = request(
        &router,
        "PUT",
        &uri,
        Some(json!({
            "firstName": "Ram",
            "lastName": "Jadav",
            "email": "ram@gmail.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("update body")["firstName"], "Ram");

    let (status, _) = request(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_database_reachable() {
    let (_db, router) = sqlite_app().await;

    let (status, body) = request(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let health = body.expect("health body");
    assert_eq!(health["ok"], true);
    assert_eq!(health["db_ok"], true);
}
