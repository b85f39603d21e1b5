//! Integration tests for the leave limit override endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_list_and_employee_view() {
    let app = helpers::TestApp::new().await;
    let hr = app.create_test_user("hradmin").await;
    let employee = app
        .create_test_employee("Maria", "Santos", "EMP-0001", "Finance")
        .await;

    // Create an override with no effective window
    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Sick Leave",
                "max_days_per_month": 3,
                "max_paid_requests_per_year": 2,
            })),
            Some(hr),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], json!(true));
    assert_eq!(resp.body["data"]["employee"]["name"], json!("Maria Santos"));
    assert_eq!(
        resp.body["data"]["created_by"]["name"],
        json!("hradmin (HR)")
    );

    // Visible in the filtered list
    let resp = app
        .request(
            "GET",
            "/api/employee-leave-limits?leave_type=Sick%20Leave",
            None,
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(resp.body["pagination"]["total"], json!(1));
    assert_eq!(resp.body["pagination"]["current_page"], json!(1));

    // Visible on the employee view
    let resp = app
        .request(
            "GET",
            &format!("/api/employee-leave-limits/employee/{employee}"),
            None,
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["limits"].as_array().unwrap().len(), 1);
    assert_eq!(
        resp.body["data"]["limits"][0]["leave_type"],
        json!("Sick Leave")
    );
}

#[tokio::test]
async fn test_upsert_merges_into_existing_active_row() {
    let app = helpers::TestApp::new().await;
    let hr = app.create_test_user("hradmin").await;
    let second_hr = app.create_test_user("hrlead").await;
    let employee = app
        .create_test_employee("Jose", "Reyes", "EMP-0002", "Operations")
        .await;

    let payload = |days: i32| {
        json!({
            "employee_id": employee,
            "leave_type": "Vacation Leave",
            "max_days_per_month": days,
            "max_paid_requests_per_year": 4,
        })
    };

    let first = app
        .request("POST", "/api/employee-leave-limits", Some(payload(5)), Some(hr))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let first_id = first.body["data"]["id"].clone();
    let first_created_at = first.body["data"]["created_at"].clone();

    // Saving the same pair again overwrites the existing row
    let second = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(payload(7)),
            Some(second_hr),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["id"], first_id);
    assert_eq!(second.body["data"]["created_at"], first_created_at);
    assert_eq!(second.body["data"]["max_days_per_month"], json!(7));
    assert_eq!(
        second.body["data"]["created_by"]["name"],
        json!("hrlead (HR)")
    );

    // Still only one row in the list
    let list = app
        .request("GET", "/api/employee-leave-limits", None, None)
        .await;
    assert_eq!(list.body["pagination"]["total"], json!(1));
}

#[tokio::test]
async fn test_validation_reports_every_failing_field() {
    let app = helpers::TestApp::new().await;
    let employee = app
        .create_test_employee("Ana", "Cruz", "EMP-0003", "HR")
        .await;

    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Sick Leave",
                "max_days_per_month": 32,
                "max_paid_requests_per_year": 13,
                "effective_from": "2024-07-01",
                "effective_until": "2024-06-01",
            })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.body["success"], json!(false));
    let errors = resp.body["errors"].as_object().unwrap();
    assert!(errors.contains_key("max_days_per_month"));
    assert!(errors.contains_key("max_paid_requests_per_year"));
    assert!(errors.contains_key("effective_until"));
}

#[tokio::test]
async fn test_boundary_values_accepted() {
    let app = helpers::TestApp::new().await;
    let employee = app
        .create_test_employee("Leo", "Garcia", "EMP-0004", "IT")
        .await;

    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Emergency Leave",
                "max_days_per_month": 0,
                "max_paid_requests_per_year": 0,
            })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Vacation Leave",
                "max_days_per_month": 31,
                "max_paid_requests_per_year": 12,
            })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_employee_rejected() {
    let app = helpers::TestApp::new().await;

    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": "00000000-0000-0000-0000-000000000000",
                "leave_type": "Sick Leave",
                "max_days_per_month": 3,
                "max_paid_requests_per_year": 2,
            })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        resp.body["errors"]
            .as_object()
            .unwrap()
            .contains_key("employee_id")
    );
}

#[tokio::test]
async fn test_future_override_not_listed_for_employee() {
    let app = helpers::TestApp::new().await;
    let employee = app
        .create_test_employee("Nina", "Lopez", "EMP-0005", "Legal")
        .await;

    let resp = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Sick Leave",
                "max_days_per_month": 2,
                "max_paid_requests_per_year": 1,
                "effective_from": "2999-01-01",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // Not yet in force, so the employee view omits it
    let view = app
        .request(
            "GET",
            &format!("/api/employee-leave-limits/employee/{employee}"),
            None,
            None,
        )
        .await;
    assert_eq!(view.body["data"]["limits"].as_array().unwrap().len(), 0);

    // But the admin list still shows it
    let list = app
        .request("GET", "/api/employee-leave-limits", None, None)
        .await;
    assert_eq!(list.body["pagination"]["total"], json!(1));
}

#[tokio::test]
async fn test_delete_then_recreate_gets_new_id() {
    let app = helpers::TestApp::new().await;
    let employee = app
        .create_test_employee("Paolo", "Diaz", "EMP-0006", "Sales")
        .await;

    let payload = json!({
        "employee_id": employee,
        "leave_type": "Sick Leave",
        "max_days_per_month": 3,
        "max_paid_requests_per_year": 2,
    });

    let first = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(payload.clone()),
            None,
        )
        .await;
    let first_id = first.body["data"]["id"].as_str().unwrap().to_string();

    let resp = app
        .request(
            "DELETE",
            &format!("/api/employee-leave-limits/{first_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // Gone from the employee view
    let view = app
        .request(
            "GET",
            &format!("/api/employee-leave-limits/employee/{employee}"),
            None,
            None,
        )
        .await;
    assert_eq!(view.body["data"]["limits"].as_array().unwrap().len(), 0);

    // The row itself survives as history, just deactivated
    let is_active: bool =
        sqlx::query_scalar("SELECT is_active FROM employee_leave_limits WHERE id = $1")
            .bind(uuid::Uuid::parse_str(&first_id).unwrap())
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert!(!is_active);

    // Deleting again still succeeds (idempotent)
    let resp = app
        .request(
            "DELETE",
            &format!("/api/employee-leave-limits/{first_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // A new save for the pair creates a fresh row, not a revival
    let second = app
        .request("POST", "/api/employee-leave-limits", Some(payload), None)
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_ne!(second.body["data"]["id"].as_str().unwrap(), first_id);
}

#[tokio::test]
async fn test_update_corrects_limits_without_touching_identity() {
    let app = helpers::TestApp::new().await;
    let hr = app.create_test_user("hradmin").await;
    let employee = app
        .create_test_employee("Rosa", "Torres", "EMP-0007", "Finance")
        .await;

    let created = app
        .request(
            "POST",
            "/api/employee-leave-limits",
            Some(json!({
                "employee_id": employee,
                "leave_type": "Vacation Leave",
                "max_days_per_month": 5,
                "max_paid_requests_per_year": 6,
            })),
            Some(hr),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let resp = app
        .request(
            "PUT",
            &format!("/api/employee-leave-limits/{id}"),
            Some(json!({
                "max_days_per_month": 6,
                "max_paid_requests_per_year": 6,
                "reason": "Adjusted after review",
            })),
            Some(hr),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["max_days_per_month"], json!(6));
    assert_eq!(resp.body["data"]["leave_type"], json!("Vacation Leave"));
    assert_eq!(resp.body["data"]["is_active"], json!(true));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = helpers::TestApp::new().await;

    let resp = app
        .request(
            "PUT",
            "/api/employee-leave-limits/00000000-0000-0000-0000-000000000000",
            Some(json!({
                "max_days_per_month": 3,
                "max_paid_requests_per_year": 2,
            })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["success"], json!(false));
}

#[tokio::test]
async fn test_resolve_effective_limit_prefers_newest_duplicate() {
    use std::sync::Arc;

    let app = helpers::TestApp::new().await;
    let employee = app
        .create_test_employee("Carla", "Velasco", "EMP-0010", "Finance")
        .await;

    // Two active rows for the same pair, as a racing pair of upserts would
    // leave behind; the policy must pick the newer one.
    sqlx::query(
        "INSERT INTO employee_leave_limits \
             (employee_id, leave_type, max_days_per_month, max_paid_requests_per_year, created_at) \
         VALUES \
             ($1, 'Sick Leave', 2, 1, NOW() - INTERVAL '1 day'), \
             ($1, 'Sick Leave', 4, 2, NOW())",
    )
    .bind(employee)
    .execute(&app.db_pool)
    .await
    .unwrap();

    let service = hrms_service::leave_limit::LeaveLimitService::new(
        Arc::new(hrms_database::repositories::leave_limit::LeaveLimitRepository::new(
            app.db_pool.clone(),
        )),
        Arc::new(hrms_database::repositories::employee::EmployeeRepository::new(
            app.db_pool.clone(),
        )),
        Arc::new(hrms_database::repositories::user::UserRepository::new(
            app.db_pool.clone(),
        )),
    );

    let today = chrono::Utc::now().date_naive();
    let resolved = service
        .resolve_effective_limit(employee, "Sick Leave", today)
        .await
        .unwrap()
        .expect("an override should be in force");
    assert_eq!(resolved.max_days_per_month, 4);

    // No override for an unknown type is the normal fallback case
    let none = service
        .resolve_effective_limit(employee, "Vacation Leave", today)
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn test_employees_dropdown() {
    let app = helpers::TestApp::new().await;
    app.create_test_employee("Bea", "Ramos", "EMP-0008", "HR")
        .await;
    app.create_test_employee("Alex", "Mendoza", "EMP-0009", "IT")
        .await;

    let resp = app
        .request(
            "GET",
            "/api/employee-leave-limits/employees/dropdown",
            None,
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let employees = resp.body["data"].as_array().unwrap();
    assert_eq!(employees.len(), 2);
    // Ordered by first name
    assert_eq!(employees[0]["name"], json!("Alex Mendoza"));
    assert_eq!(employees[0]["employee_id"], json!("EMP-0009"));
}
