use actix_web::{http, test, web, App};
use billwatch_api::configure_server_api;
use billwatch_infra::BillwatchContext;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

macro_rules! spawn_app {
    () => {{
        let ctx = BillwatchContext::create_inmemory();
        test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api)),
        )
        .await
    }};
}

fn authed(req: test::TestRequest, user: &str) -> test::TestRequest {
    // The inmemory context uses the token itself as the subject
    req.insert_header(("authorization", format!("Bearer {}", user)))
}

#[actix_web::test]
async fn creates_reminder_with_defaults() {
    let app = spawn_app!();

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "Electric",
            "dueDate": "2024-03-15T10:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let reminder = &body["reminder"];
    assert_eq!(reminder["userId"], "u1");
    assert_eq!(reminder["billName"], "Electric");
    assert_eq!(reminder["priority"], "medium");
    assert_eq!(reminder["frequency"], "monthly");
    assert_eq!(reminder["isPaid"], false);
    assert!(reminder["paidAt"].is_null());
    assert!(reminder["amount"].is_null());
    assert!(reminder["id"].is_string());
}

#[actix_web::test]
async fn rejects_creation_with_missing_or_invalid_fields() {
    let app = spawn_app!();

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "",
            "dueDate": "2024-03-15"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "Electric",
            "dueDate": "not a date"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    // Nothing was stored
    let req = authed(test::TestRequest::get(), "u1")
        .uri("/api/v1/reminders")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn lists_reminders_ordered_by_due_date() {
    let app = spawn_app!();

    for due_date in &["2024-03-10", "2024-03-01"] {
        let req = authed(test::TestRequest::post(), "u1")
            .uri("/api/v1/reminders")
            .set_json(json!({
                "billName": "Electric",
                "dueDate": due_date
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::CREATED);
    }

    let req = authed(test::TestRequest::get(), "u1")
        .uri("/api/v1/reminders")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let reminders = body["reminders"].as_array().unwrap();
    assert_eq!(reminders.len(), 2);
    assert!(reminders[0]["dueDate"].as_i64().unwrap() < reminders[1]["dueDate"].as_i64().unwrap());
}

#[actix_web::test]
async fn reminders_are_scoped_to_the_caller() {
    let app = spawn_app!();

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "Electric",
            "dueDate": "2024-03-15"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = authed(test::TestRequest::get(), "u2")
        .uri("/api/v1/reminders")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn mark_paid_and_due_today_flow() {
    let app = spawn_app!();
    let due_date = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
    let as_of = due_date.timestamp_millis();

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "Electric",
            "dueDate": due_date.to_rfc3339()
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let reminder_id = body["reminder"]["id"].as_str().unwrap().to_string();

    // Unpaid and due within the as-of day
    let req = authed(test::TestRequest::get(), "u1")
        .uri(&format!("/api/v1/reminders/due-today?asOf={}", as_of))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 1);

    // Mark it paid
    let req = authed(test::TestRequest::put(), "u1")
        .uri(&format!("/api/v1/reminders/{}/mark-paid", reminder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reminder"]["isPaid"], true);
    let paid_at = body["reminder"]["paidAt"].as_i64().unwrap();

    // Marking again must not move the stamp
    let req = authed(test::TestRequest::put(), "u1")
        .uri(&format!("/api/v1/reminders/{}/mark-paid", reminder_id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["reminder"]["paidAt"].as_i64().unwrap(), paid_at);

    // Paid reminders are no longer owed today
    let req = authed(test::TestRequest::get(), "u1")
        .uri(&format!("/api/v1/reminders/due-today?asOf={}", as_of))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn delete_is_scoped_and_irreversible() {
    let app = spawn_app!();

    let req = authed(test::TestRequest::post(), "u1")
        .uri("/api/v1/reminders")
        .set_json(json!({
            "billName": "Electric",
            "dueDate": "2024-03-15"
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let reminder_id = body["reminder"]["id"].as_str().unwrap().to_string();

    // Another user cannot delete it
    let req = authed(test::TestRequest::delete(), "u2")
        .uri(&format!("/api/v1/reminders/{}", reminder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    // The owner can
    let req = authed(test::TestRequest::delete(), "u1")
        .uri(&format!("/api/v1/reminders/{}", reminder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    // And only once
    let req = authed(test::TestRequest::delete(), "u1")
        .uri(&format!("/api/v1/reminders/{}", reminder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let req = authed(test::TestRequest::put(), "u1")
        .uri(&format!("/api/v1/reminders/{}/mark-paid", reminder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
}
