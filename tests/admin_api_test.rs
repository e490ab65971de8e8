mod common;

use common::{FakeTransport, admin_config};
use serde_json::{Value, json};
use studentportal::{
    admin::{AdminApi, DEFAULT_CHART_TOP},
    client::RequestHelper,
    types::{ApiResponse, CONNECTION_ERROR_MESSAGE, Method},
};

fn admin(fake: &FakeTransport) -> AdminApi<FakeTransport> {
    AdminApi::new(fake.clone(), admin_config())
}

fn ok() -> FakeTransport {
    FakeTransport::json(200, json!({"ok": true}))
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let fake = FakeTransport::json(200, json!({"id": 1, "username": "root"}));
    let response = admin(&fake).login("root", "secret").await;

    assert!(response.success);
    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!({"id": 1, "username": "root"}));

    let request = fake.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://portal.test/api/Admin/login");
    assert_eq!(
        fake.last_body(),
        Some(json!({"username": "root", "password": "secret"}))
    );
}

#[tokio::test]
async fn test_default_headers_sent_on_every_call() {
    let fake = ok();
    admin(&fake).get_dashboard_stats().await;

    let request = fake.last_request();
    assert_eq!(request.header_value("content-type"), Some("application/json"));
    assert_eq!(request.header_value("accept"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_read_endpoints_map_to_get_paths() {
    let fake = ok();
    let api = admin(&fake);

    api.get_dashboard_stats().await;
    api.get_all_students().await;
    api.get_student(7).await;
    api.get_all_subjects().await;
    api.get_subject("IT01").await;
    api.get_all_schedules().await;
    api.get_all_registrations().await;
    api.get_all_tuition_fees().await;

    let urls: Vec<String> = fake.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://portal.test/api/Admin/dashboard/stats",
            "http://portal.test/api/Admin/students",
            "http://portal.test/api/Admin/students/7",
            "http://portal.test/api/Admin/subjects",
            "http://portal.test/api/Admin/subjects/IT01",
            "http://portal.test/api/Admin/schedules",
            "http://portal.test/api/Admin/registrations",
            "http://portal.test/api/Admin/tuition-fees",
        ]
    );
    assert!(fake.requests().iter().all(|r| r.method == Method::Get));
}

#[tokio::test]
async fn test_write_endpoints_use_verbs_and_bodies() {
    let fake = ok();
    let api = admin(&fake);
    let student = json!({"mssv": "SV002", "fullName": "Tran B"});

    api.create_student(&student).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://portal.test/api/Admin/students");
    assert_eq!(fake.last_body(), Some(student.clone()));

    api.update_student(3, &student).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, "http://portal.test/api/Admin/students/3");
    assert_eq!(fake.last_body(), Some(student));

    api.delete_student(3).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, "http://portal.test/api/Admin/students/3");
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_crud_paths_for_remaining_resources() {
    let fake = ok();
    let api = admin(&fake);
    let body = json!({"name": "x"});

    api.create_subject(&body).await;
    api.update_subject(2, &body).await;
    api.delete_subject(2).await;
    api.create_schedule(&body).await;
    api.update_schedule(4, &body).await;
    api.delete_schedule(4).await;
    api.delete_registration(9).await;
    api.create_tuition_fee(&body).await;
    api.update_tuition_fee(5, &body).await;
    api.delete_tuition_fee(5).await;

    let calls: Vec<(Method, String)> = fake
        .requests()
        .into_iter()
        .map(|r| (r.method, r.url.replace("http://portal.test/api/Admin", "")))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::Post, "/subjects".to_string()),
            (Method::Put, "/subjects/2".to_string()),
            (Method::Delete, "/subjects/2".to_string()),
            (Method::Post, "/schedules".to_string()),
            (Method::Put, "/schedules/4".to_string()),
            (Method::Delete, "/schedules/4".to_string()),
            (Method::Delete, "/registrations/9".to_string()),
            (Method::Post, "/tuition-fees".to_string()),
            (Method::Put, "/tuition-fees/5".to_string()),
            (Method::Delete, "/tuition-fees/5".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_chart_endpoints_and_top_parameter() {
    let fake = ok();
    let api = admin(&fake);

    api.get_students_by_department().await;
    api.get_top_subjects(DEFAULT_CHART_TOP).await;
    api.get_subjects_by_credits().await;
    api.get_tuition_status().await;
    api.get_tuition_by_semester().await;
    api.get_students_by_class(5).await;

    let paths: Vec<String> = fake
        .requests()
        .into_iter()
        .map(|r| r.url.replace("http://portal.test/api/Admin", ""))
        .collect();
    assert_eq!(
        paths,
        vec![
            "/charts/students-by-department",
            "/charts/top-subjects?top=10",
            "/charts/subjects-by-credits",
            "/charts/tuition-status",
            "/charts/tuition-by-semester",
            "/charts/students-by-class?top=5",
        ]
    );
}

#[tokio::test]
async fn test_created_status_is_success() {
    let fake = FakeTransport::json(201, json!({"id": 12}));
    let response = admin(&fake).create_subject(&json!({"name": "Math"})).await;

    assert!(response.success);
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_backend_error_passes_through() {
    let body = json!({"message": "Sinh viên không tồn tại", "code": 404});
    let fake = FakeTransport::json(404, body.clone());
    let response = admin(&fake).get_student(99).await;

    assert!(!response.success);
    assert_eq!(response.status, 404);
    assert_eq!(response.data, body);
    assert_eq!(response.message(), Some("Sinh viên không tồn tại"));
}

#[tokio::test]
async fn test_network_fault_becomes_connection_envelope() {
    let fake = FakeTransport::unreachable();
    let response = admin(&fake).get_all_students().await;

    assert_eq!(response, ApiResponse::connection_error());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "success": false,
            "status": 500,
            "data": {"message": CONNECTION_ERROR_MESSAGE, "code": 500}
        })
    );
}

#[tokio::test]
async fn test_non_json_body_becomes_connection_envelope() {
    let fake = FakeTransport::raw(studentportal::transport::HttpResponse::new(
        200,
        b"<html>oops</html>".to_vec(),
    ));
    let response = admin(&fake).get_dashboard_stats().await;

    assert_eq!(response, ApiResponse::connection_error());
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let fake = FakeTransport::json(200, json!([{"id": 1, "name": "Math"}]));
    let api = admin(&fake);

    let first = api.get_all_subjects().await;
    let second = api.get_all_subjects().await;

    assert_eq!(first, second);
    assert_eq!(fake.requests().len(), 2);
}

#[tokio::test]
async fn test_get_and_delete_drop_the_body() {
    let fake = ok();
    let helper = RequestHelper::new(fake.clone(), admin_config(), "Admin API");
    let body = json!({"ignored": true});

    helper.send_json(Method::Get, "/students", &body).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.body, None);

    helper.send_json(Method::Delete, "/students/1", &body).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.body, None);

    helper.send_json(Method::Put, "/students/1", &body).await;
    assert_eq!(fake.last_body(), Some(body));
}

#[tokio::test]
async fn test_null_body_is_not_sent() {
    let fake = ok();
    let api = admin(&fake);

    api.create_student(&Value::Null).await;
    let request = fake.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, None);

    api.update_subject(2, &Value::Null).await;
    assert_eq!(fake.last_request().body, None);
}
