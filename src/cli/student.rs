use serde_json::Value;

use crate::{error, info, success, vnpay, warning};

use super::{
    expect_success, print_response, require_session, student_api, student_session, vnpay_api,
    with_spinner,
};

pub async fn student_login(mssv: &str, password: &str) {
    let api = student_api();
    let response = with_spinner("Logging in...", api.login(mssv, password)).await;
    let session = expect_success(response);

    if let Err(e) = student_session().set(&session).await {
        error!("Failed to store student session: {}", e);
    }
    success!("Logged in as {}", mssv);
}

pub async fn student_logout() {
    match student_session().clear().await {
        Ok(()) => success!("Student session removed"),
        Err(e) => error!("Failed to remove student session: {}", e),
    }
}

pub async fn student_status() {
    match student_session().get::<Value>().await {
        Ok(Some(session)) => {
            info!("Student session active");
            println!("{}", super::render(&session));
        }
        Ok(None) => info!("Not logged in"),
        Err(e) => error!(
            "Stored student session cannot be read: {}\nRun studentportal student logout",
            e
        ),
    }
}

/// The explicit id if given, otherwise the `id` of the stored session.
async fn resolve_student_id(explicit: Option<String>) -> String {
    let session = student_session();
    require_session(&session, "student").await;
    if let Some(id) = explicit {
        return id;
    }

    let stored = match session.get::<Value>().await {
        Ok(Some(stored)) => stored,
        Ok(None) => error!("Not logged in. Run studentportal student login"),
        Err(e) => error!("Stored student session cannot be read: {}", e),
    };

    match stored.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => error!("Stored session has no student id, pass --student-id"),
    }
}

async fn resolve_numeric_student_id(explicit: Option<String>) -> i64 {
    let id = resolve_student_id(explicit).await;
    match id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => error!("Student id must be a number, got {}", id),
    }
}

pub async fn student_info(id: Option<String>) {
    let id = resolve_student_id(id).await;
    let api = student_api();
    print_response(with_spinner("Fetching profile...", api.get_student_info(id)).await);
}

pub async fn subjects() {
    require_session(&student_session(), "student").await;
    let api = student_api();
    print_response(with_spinner("Fetching subjects...", api.get_all_subjects()).await);
}

pub async fn register(subject_id: i64, student_id: Option<String>) {
    let student_id = resolve_numeric_student_id(student_id).await;
    let api = student_api();
    let response = with_spinner(
        "Registering subject...",
        api.register_subject(student_id, subject_id),
    )
    .await;

    expect_success(response);
    success!("Registered subject {}", subject_id);
}

pub async fn registered(student_id: Option<String>) {
    let student_id = resolve_student_id(student_id).await;
    let api = student_api();
    print_response(
        with_spinner(
            "Fetching registered subjects...",
            api.get_registered_subjects(student_id),
        )
        .await,
    );
}

pub async fn cancel(registration_id: i64) {
    require_session(&student_session(), "student").await;
    let api = student_api();
    let response = with_spinner(
        "Cancelling registration...",
        api.cancel_registration(registration_id),
    )
    .await;

    expect_success(response);
    success!("Cancelled registration {}", registration_id);
}

pub async fn schedule(student_id: Option<String>) {
    let student_id = resolve_student_id(student_id).await;
    let api = student_api();
    print_response(with_spinner("Fetching schedule...", api.get_schedule(student_id)).await);
}

pub async fn tuition(student_id: Option<String>) {
    let student_id = resolve_student_id(student_id).await;
    let api = student_api();
    print_response(with_spinner("Fetching tuition fees...", api.get_tuition_fee(student_id)).await);
}

pub async fn pay(tuition_fee_id: i64, amount: i64, student_id: Option<String>, open: bool) {
    let student_id = resolve_numeric_student_id(student_id).await;
    let api = vnpay_api();
    let response = with_spinner(
        "Creating payment URL...",
        api.create_payment_url(student_id, tuition_fee_id, amount),
    )
    .await;

    let Some(url) = vnpay::payment_url(&response).map(String::from) else {
        let data = expect_success(response);
        warning!("Payment response carries no URL");
        println!("{}", super::render(&data));
        return;
    };

    println!("{}", url);
    if open && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
    }
}
