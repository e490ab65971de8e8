use std::path::PathBuf;

use crate::{
    config, error,
    export::{DirectoryTarget, ExportResource},
    info, success,
};

use super::{
    admin_api, admin_session, expect_success, parse_body, print_response, require_session,
    with_spinner,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Students,
    Subjects,
    Schedules,
    Registrations,
    TuitionFees,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceAction {
    List,
    Get(String),
    Create(String),
    Update(String, String),
    Delete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    StudentsByDepartment,
    TopSubjects,
    SubjectsByCredits,
    TuitionStatus,
    TuitionBySemester,
    StudentsByClass,
}

pub async fn admin_login(username: &str, password: &str) {
    let api = admin_api();
    let response = with_spinner("Logging in...", api.login(username, password)).await;
    let session = expect_success(response);

    if let Err(e) = admin_session().set(&session).await {
        error!("Failed to store admin session: {}", e);
    }
    success!("Logged in as {}", username);
}

pub async fn admin_logout() {
    match admin_session().clear().await {
        Ok(()) => success!("Admin session removed"),
        Err(e) => error!("Failed to remove admin session: {}", e),
    }
}

pub async fn admin_status() {
    match admin_session().get::<serde_json::Value>().await {
        Ok(Some(session)) => {
            info!("Admin session active");
            println!("{}", super::render(&session));
        }
        Ok(None) => info!("Not logged in"),
        Err(e) => error!(
            "Stored admin session cannot be read: {}\nRun studentportal admin logout",
            e
        ),
    }
}

pub async fn dashboard() {
    require_session(&admin_session(), "admin").await;
    let api = admin_api();
    print_response(with_spinner("Fetching dashboard...", api.get_dashboard_stats()).await);
}

pub async fn resource(resource: Resource, action: ResourceAction) {
    require_session(&admin_session(), "admin").await;
    let api = admin_api();

    let response = with_spinner("Sending request...", async {
        match (resource, action) {
            (Resource::Students, ResourceAction::List) => api.get_all_students().await,
            (Resource::Students, ResourceAction::Get(id)) => api.get_student(id).await,
            (Resource::Students, ResourceAction::Create(data)) => {
                api.create_student(&parse_body(&data)).await
            }
            (Resource::Students, ResourceAction::Update(id, data)) => {
                api.update_student(id, &parse_body(&data)).await
            }
            (Resource::Students, ResourceAction::Delete(id)) => api.delete_student(id).await,

            (Resource::Subjects, ResourceAction::List) => api.get_all_subjects().await,
            (Resource::Subjects, ResourceAction::Get(id)) => api.get_subject(id).await,
            (Resource::Subjects, ResourceAction::Create(data)) => {
                api.create_subject(&parse_body(&data)).await
            }
            (Resource::Subjects, ResourceAction::Update(id, data)) => {
                api.update_subject(id, &parse_body(&data)).await
            }
            (Resource::Subjects, ResourceAction::Delete(id)) => api.delete_subject(id).await,

            (Resource::Schedules, ResourceAction::List) => api.get_all_schedules().await,
            (Resource::Schedules, ResourceAction::Create(data)) => {
                api.create_schedule(&parse_body(&data)).await
            }
            (Resource::Schedules, ResourceAction::Update(id, data)) => {
                api.update_schedule(id, &parse_body(&data)).await
            }
            (Resource::Schedules, ResourceAction::Delete(id)) => api.delete_schedule(id).await,

            (Resource::Registrations, ResourceAction::List) => api.get_all_registrations().await,
            (Resource::Registrations, ResourceAction::Delete(id)) => {
                api.delete_registration(id).await
            }

            (Resource::TuitionFees, ResourceAction::List) => api.get_all_tuition_fees().await,
            (Resource::TuitionFees, ResourceAction::Create(data)) => {
                api.create_tuition_fee(&parse_body(&data)).await
            }
            (Resource::TuitionFees, ResourceAction::Update(id, data)) => {
                api.update_tuition_fee(id, &parse_body(&data)).await
            }
            (Resource::TuitionFees, ResourceAction::Delete(id)) => api.delete_tuition_fee(id).await,

            (resource, action) => error!("{:?} does not support {:?}", resource, action),
        }
    })
    .await;

    print_response(response);
}

pub async fn chart(chart: Chart, top: u32) {
    require_session(&admin_session(), "admin").await;
    let api = admin_api();

    let response = with_spinner("Fetching chart data...", async {
        match chart {
            Chart::StudentsByDepartment => api.get_students_by_department().await,
            Chart::TopSubjects => api.get_top_subjects(top).await,
            Chart::SubjectsByCredits => api.get_subjects_by_credits().await,
            Chart::TuitionStatus => api.get_tuition_status().await,
            Chart::TuitionBySemester => api.get_tuition_by_semester().await,
            Chart::StudentsByClass => api.get_students_by_class(top).await,
        }
    })
    .await;

    print_response(response);
}

pub async fn export(resource: ExportResource, dir: Option<String>) {
    require_session(&admin_session(), "admin").await;
    let api = admin_api();
    let dir = dir.map(PathBuf::from).unwrap_or_else(config::download_dir);
    let target = DirectoryTarget::new(dir.clone());

    let result = with_spinner("Exporting...", api.export(resource, &target)).await;
    if !result.success {
        error!("{}", result.message);
    }

    let file_name = result.file_name.unwrap_or_default();
    success!(
        "{} ({})",
        result.message,
        dir.join(file_name).display()
    );
}
