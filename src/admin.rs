//! # Admin Client
//!
//! Named operations against the admin scope (`{api}/Admin`). Each operation
//! maps its parameters onto one [`RequestHelper`] call with a fixed path and
//! method. No client-side validation happens here: ids and the `top` count
//! are interpolated verbatim, request bodies are forwarded as given, and the
//! backend alone decides what is valid.
//!
//! ## Endpoints
//!
//! - `POST /login`
//! - `GET /dashboard/stats`
//! - CRUD on `/students`, `/subjects`, `/schedules`, `/tuition-fees`
//! - `GET /registrations`, `DELETE /registrations/{id}`
//! - `GET /charts/*`
//! - `GET /export/*` (see [`crate::export`])

use std::fmt::Display;

use serde::Serialize;

use crate::{
    client::RequestHelper,
    config::ApiConfig,
    transport::HttpTransport,
    types::{AdminCredentials, ApiResponse, Method},
};

/// `top` value the dashboard charts use when the caller has no preference.
pub const DEFAULT_CHART_TOP: u32 = 10;

#[derive(Debug, Clone)]
pub struct AdminApi<T> {
    helper: RequestHelper<T>,
}

impl<T: HttpTransport> AdminApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            helper: RequestHelper::new(transport, config, "Admin API"),
        }
    }

    pub(crate) fn helper(&self) -> &RequestHelper<T> {
        &self.helper
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResponse {
        let credentials = AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.helper
            .send_json(Method::Post, "/login", &credentials)
            .await
    }

    pub async fn get_dashboard_stats(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/dashboard/stats").await
    }

    // students

    pub async fn get_all_students(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/students").await
    }

    pub async fn get_student(&self, id: impl Display) -> ApiResponse {
        self.helper.send(Method::Get, format!("/students/{id}")).await
    }

    pub async fn create_student<B: Serialize + ?Sized>(&self, student: &B) -> ApiResponse {
        self.helper
            .send_json(Method::Post, "/students", student)
            .await
    }

    pub async fn update_student<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        student: &B,
    ) -> ApiResponse {
        self.helper
            .send_json(Method::Put, format!("/students/{id}"), student)
            .await
    }

    pub async fn delete_student(&self, id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Delete, format!("/students/{id}"))
            .await
    }

    // subjects

    pub async fn get_all_subjects(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/subjects").await
    }

    pub async fn get_subject(&self, id: impl Display) -> ApiResponse {
        self.helper.send(Method::Get, format!("/subjects/{id}")).await
    }

    pub async fn create_subject<B: Serialize + ?Sized>(&self, subject: &B) -> ApiResponse {
        self.helper
            .send_json(Method::Post, "/subjects", subject)
            .await
    }

    pub async fn update_subject<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        subject: &B,
    ) -> ApiResponse {
        self.helper
            .send_json(Method::Put, format!("/subjects/{id}"), subject)
            .await
    }

    pub async fn delete_subject(&self, id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Delete, format!("/subjects/{id}"))
            .await
    }

    // schedules, no single-item read on the backend

    pub async fn get_all_schedules(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/schedules").await
    }

    pub async fn create_schedule<B: Serialize + ?Sized>(&self, schedule: &B) -> ApiResponse {
        self.helper
            .send_json(Method::Post, "/schedules", schedule)
            .await
    }

    pub async fn update_schedule<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        schedule: &B,
    ) -> ApiResponse {
        self.helper
            .send_json(Method::Put, format!("/schedules/{id}"), schedule)
            .await
    }

    pub async fn delete_schedule(&self, id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Delete, format!("/schedules/{id}"))
            .await
    }

    // registrations are created by students, admins only list and remove them

    pub async fn get_all_registrations(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/registrations").await
    }

    pub async fn delete_registration(&self, id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Delete, format!("/registrations/{id}"))
            .await
    }

    // tuition fees

    pub async fn get_all_tuition_fees(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/tuition-fees").await
    }

    pub async fn create_tuition_fee<B: Serialize + ?Sized>(&self, tuition: &B) -> ApiResponse {
        self.helper
            .send_json(Method::Post, "/tuition-fees", tuition)
            .await
    }

    pub async fn update_tuition_fee<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        tuition: &B,
    ) -> ApiResponse {
        self.helper
            .send_json(Method::Put, format!("/tuition-fees/{id}"), tuition)
            .await
    }

    pub async fn delete_tuition_fee(&self, id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Delete, format!("/tuition-fees/{id}"))
            .await
    }

    // charts

    pub async fn get_students_by_department(&self) -> ApiResponse {
        self.helper
            .send(Method::Get, "/charts/students-by-department")
            .await
    }

    pub async fn get_top_subjects(&self, top: u32) -> ApiResponse {
        self.helper
            .send(Method::Get, format!("/charts/top-subjects?top={top}"))
            .await
    }

    pub async fn get_subjects_by_credits(&self) -> ApiResponse {
        self.helper
            .send(Method::Get, "/charts/subjects-by-credits")
            .await
    }

    pub async fn get_tuition_status(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/charts/tuition-status").await
    }

    pub async fn get_tuition_by_semester(&self) -> ApiResponse {
        self.helper
            .send(Method::Get, "/charts/tuition-by-semester")
            .await
    }

    pub async fn get_students_by_class(&self, top: u32) -> ApiResponse {
        self.helper
            .send(Method::Get, format!("/charts/students-by-class?top={top}"))
            .await
    }
}
