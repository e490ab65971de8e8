//! # Spreadsheet Export
//!
//! The four admin export flows. Unlike the JSON operations they do not go
//! through [`crate::client::RequestHelper`]: the payload is binary and the
//! outcome is a file saved through a [`DownloadTarget`].
//!
//! ## Flow
//!
//! 1. `GET {admin}/export/{resource}` accepting only the spreadsheet type
//! 2. non-2xx: [`ExportResult`] failure with [`EXPORT_FAILED_MESSAGE`]
//! 3. 2xx: file name from `Content-Disposition`, or the resource default
//! 4. stage the payload, save it, release the staged handle
//! 5. any fault on the way: failure with [`EXPORT_ERROR_MESSAGE`]
//!
//! The staged handle is owned by a [`StagedDownload`] guard, so it is
//! released exactly once whether the save succeeds, fails or panics.

use std::{fmt, io};

use crate::{
    admin::AdminApi,
    transport::{HttpRequest, HttpTransport, TransportError},
    types::{ExportResult, Method, is_success_status},
    warning,
};

mod target;

pub use target::{DirectoryTarget, DownloadTarget, StagedDownload, StagedId};

pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const EXPORT_SUCCESS_MESSAGE: &str = "Xuất Excel thành công";
pub const EXPORT_FAILED_MESSAGE: &str = "Xuất Excel thất bại";
pub const EXPORT_ERROR_MESSAGE: &str = "Có lỗi xảy ra khi xuất Excel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportResource {
    Students,
    Subjects,
    Registrations,
    TuitionFees,
}

impl ExportResource {
    pub const ALL: [ExportResource; 4] = [
        ExportResource::Students,
        ExportResource::Subjects,
        ExportResource::Registrations,
        ExportResource::TuitionFees,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ExportResource::Students => "/export/students",
            ExportResource::Subjects => "/export/subjects",
            ExportResource::Registrations => "/export/registrations",
            ExportResource::TuitionFees => "/export/tuition-fees",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportResource::Students => "DanhSachSinhVien.xlsx",
            ExportResource::Subjects => "DanhSachMonHoc.xlsx",
            ExportResource::Registrations => "DanhSachDangKy.xlsx",
            ExportResource::TuitionFees => "DanhSachHocPhi.xlsx",
        }
    }
}

impl fmt::Display for ExportResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches("/export/"))
    }
}

#[derive(Debug)]
pub enum ExportError {
    TransportError(TransportError),
    IoError(io::Error),
    CriticalError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::TransportError(e) => write!(f, "{}", e),
            ExportError::IoError(e) => write!(f, "io error: {}", e),
            ExportError::CriticalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<TransportError> for ExportError {
    fn from(err: TransportError) -> Self {
        ExportError::TransportError(err)
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::IoError(err)
    }
}

/// Extracts the file name from a `Content-Disposition` value.
///
/// Matches `filename=` case-insensitively. A quoted value runs up to the
/// closing quote, an unquoted one up to the next `;`. Returns `None` when
/// the parameter is missing or empty.
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with the original
    let start = header.to_ascii_lowercase().find("filename=")? + "filename=".len();
    let value = header[start..].trim_start();
    let name = match value.strip_prefix('"') {
        Some(quoted) => quoted.split('"').next().unwrap_or_default(),
        None => value.split(';').next().unwrap_or_default(),
    }
    .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

enum Outcome {
    Saved(String),
    Rejected(u16),
}

impl<T: HttpTransport> AdminApi<T> {
    pub async fn export<D: DownloadTarget>(
        &self,
        resource: ExportResource,
        target: &D,
    ) -> ExportResult {
        match self.try_export(resource, target).await {
            Ok(Outcome::Saved(file_name)) => ExportResult {
                success: true,
                message: EXPORT_SUCCESS_MESSAGE.to_string(),
                file_name: Some(file_name),
            },
            Ok(Outcome::Rejected(status)) => {
                warning!("Export {} rejected with status {}", resource, status);
                ExportResult {
                    success: false,
                    message: EXPORT_FAILED_MESSAGE.to_string(),
                    file_name: None,
                }
            }
            Err(e) => {
                warning!("Export Excel Error: {}", e);
                ExportResult {
                    success: false,
                    message: EXPORT_ERROR_MESSAGE.to_string(),
                    file_name: None,
                }
            }
        }
    }

    pub async fn export_students<D: DownloadTarget>(&self, target: &D) -> ExportResult {
        self.export(ExportResource::Students, target).await
    }

    pub async fn export_subjects<D: DownloadTarget>(&self, target: &D) -> ExportResult {
        self.export(ExportResource::Subjects, target).await
    }

    pub async fn export_registrations<D: DownloadTarget>(&self, target: &D) -> ExportResult {
        self.export(ExportResource::Registrations, target).await
    }

    pub async fn export_tuition_fees<D: DownloadTarget>(&self, target: &D) -> ExportResult {
        self.export(ExportResource::TuitionFees, target).await
    }

    async fn try_export<D: DownloadTarget>(
        &self,
        resource: ExportResource,
        target: &D,
    ) -> Result<Outcome, ExportError> {
        let helper = self.helper();
        let request = HttpRequest::new(Method::Get, helper.config().url(resource.path()))
            .header("Accept", SPREADSHEET_CONTENT_TYPE);

        let response = helper.transport().send(request).await?;
        if !is_success_status(response.status) {
            return Ok(Outcome::Rejected(response.status));
        }

        let file_name = response
            .header("Content-Disposition")
            .and_then(file_name_from_disposition)
            .unwrap_or_else(|| resource.default_file_name().to_string());

        let staged = StagedDownload::stage(target, response.body)?;
        staged.save(&file_name).await?;

        Ok(Outcome::Saved(file_name))
    }
}
