use actix_web::{get, http::header, http::StatusCode, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::export::application::ports::incoming::use_cases::ExportWorkbookError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download users, tasks and projects as an xlsx workbook
#[utoipa::path(
    get,
    path = "/api/v1/export/excel",
    tag = "export",
    responses(
        (
            status = 200,
            description = "Workbook download",
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            body = Vec<u8>
        ),
        (status = 500, description = "Export failed", body = ErrorResponse),
    )
)]
#[get("/api/v1/export/excel")]
pub async fn export_excel_handler(data: web::Data<AppState>) -> impl Responder {
    match data.export.excel.execute().await {
        Ok(file) => HttpResponse::Ok()
            .content_type(XLSX_CONTENT_TYPE)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", file.filename),
            ))
            .body(file.content),

        Err(e) => {
            match &e {
                ExportWorkbookError::QueryFailed { entity, message } => {
                    error!(entity, error = %message, "Export query failed");
                }
                ExportWorkbookError::WriteFailed(msg) => {
                    error!(error = %msg, "Export write failed");
                }
            }
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_FAILED",
                &e.to_string(),
            )
        }
    }
}
