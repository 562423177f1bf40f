use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::reports::dtos::{
    is_image_type_allowed, ReportResponseDto, SubmitReportDto, SubmitReportResponseDto,
    UpdateReportStatusDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
use crate::features::reports::services::ReportService;
use crate::shared::constants::REPORT_RECEIVED_MESSAGE;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a new environmental report
///
/// Accepts multipart/form-data with:
/// - `image`: the report photo (required)
/// - `latitude` / `longitude`: GPS coordinates (required)
/// - `description`: free-text description (required)
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(
        content = SubmitReportDto,
        content_type = "multipart/form-data",
        description = "Report submission form: image file plus latitude, longitude, and description fields",
    ),
    responses(
        (status = 201, description = "Report created", body = SubmitReportResponseDto),
        (status = 400, description = "Missing image or invalid form fields"),
        (status = 502, description = "Image upload failed")
    )
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitReportResponseDto>)> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut description: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                image_data = Some(data.to_vec());
                content_type = Some(ct);
            }
            "latitude" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read latitude field: {}", e))
                })?;
                latitude = Some(text.trim().parse::<f64>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid latitude value: {}", text))
                })?);
            }
            "longitude" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read longitude field: {}", e))
                })?;
                longitude = Some(text.trim().parse::<f64>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid longitude value: {}", text))
                })?);
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read description field: {}", e))
                })?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Validate required fields
    let image_data =
        image_data.ok_or_else(|| AppError::BadRequest("No image file uploaded".to_string()))?;
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());
    let latitude =
        latitude.ok_or_else(|| AppError::BadRequest("Latitude is required".to_string()))?;
    let longitude =
        longitude.ok_or_else(|| AppError::BadRequest("Longitude is required".to_string()))?;
    let description =
        description.ok_or_else(|| AppError::BadRequest("Description is required".to_string()))?;

    // Validate image size
    if image_data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    // Validate content type
    if !is_image_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_IMAGE_TYPES.join(", ")
        )));
    }

    let report = service
        .submit(image_data, &content_type, latitude, longitude, description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponseDto::from_report(
            report,
            REPORT_RECEIVED_MESSAGE.to_string(),
        )),
    ))
}

/// Check report status by ticket id
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Public ticket id, e.g. RPT-1717171717171-A1B2C")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_by_ticket(&id).await?;
    Ok(Json(ApiResponse::success(
        Some(report.into()),
        None,
        None,
    )))
}

/// List all reports for admin triage, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    admin: AuthenticatedAdmin,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    debug!("Admin '{}' listing reports", admin.username);

    let reports = service.list_all().await?;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Update report status and/or category (admin triage)
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Report record id")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid status or category value"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn update_report_status(
    admin: AuthenticatedAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    debug!("Admin '{}' updating report {}", admin.username, id);

    let report = service.update_status(id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(report.into()),
        None,
        None,
    )))
}
