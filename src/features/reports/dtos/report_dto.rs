use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{Report, ReportCategory, ReportStatus};

/// Maximum accepted image size in bytes (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Content types accepted for the report photo
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/heic",
];

pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Report submission form for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SubmitReportDto {
    /// The report photo
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: String,
    /// GPS latitude of the reported issue
    #[schema(example = "-6.2088")]
    pub latitude: String,
    /// GPS longitude of the reported issue
    #[schema(example = "106.8456")]
    pub longitude: String,
    /// Free-text description of the issue
    #[schema(example = "Tumpukan sampah di pinggir jalan")]
    pub description: String,
}

/// GPS coordinates supplied by the reporting citizen
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

/// Classification result as exposed on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisDto {
    pub detected: bool,
    pub class: String,
    pub confidence: f64,
    #[schema(value_type = Object)]
    pub raw_result: serde_json::Value,
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub ticket_id: String,
    pub image_url: String,
    pub location: LocationDto,
    pub description: String,
    pub status: ReportStatus,
    pub category: ReportCategory,
    pub ai_analysis: AiAnalysisDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            ticket_id: r.ticket_id,
            image_url: r.image_url,
            location: LocationDto {
                lat: r.lat,
                lng: r.lng,
            },
            description: r.description,
            status: r.status,
            category: r.category,
            ai_analysis: AiAnalysisDto {
                detected: r.ai_detected,
                class: r.ai_class,
                confidence: r.ai_confidence,
                raw_result: r.ai_raw_result,
            },
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response body for a successful submission.
///
/// Carries the ticket id, image URL, classification result, and derived
/// category at the top level alongside the full record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResponseDto {
    pub success: bool,
    pub ticket_id: String,
    pub message: String,
    pub data: ReportResponseDto,
    pub image_url: String,
    pub ai_result: AiAnalysisDto,
    pub category: ReportCategory,
}

impl SubmitReportResponseDto {
    pub fn from_report(report: Report, message: String) -> Self {
        let data = ReportResponseDto::from(report);
        Self {
            success: true,
            ticket_id: data.ticket_id.clone(),
            image_url: data.image_url.clone(),
            ai_result: data.ai_analysis.clone(),
            category: data.category,
            message,
            data,
        }
    }
}

/// Request DTO for the admin status/category update.
///
/// Values outside the enumerated sets fail deserialization and are
/// rejected with 400 before reaching the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: Option<ReportStatus>,
    pub category: Option<ReportCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{ReportCategory, ReportStatus};
    use chrono::Utc;

    fn sample_report() -> Report {
        Report {
            id: Uuid::nil(),
            ticket_id: "RPT-1717171717171-A1B2C".to_string(),
            image_url: "http://localhost:9000/envwatch-reports/reports/x.jpg".to_string(),
            lat: -7.2575,
            lng: 112.7521,
            description: "Sampah menumpuk".to_string(),
            status: ReportStatus::Pending,
            category: ReportCategory::Sampah,
            ai_detected: true,
            ai_class: "garbage".to_string(),
            ai_confidence: 0.77,
            ai_raw_result: serde_json::json!({}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_dto_wire_field_names() {
        let dto = ReportResponseDto::from(sample_report());
        let value = serde_json::to_value(&dto).unwrap();

        assert!(value.get("ticketId").is_some());
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("aiAnalysis").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["location"]["lat"], serde_json::json!(-7.2575));
        assert_eq!(value["status"], serde_json::json!("Pending"));
    }

    #[test]
    fn test_submit_response_top_level_fields() {
        let dto = SubmitReportResponseDto::from_report(sample_report(), "Laporan diterima".into());
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["success"], serde_json::json!(true));
        assert_eq!(
            value["ticketId"],
            serde_json::json!("RPT-1717171717171-A1B2C")
        );
        assert_eq!(value["message"], serde_json::json!("Laporan diterima"));
        assert_eq!(value["category"], serde_json::json!("Sampah"));
        assert!(value["aiResult"]["detected"].as_bool().unwrap());
        assert!(value.get("data").is_some());
    }

    #[test]
    fn test_update_dto_rejects_unknown_status() {
        let result = serde_json::from_str::<UpdateReportStatusDto>(r#"{"status":"Archived"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_dto_partial_fields() {
        let dto: UpdateReportStatusDto =
            serde_json::from_str(r#"{"category":"Jalan Rusak"}"#).unwrap();
        assert!(dto.status.is_none());
        assert_eq!(dto.category, Some(ReportCategory::JalanRusak));
    }
}
