use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report status enum matching database enum
///
/// A flat enumerated field: any value may follow any other, there is no
/// transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status")]
pub enum ReportStatus {
    Pending,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "Pending"),
            ReportStatus::InProgress => write!(f, "In Progress"),
            ReportStatus::Resolved => write!(f, "Resolved"),
            ReportStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Triage category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_category")]
pub enum ReportCategory {
    Sampah,
    Banjir,
    #[sqlx(rename = "Jalan Rusak")]
    #[serde(rename = "Jalan Rusak")]
    JalanRusak,
    #[sqlx(rename = "Pohon Tumbang")]
    #[serde(rename = "Pohon Tumbang")]
    PohonTumbang,
    #[sqlx(rename = "Butuh Verifikasi")]
    #[serde(rename = "Butuh Verifikasi")]
    ButuhVerifikasi,
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::Sampah => write!(f, "Sampah"),
            ReportCategory::Banjir => write!(f, "Banjir"),
            ReportCategory::JalanRusak => write!(f, "Jalan Rusak"),
            ReportCategory::PohonTumbang => write!(f, "Pohon Tumbang"),
            ReportCategory::ButuhVerifikasi => write!(f, "Butuh Verifikasi"),
        }
    }
}

impl Default for ReportCategory {
    fn default() -> Self {
        ReportCategory::ButuhVerifikasi
    }
}

/// Outcome of the image classification step, stored once at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub detected: bool,
    pub class: String,
    pub confidence: f64,
    pub raw_result: serde_json::Value,
}

/// Database model for a citizen report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub ticket_id: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub status: ReportStatus,
    pub category: ReportCategory,
    pub ai_detected: bool,
    pub ai_class: String,
    pub ai_confidence: f64,
    pub ai_raw_result: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new report
#[derive(Debug)]
pub struct NewReport {
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub category: ReportCategory,
    pub analysis: AiAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Pending).unwrap(),
            "\"Pending\""
        );
        let parsed: ReportStatus = serde_json::from_str("\"Resolved\"").unwrap();
        assert_eq!(parsed, ReportStatus::Resolved);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<ReportStatus>("\"Archived\"").is_err());
        assert!(serde_json::from_str::<ReportStatus>("\"pending\"").is_err());
    }

    #[test]
    fn test_category_wire_values() {
        assert_eq!(
            serde_json::to_string(&ReportCategory::JalanRusak).unwrap(),
            "\"Jalan Rusak\""
        );
        assert_eq!(
            serde_json::to_string(&ReportCategory::ButuhVerifikasi).unwrap(),
            "\"Butuh Verifikasi\""
        );
        let parsed: ReportCategory = serde_json::from_str("\"Pohon Tumbang\"").unwrap();
        assert_eq!(parsed, ReportCategory::PohonTumbang);
    }

    #[test]
    fn test_category_default_needs_verification() {
        assert_eq!(ReportCategory::default(), ReportCategory::ButuhVerifikasi);
    }
}
