pub mod detection_service;
pub mod report_service;
pub mod triage;

pub use detection_service::DetectionService;
pub use report_service::ReportService;
