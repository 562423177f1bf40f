mod report;

pub use report::{AiAnalysis, NewReport, Report, ReportCategory, ReportStatus};
