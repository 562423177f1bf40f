pub mod report_handler;

pub use report_handler::{get_report, list_reports, submit_report, update_report_status};
