use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::core::middleware::auth_middleware;
use crate::features::auth::services::TokenService;
use crate::features::reports::handlers::{
    get_report, list_reports, submit_report, update_report_status,
};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature.
///
/// Submission and ticket lookup are public; the triage list and status
/// update sit behind the admin bearer guard.
pub fn routes(
    report_service: Arc<ReportService>,
    token_service: Arc<TokenService>,
    max_upload_size: usize,
) -> Router {
    let admin_guard = from_fn_with_state(token_service, auth_middleware);

    Router::new()
        .route(
            "/api/reports",
            // Allow body size up to the image limit + buffer for multipart overhead
            post(submit_report).layer(DefaultBodyLimit::max(max_upload_size + 1024 * 1024)),
        )
        .route("/api/reports", get(list_reports).layer(admin_guard.clone()))
        .route("/api/reports/{id}", get(get_report))
        .route(
            "/api/reports/{id}/status",
            patch(update_report_status).layer(admin_guard),
        )
        .with_state(report_service)
}
