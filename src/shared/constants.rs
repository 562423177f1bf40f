/// Image URL substituted when object storage is unconfigured (mock mode)
pub const MOCK_IMAGE_URL: &str = "https://placehold.co/600x400?text=EnvWatch+Report";

/// Success message returned to citizens on report submission
pub const REPORT_RECEIVED_MESSAGE: &str = "Laporan diterima";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can triage citizen reports and update their status
pub const ROLE_ADMIN: &str = "admin";
