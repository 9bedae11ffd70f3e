//! Centralized configuration (environment variables + defaults).

/// Spreadsheet id of the backing record store (required).
pub fn sheet_id() -> String {
    std::env::var("SHEET_ID").expect("SHEET_ID must be set")
}

/// Worksheet (tab) holding the verified-document rows.
pub fn sheet_worksheet() -> String {
    std::env::var("SHEET_WORKSHEET").unwrap_or_else(|_| "documentos_verificados".to_string())
}

/// Service-account credential JSON payload.
///
/// May be empty; every fetch then fails and the service keeps serving the
/// last cached snapshot (empty until a fetch ever succeeds).
pub fn google_creds_json() -> String {
    std::env::var("GOOGLE_CREDS_JSON").unwrap_or_default()
}

/// HTTP listen port.
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(5050)
}
