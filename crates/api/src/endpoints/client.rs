//! Browser-facing endpoints: client log ingestion, the static landing page
//! and the server clock. These sit outside the versioned API prefix.

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use chrono::Utc;
use kinoteka_common::AppResult;
use serde::{Deserialize, Serialize};

use crate::{middleware::AppState, response::ApiResponse};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Kinoteka</title>
</head>
<body>
    <h1>Kinoteka</h1>
    <p>Movie catalog API. See <code>/api/v1/movies</code>.</p>
</body>
</html>
"#;

/// Client log submission form.
#[derive(Debug, Deserialize)]
pub struct SendLogsForm {
    /// JSON-encoded array of log entries; absent means an empty batch.
    pub logs: Option<String>,
}

/// Client log submission result.
#[derive(Debug, Serialize)]
pub struct LogsAppendedResponse {
    pub appended: usize,
}

/// Append a batch of browser log entries to the server-side log file.
async fn send_logs(
    State(state): State<AppState>,
    Form(form): Form<SendLogsForm>,
) -> AppResult<ApiResponse<LogsAppendedResponse>> {
    let raw = form.logs.as_deref().unwrap_or("[]");
    let appended = state.client_log_service.append(raw).await?;
    Ok(ApiResponse::ok(LogsAppendedResponse { appended }))
}

/// Serve the static landing page.
async fn page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Current server time, RFC 3339.
async fn time() -> String {
    Utc::now().to_rfc3339()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/log", post(send_logs))
        .route("/page", get(page))
        .route("/time", get(time))
}
