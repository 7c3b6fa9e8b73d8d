//! Problem report route

use crate::error::ApiResult;
use crate::services::ReportService;
use crate::state::AppState;
use crate::types::{ReportRequest, ReportResponse};
use axum::{extract::State, Json};

/// Submit a problem report
///
/// POST /api/report
///
/// Deliberately outside the gate so broken logins can still be
/// reported.
pub async fn submit_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    // An absent problem field and an empty one fail the same way
    let problem = req.problem.as_deref().unwrap_or_default();
    let report = ReportService::submit(&state.db, problem, None).await?;

    Ok(Json(ReportResponse {
        message: "Report submitted successfully".to_string(),
        report,
    }))
}
