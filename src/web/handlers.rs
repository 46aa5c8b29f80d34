//! Request handlers for the three views and the report actions.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use serde::Serialize;

use crate::config::APP_VERSION;
use crate::demo::demo_reports;
use crate::models::DrugRiskReport;
use crate::render::pages::{dashboard_page, landing_page, upload_page, UploadForm};
use crate::validate::{check_vcf_file, parse_drug_list};
use crate::web::error::WebError;
use crate::web::session::SessionId;
use crate::web::AppState;

/// Message shown when the remote analysis call fails; the user retries.
const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred during analysis. Please try again.";

/// `GET /` — landing view.
pub async fn landing() -> Html<String> {
    Html(landing_page())
}

/// `GET /upload` — clean upload form.
pub async fn upload_form() -> Html<String> {
    Html(upload_page(&UploadForm::default()))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: APP_VERSION,
    })
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `POST /analyze` — validate the submission, forward it to the analysis
/// service, store the returned reports, redirect to the dashboard.
///
/// Validation and transport failures re-render the upload view with a
/// field-scoped message; nothing is sent to the service until the local
/// checks pass.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut drugs_raw = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid form submission: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| WebError::BadRequest(format!("Invalid file upload: {e}")))?;
                // A form posted with no selection arrives as an empty part.
                if !name.is_empty() && !bytes.is_empty() {
                    file = Some((name, bytes.to_vec()));
                }
            }
            Some("drugs") => {
                drugs_raw = field
                    .text()
                    .await
                    .map_err(|e| WebError::BadRequest(format!("Invalid drug input: {e}")))?;
            }
            _ => {}
        }
    }

    let Some((file_name, file_bytes)) = file else {
        return Ok(upload_error_page(&drugs_raw, Some("Please select a VCF file"), None));
    };

    if let Err(e) = check_vcf_file(&file_name, file_bytes.len() as u64) {
        return Ok(upload_error_page(&drugs_raw, Some(&e.to_string()), None));
    }

    let drugs = match parse_drug_list(&drugs_raw) {
        Ok(drugs) => drugs,
        Err(e) => {
            return Ok(upload_error_page(&drugs_raw, None, Some(&e.to_string())));
        }
    };

    match state.client.submit(&file_name, file_bytes, &drugs).await {
        Ok(reports) => {
            state.store.save(session.0, &reports)?;
            tracing::info!(
                session = %session.0,
                report_count = reports.len(),
                "Analysis accepted"
            );
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(e) => {
            tracing::warn!(session = %session.0, error = %e, "Analysis submission failed");
            Ok(upload_error_page(&drugs_raw, Some(ANALYSIS_FAILED_MESSAGE), None))
        }
    }
}

/// `POST /demo` — store the embedded sample set for this session.
pub async fn load_demo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
) -> Result<Redirect, WebError> {
    state.store.save(session.0, &demo_reports())?;
    Ok(Redirect::to("/dashboard"))
}

/// `GET /dashboard` — render this session's reports, or the sample set
/// when nothing (readable) is stored.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
) -> Html<String> {
    let (reports, is_demo) = match state.store.load(session.0) {
        Some(reports) => (reports, false),
        None => (demo_reports(), true),
    };
    Html(dashboard_page(&reports, is_demo))
}

/// `GET /reports/{index}/download` — the report as a pretty-printed JSON
/// attachment named `{patient_id}-{drug}.json`.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Path(index): Path<usize>,
) -> Result<Response, WebError> {
    let reports = state.store.load(session.0).unwrap_or_else(demo_reports);
    let report = reports
        .get(index)
        .ok_or_else(|| WebError::NotFound(format!("No report at index {index}")))?;

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| WebError::Internal(format!("Failed to serialize report: {e}")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_file_name(report)),
        ),
    ];
    Ok((headers, json).into_response())
}

fn upload_error_page(
    drugs_value: &str,
    file_error: Option<&str>,
    drug_error: Option<&str>,
) -> Response {
    Html(upload_page(&UploadForm {
        drugs_value,
        file_error,
        drug_error,
    }))
    .into_response()
}

/// Attachment name from patient id and drug, restricted to characters
/// safe inside a quoted Content-Disposition filename.
fn download_file_name(report: &DrugRiskReport) -> String {
    fn sanitize(raw: &str) -> String {
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
    format!("{}-{}.json", sanitize(&report.patient_id), sanitize(&report.drug))
}
