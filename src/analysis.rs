//! Transport adapter for the external analysis service.
//!
//! The whole exchange is one request: `POST {base}/analyze` with a
//! multipart body (`file` = the VCF bytes, `drugs` = comma-joined names),
//! answered by a JSON array of [`DrugRiskReport`]. Every report is
//! schema-validated here before it can reach a caller; the response is
//! never trusted silently.

use std::time::Duration;

use crate::models::DrugRiskReport;

/// Errors from the analysis exchange.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Cannot reach analysis service at {0}")]
    Connection(String),
    #[error("Analysis request timed out after {0}s")]
    Timeout(u64),
    #[error("Analysis service returned {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// HTTP client for the analysis service.
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl AnalysisClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client configured from the environment
    /// (`PHARMAGUARD_ANALYSIS_URL`, `PHARMAGUARD_ANALYSIS_TIMEOUT_SECS`).
    pub fn from_env() -> Self {
        Self::new(
            &crate::config::analysis_base_url(),
            crate::config::analysis_timeout_secs(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a VCF and a non-empty drug list for analysis.
    ///
    /// Exactly one request; no retry. Returns the reports in response
    /// order, each already structurally validated.
    pub async fn submit(
        &self,
        file_name: &str,
        file_bytes: Vec<u8>,
        drugs: &[String],
    ) -> Result<Vec<DrugRiskReport>, AnalysisError> {
        let url = format!("{}/analyze", self.base_url);

        let file_part = reqwest::multipart::Part::bytes(file_bytes)
            .file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("drugs", drugs.join(","));

        tracing::info!(%url, drug_count = drugs.len(), "Submitting analysis request");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AnalysisError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AnalysisError::Timeout(self.timeout_secs)
                } else {
                    AnalysisError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Http(e.to_string()))?;

        let reports: Vec<DrugRiskReport> = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        for (i, report) in reports.iter().enumerate() {
            report.validate().map_err(|e| {
                AnalysisError::MalformedResponse(format!("report[{i}]: {e}"))
            })?;
        }

        tracing::info!(report_count = reports.len(), "Analysis response accepted");
        Ok(reports)
    }
}
