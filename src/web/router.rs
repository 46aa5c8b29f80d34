//! Dashboard router.
//!
//! Returns a composable `Router` wiring the views, form actions and
//! report downloads behind the session middleware.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::web::handlers;
use crate::web::session;
use crate::web::AppState;

/// Request body ceiling. Above the 5 MiB upload limit on purpose: the
/// validator owns the user-facing size rejection, this is only the
/// transport backstop.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Build the dashboard router.
pub fn dashboard_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/upload", get(handlers::upload_form))
        .route("/analyze", post(handlers::analyze))
        .route("/demo", post(handlers::load_demo))
        .route("/dashboard", get(handlers::dashboard))
        .route("/reports/:index/download", get(handlers::download))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(session::issue_session))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Json;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::analysis::AnalysisClient;
    use crate::demo::demo_reports;
    use crate::models::DrugRiskReport;

    /// State whose analysis client points at a port nothing listens on.
    async fn dead_service_state() -> Arc<AppState> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Arc::new(AppState::new(AnalysisClient::new(&format!("http://{addr}"), 5)))
    }

    /// State whose analysis client reaches a stub answering with the
    /// sample report set.
    async fn stub_service_state() -> Arc<AppState> {
        async fn ok_stub() -> Json<Vec<DrugRiskReport>> {
            Json(demo_reports())
        }
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stub = Router::new().route("/analyze", post(ok_stub));
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });
        Arc::new(AppState::new(AnalysisClient::new(&format!("http://{addr}"), 5)))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn session_cookie(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("session cookie issued")
            .to_string()
    }

    const BOUNDARY: &str = "pgx-test-boundary";

    fn multipart_body(file_name: Option<&str>, file_content: &str, drugs: &str) -> Body {
        let mut body = String::new();
        if let Some(name) = file_name {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n\
                 {file_content}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"drugs\"\r\n\r\n{drugs}\r\n"
        ));
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        Body::from(body)
    }

    fn analyze_request(file_name: Option<&str>, file_content: &str, drugs: &str) -> Request<Body> {
        Request::post("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(multipart_body(file_name, file_content, drugs))
            .unwrap()
    }

    #[tokio::test]
    async fn landing_page_serves_both_entry_points() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("PharmaGuard"));
        assert!(html.contains("/upload"));
        assert!(html.contains("/dashboard"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn fresh_session_gets_cookie_and_demo_dashboard() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = session_cookie(&response);
        assert!(cookie.starts_with("pg_session="));

        let html = body_string(response).await;
        assert!(html.contains("Demo Data"));
        assert!(html.contains("Warfarin"));
        assert!(html.contains("97.0%"), "Codeine confidence should render");
    }

    #[tokio::test]
    async fn demo_action_stores_reports_for_the_session() {
        let app = dashboard_router(dead_service_state().await);

        let response = app
            .clone()
            .oneshot(Request::post("/demo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
        let cookie = session_cookie(&response);

        let response = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Clopidogrel"));
        // Stored reports are the session's own, not the fallback.
        assert!(!html.contains("Demo Data"));
    }

    #[tokio::test]
    async fn corrupt_session_data_falls_back_to_demo() {
        let state = dead_service_state().await;
        let session = Uuid::new_v4();
        state.store.save_raw(session, "{broken json");

        let app = dashboard_router(state);
        let response = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, format!("pg_session={session}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Demo Data"));
    }

    #[tokio::test]
    async fn analyze_rejects_non_vcf_file() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(analyze_request(Some("variants.txt"), "data", "Warfarin"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Only VCF files are allowed"));
        // Entered drugs survive the round trip.
        assert!(html.contains(r#"value="Warfarin""#));
    }

    #[tokio::test]
    async fn analyze_rejects_missing_file() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(analyze_request(None, "", "Warfarin"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Please select a VCF file"));
    }

    #[tokio::test]
    async fn analyze_rejects_empty_drug_list() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(analyze_request(
                Some("patient.vcf"),
                "##fileformat=VCFv4.2",
                " , ,",
            ))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Please enter at least one drug name"));
    }

    #[tokio::test]
    async fn analyze_surfaces_service_failure_as_retry_message() {
        // The dead-port client fails fast with a connect error.
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(analyze_request(
                Some("patient.vcf"),
                "##fileformat=VCFv4.2",
                "Warfarin, Clopidogrel",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("An error occurred during analysis. Please try again."));
    }

    #[tokio::test]
    async fn analyze_success_redirects_and_stores_reports() {
        let app = dashboard_router(stub_service_state().await);

        let response = app
            .clone()
            .oneshot(analyze_request(
                Some("patient.vcf"),
                "##fileformat=VCFv4.2",
                "Warfarin, Clopidogrel",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
        let cookie = session_cookie(&response);

        let response = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Pharmacogenomic Reports"));
        assert!(html.contains("Simvastatin"));
        assert!(!html.contains("Demo Data"));
    }

    #[tokio::test]
    async fn download_serves_pretty_json_attachment() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(
                Request::get("/reports/0/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"PT-2026-DEMO-12847-Warfarin.json\""
        );

        let body = body_string(response).await;
        let report: DrugRiskReport = serde_json::from_str(&body).unwrap();
        assert_eq!(report.drug, "Warfarin");
    }

    #[tokio::test]
    async fn download_unknown_index_is_404() {
        let app = dashboard_router(dead_service_state().await);
        let response = app
            .oneshot(
                Request::get("/reports/99/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn existing_cookie_is_not_reissued() {
        let app = dashboard_router(dead_service_state().await);
        let session = Uuid::new_v4();
        let response = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, format!("pg_session={session}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
