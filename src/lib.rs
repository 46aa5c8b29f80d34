pub mod analysis; // transport adapter for the external analysis service
pub mod config;
pub mod demo; // embedded sample report set
pub mod models; // drug-risk report data model
pub mod render; // presentation layer: display transforms + HTML views
pub mod store; // per-session ephemeral report store
pub mod validate; // pre-submission validators
pub mod web; // axum router, handlers, session cookie
