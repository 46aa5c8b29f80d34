use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "PharmaGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the external analysis service.
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000";

/// Default per-request timeout for the analysis service, in seconds.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 120;

/// Default address the dashboard binds to (loopback only).
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default port the dashboard serves on.
pub const DEFAULT_PORT: u16 = 8787;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "pharmaguard=info"
}

/// Base URL of the analysis service.
/// `PHARMAGUARD_ANALYSIS_URL` overrides the local default; trailing
/// slashes are trimmed so path joining stays predictable.
pub fn analysis_base_url() -> String {
    let raw = std::env::var("PHARMAGUARD_ANALYSIS_URL")
        .unwrap_or_else(|_| DEFAULT_ANALYSIS_URL.to_string());
    raw.trim_end_matches('/').to_string()
}

/// Per-request timeout for the analysis service.
/// `PHARMAGUARD_ANALYSIS_TIMEOUT_SECS` overrides the default.
pub fn analysis_timeout_secs() -> u64 {
    parse_timeout(std::env::var("PHARMAGUARD_ANALYSIS_TIMEOUT_SECS").ok())
}

/// Socket address the dashboard listens on.
/// `PHARMAGUARD_BIND` and `PHARMAGUARD_PORT` override the defaults.
pub fn bind_addr() -> SocketAddr {
    let ip = std::env::var("PHARMAGUARD_BIND")
        .ok()
        .and_then(|raw| raw.parse::<IpAddr>().ok())
        .unwrap_or(DEFAULT_BIND_ADDR);
    let port = std::env::var("PHARMAGUARD_PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::new(ip, port)
}

fn parse_timeout(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_ANALYSIS_TIMEOUT_SECS)
}
