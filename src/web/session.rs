//! Browser session identity.
//!
//! Each browser gets a `pg_session` cookie holding a UUID; the report
//! store is keyed by it. The cookie carries no data and no expiry — the
//! session's reports live in process memory and die with it.

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "pg_session";

/// The session id extracted (or minted) for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Middleware: attach a `SessionId` to every request, issuing the cookie
/// when the browser doesn't present a valid one yet.
pub async fn issue_session(mut request: Request, next: Next) -> Response {
    let existing = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_session_cookie);

    let (id, is_new) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    request.extensions_mut().insert(SessionId(id));

    let mut response = next.run(request).await;
    if is_new {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// Pull a valid session UUID out of a Cookie header value.
fn parse_session_cookie(header: &str) -> Option<Uuid> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_cookie_among_others() {
        let id = Uuid::new_v4();
        let header = format!("theme=dark; {SESSION_COOKIE}={id}; lang=en");
        assert_eq!(parse_session_cookie(&header), Some(id));
    }

    #[test]
    fn ignores_missing_or_invalid_cookie() {
        assert_eq!(parse_session_cookie("theme=dark"), None);
        assert_eq!(
            parse_session_cookie(&format!("{SESSION_COOKIE}=not-a-uuid")),
            None
        );
        assert_eq!(parse_session_cookie(""), None);
    }

    #[test]
    fn ignores_lookalike_cookie_names() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_session_cookie(&format!("x{SESSION_COOKIE}={id}")),
            None
        );
    }
}
