use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use auditdesk_core::AppError;
use tower_sessions::Session;

use crate::error::ApiResult;
use crate::session::require_session_state;
use crate::state::AppState;

pub async fn require_auth(session: Session, mut request: Request, next: Next) -> ApiResult<Response> {
    let state = require_session_state(&session).await?;

    request.extensions_mut().insert(state);
    Ok(next.run(request).await)
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method())
        && !origin_is_acceptable(request.headers(), &state.frontend_url)
    {
        return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
    }

    Ok(next.run(request).await)
}

/// Browser mutations must come from the configured frontend origin. Requests
/// carrying neither `Origin` nor `Referer` (curl-style clients without ambient
/// cookies) pass.
fn origin_is_acceptable(headers: &HeaderMap, allowed_origin: &str) -> bool {
    if headers
        .get("sec-fetch-site")
        .is_some_and(|value| value.as_bytes() == b"cross-site")
    {
        return false;
    }

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    match (origin, referer) {
        (Some(origin), _) => origin == allowed_origin,
        (None, Some(referer)) => referer.starts_with(allowed_origin),
        (None, None) => true,
    }
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, Method, header};

    use super::{is_state_changing_method, origin_is_acceptable};

    const FRONTEND: &str = "http://localhost:5174";

    #[test]
    fn matching_origin_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ORIGIN, HeaderValue::from_static(FRONTEND));
        assert!(origin_is_acceptable(&headers, FRONTEND));
    }

    #[test]
    fn mismatched_origin_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ORIGIN,
            HeaderValue::from_static("http://evil.example"),
        );
        assert!(!origin_is_acceptable(&headers, FRONTEND));
    }

    #[test]
    fn cross_site_fetch_metadata_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ORIGIN, HeaderValue::from_static(FRONTEND));
        headers.insert("sec-fetch-site", HeaderValue::from_static("cross-site"));
        assert!(!origin_is_acceptable(&headers, FRONTEND));
    }

    #[test]
    fn referer_from_the_frontend_is_accepted_without_origin() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://localhost:5174/login"),
        );
        assert!(origin_is_acceptable(&headers, FRONTEND));
    }

    #[test]
    fn clients_without_origin_or_referer_are_accepted() {
        let headers = HeaderMap::new();
        assert!(origin_is_acceptable(&headers, FRONTEND));
    }

    #[test]
    fn only_mutating_methods_are_checked() {
        assert!(is_state_changing_method(&Method::POST));
        assert!(is_state_changing_method(&Method::DELETE));
        assert!(!is_state_changing_method(&Method::GET));
        assert!(!is_state_changing_method(&Method::OPTIONS));
    }
}
