use axum::{
    extract::Request,
    http::{header::COOKIE, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use roledash_frontend::{
    guard::{self, GuardDecision},
    session::{self, SessionClaims},
    utils::cookies::{extract_cookie_value, ACCESS_COOKIE_NAME},
};

use crate::error::AppError;

/// Raw `accessToken` value from the request's `Cookie` headers.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| extract_cookie_value(header, ACCESS_COOKIE_NAME))
        .filter(|token| !token.is_empty())
}

pub fn claims_from_headers(headers: &HeaderMap) -> Result<Option<SessionClaims>, AppError> {
    let token = access_token(headers);
    Ok(session::resolve(token.as_deref())?)
}

/// Runs the allow / login / home decision for page requests under the guarded paths.
pub async fn route_guard(req: Request, next: Next) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();
    if !guard::applies_to(&path) {
        return Ok(next.run(req).await);
    }

    let claims = claims_from_headers(req.headers()).inspect_err(|err| {
        tracing::warn!(path = %path, error = %err, "rejecting request with malformed session");
    })?;
    let decision = guard::evaluate(&path, claims.as_ref());
    tracing::debug!(
        path = %path,
        role = ?claims.as_ref().and_then(|c| c.role),
        ?decision,
        "route guard decision"
    );

    match decision {
        GuardDecision::Allow => Ok(next.run(req).await),
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToHome => {
            let target = decision.target().unwrap_or(guard::HOME_PATH);
            tracing::info!(from = %path, to = target, "route guard redirect");
            Ok(Redirect::temporary(target).into_response())
        }
    }
}
