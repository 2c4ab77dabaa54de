use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use forgeerp_core::{User, UserId};

use crate::context::UserContext;

/// Nick of the acting user (required).
pub const USER_HEADER: &str = "x-forgeerp-user";
/// Stable id of the acting user (optional UUID).
pub const USER_ID_HEADER: &str = "x-forgeerp-user-id";
/// Preferred language code (optional).
pub const LANG_HEADER: &str = "x-forgeerp-lang";

/// Establish the [`UserContext`] from request headers.
///
/// Authentication happens upstream; this only carries the identity through to
/// the sales form mods.
pub async fn user_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = extract_user(req.headers())?;
    req.extensions_mut().insert(UserContext::new(user));
    Ok(next.run(req).await)
}

fn extract_user(headers: &HeaderMap) -> Result<User, StatusCode> {
    let nick = header_str(headers, USER_HEADER)?.ok_or(StatusCode::UNAUTHORIZED)?;
    if nick.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let mut user = User::new(nick);
    if let Some(id) = header_str(headers, USER_ID_HEADER)? {
        user.id = id.parse::<UserId>().map_err(|_| StatusCode::BAD_REQUEST)?;
    }
    if let Some(lang) = header_str(headers, LANG_HEADER)? {
        user = user.with_lang_code(lang);
    }
    Ok(user)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, StatusCode> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.trim()))
            .map_err(|_| StatusCode::BAD_REQUEST),
    }
}
