//! Response rendering.
//!
//! # Responsibilities
//! - Map `Decision::Denied` to 403 with an empty body
//! - Map `Decision::Authenticated` to 302 with `Location`
//! - Attach `Set-Cookie` only when the decision carries a cookie
//!
//! # Design Decisions
//! - No error detail ever reaches the client

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::redirect::DEFAULT_REDIRECT;
use crate::auth::Decision;

impl IntoResponse for Decision {
    fn into_response(self) -> Response {
        match self {
            Decision::Denied => StatusCode::FORBIDDEN.into_response(),
            Decision::Authenticated { cookie, redirect_to } => {
                let location = HeaderValue::from_str(&redirect_to)
                    .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_REDIRECT));
                let jar = cookie.into_iter().fold(CookieJar::new(), CookieJar::add);

                (StatusCode::FOUND, [(header::LOCATION, location)], jar).into_response()
            }
        }
    }
}
