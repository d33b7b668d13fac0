use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use super::ApiError;

pub const ADMIN_HEADER: &str = "X-Admin-Id";

/// Admin identity forwarded by the outer auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminId(pub String);

impl AdminId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_request_headers(req: &HttpRequest) -> Result<Self, ApiError> {
        req.headers()
            .get(ADMIN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| AdminId(value.to_string()))
            .ok_or_else(|| ApiError::unauthorized("missing admin identity"))
    }
}

impl FromRequest for AdminId {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req))
    }
}
