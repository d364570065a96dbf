use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct RawUserIdQuery {
    user_id: Option<String>,
}

/// Typed `?user_id=N` query parameter. Missing or malformed values are
/// rejected with 400 before any handler code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdQuery(pub i32);

impl<S> FromRequestParts<S> for UserIdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawUserIdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid query string"))?;

        let value = raw
            .user_id
            .ok_or_else(|| AppError::bad_request("user_id query parameter is required"))?;

        parse_user_id(&value).map(Self)
    }
}

fn parse_user_id(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            "user_id must be a positive integer",
        )),
    }
}
