use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName};
use axum::middleware::Next;
use axum::response::Response;
use userlookup_core::{AppError, Principal, UserId};

use crate::error::ApiResult;
use crate::state::AppState;

/// Resolves the calling principal from the trusted principal header.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let principal = principal_from_headers(request.headers(), &state.principal_header)?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Reads the principal id set by the fronting host.
///
/// A missing, empty or `0` value is anonymous, matching the user store's
/// convention that id 0 is nobody.
pub fn principal_from_headers(
    headers: &HeaderMap,
    header_name: &HeaderName,
) -> Result<Principal, AppError> {
    let Some(value) = headers.get(header_name) else {
        return Ok(Principal::Anonymous);
    };

    let value = value.to_str().map_err(|error| {
        AppError::Validation(format!("invalid {header_name} header: {error}"))
    })?;
    if value.trim().is_empty() {
        return Ok(Principal::Anonymous);
    }

    let user_id = value.parse::<UserId>()?;
    if user_id.get() == 0 {
        return Ok(Principal::Anonymous);
    }

    Ok(Principal::User(user_id))
}
