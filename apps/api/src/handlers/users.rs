use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use userlookup_application::ProjectedUserRecord;
use userlookup_core::{AppError, Principal};
use userlookup_domain::RequestContext;

use crate::dto::UserLookupQuery;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn get_user_by_login_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(login): Path<String>,
    Query(query): Query<UserLookupQuery>,
) -> ApiResult<Json<ProjectedUserRecord>> {
    let context = RequestContext::parse_or_default(query.context.as_deref())?;

    let record = state
        .user_lookup_service
        .get_user_by_login(&principal, login.as_str(), context)
        .await
        .inspect_err(|error| log_lookup_failure(error, &principal, "login"))?;

    Ok(Json(record.unwrap_or_default()))
}

pub async fn get_user_by_email_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(email): Path<String>,
    Query(query): Query<UserLookupQuery>,
) -> ApiResult<Json<ProjectedUserRecord>> {
    let context = RequestContext::parse_or_default(query.context.as_deref())?;

    let record = state
        .user_lookup_service
        .get_user_by_email(&principal, email.as_str(), context)
        .await
        .inspect_err(|error| log_lookup_failure(error, &principal, "email"))?;

    Ok(Json(record.unwrap_or_default()))
}

fn log_lookup_failure(error: &AppError, principal: &Principal, lookup: &'static str) {
    let principal_id = principal.user_id().map(|user_id| user_id.get()).unwrap_or(0);

    match error {
        AppError::Internal(_) => {
            tracing::error!(error = %error, principal_id, lookup, "user lookup failed");
        }
        _ => tracing::debug!(code = error.code(), principal_id, lookup, "user lookup rejected"),
    }
}
