use axum::http::HeaderName;
use userlookup_application::UserLookupService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_lookup_service: UserLookupService,
    pub principal_header: HeaderName,
}
