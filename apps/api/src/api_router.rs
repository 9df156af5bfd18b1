use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use userlookup_core::AppError;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(
    app_state: AppState,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let user_routes = Router::new()
        .route(
            "/users/user/{login}",
            get(handlers::users::get_user_by_login_handler),
        )
        .route(
            "/users/email/{*email}",
            get(handlers::users::get_user_by_email_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_principal,
        ));

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(user_routes)
        .fallback(handlers::no_route_handler)
        .layer(TraceLayer::new_for_http());

    if let Some(allowed_origin) = cors_allowed_origin {
        router = router.layer(cors::build_cors_layer(allowed_origin)?);
    }

    Ok(router.with_state(app_state))
}

#[cfg(test)]
mod tests;
