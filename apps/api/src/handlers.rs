pub mod health;
pub mod users;

use userlookup_core::AppError;

use crate::error::ApiError;

pub async fn no_route_handler() -> ApiError {
    AppError::NotFound("no route was found matching the URL and request method".to_owned()).into()
}
