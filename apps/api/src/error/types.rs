use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    code: String,
    message: String,
    status: u16,
}

impl ErrorResponse {
    pub(super) fn new(code: &str, message: String, status: u16) -> Self {
        Self {
            code: code.to_owned(),
            message,
            status,
        }
    }
}
