use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use userlookup_core::{AppError, AppResult};

/// Requested field visibility granularity for a projected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestContext {
    /// Regular read access.
    #[default]
    View,
    /// Access for editing the user, exposes private fields.
    Edit,
    /// Minimal representation for embedding in other resources.
    Embed,
}

impl RequestContext {
    /// Returns the transport value for this context.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Embed => "embed",
        }
    }

    /// Parses an optional transport value, falling back to `view`.
    pub fn parse_or_default(value: Option<&str>) -> AppResult<Self> {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::from_str(value),
            None => Ok(Self::default()),
        }
    }

    /// Returns whether roles, capabilities and the email key are exposed.
    #[must_use]
    pub fn includes_account_fields(&self) -> bool {
        matches!(self, Self::View | Self::Edit)
    }

    /// Returns whether private values are exposed.
    #[must_use]
    pub fn includes_private_fields(&self) -> bool {
        matches!(self, Self::Edit)
    }
}

impl Display for RequestContext {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RequestContext {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "embed" => Ok(Self::Embed),
            _ => Err(AppError::Validation(format!(
                "context must be one of 'view', 'edit' or 'embed', got '{value}'"
            ))),
        }
    }
}
