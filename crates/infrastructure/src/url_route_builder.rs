use url::Url;

use userlookup_application::RouteUrlBuilder;
use userlookup_core::{AppError, AppResult};

/// Builds route URLs below a public base URL such as `https://example.com/wp-json`.
#[derive(Debug, Clone)]
pub struct UrlRouteBuilder {
    base_url: Url,
}

impl UrlRouteBuilder {
    /// Creates a builder from an absolute http(s) base URL.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            AppError::Validation(format!("invalid public base url '{base_url}': {error}"))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Validation(format!(
                "public base url must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self { base_url })
    }
}

impl RouteUrlBuilder for UrlRouteBuilder {
    fn route_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_owned();
        let route_path = path.trim_start_matches('/');

        url.set_path(&format!("{base_path}/{route_path}"));
        url.set_query(None);
        url.set_fragment(None);
        url.into()
    }
}
