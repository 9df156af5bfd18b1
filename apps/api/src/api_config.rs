use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderName;
use tracing_subscriber::EnvFilter;
use userlookup_core::AppError;
use userlookup_infrastructure::DEFAULT_GRAVATAR_BASE_URL;

#[derive(Debug, Clone)]
pub enum UserStoreConfig {
    Memory {
        seed_path: Option<PathBuf>,
    },
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

impl UserStoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory { .. } => "memory",
            Self::Postgres { .. } => "postgres",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub api_host: String,
    pub api_port: u16,
    pub public_base_url: String,
    pub user_store: UserStoreConfig,
    pub principal_header: HeaderName,
    pub avatar_base_url: String,
    pub avatar_size: u16,
    pub hidden_fields: String,
    pub cors_allowed_origin: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{api_port}"));

        let user_store = match env::var("USER_STORE")
            .unwrap_or_else(|_| "memory".to_owned())
            .as_str()
        {
            "memory" => UserStoreConfig::Memory {
                seed_path: optional_non_empty_env("USER_SEED_PATH").map(PathBuf::from),
            },
            "postgres" => UserStoreConfig::Postgres {
                database_url: required_non_empty_env("DATABASE_URL")?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|value| value.parse::<u32>().ok())
                    .unwrap_or(10),
            },
            other => {
                return Err(AppError::Validation(format!(
                    "USER_STORE must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        if migrate_only && !matches!(user_store, UserStoreConfig::Postgres { .. }) {
            return Err(AppError::Validation(
                "the migrate command requires USER_STORE=postgres".to_owned(),
            ));
        }

        let principal_header =
            env::var("PRINCIPAL_HEADER").unwrap_or_else(|_| "x-user-id".to_owned());
        let principal_header = HeaderName::from_str(principal_header.trim()).map_err(|error| {
            AppError::Validation(format!("invalid PRINCIPAL_HEADER '{principal_header}': {error}"))
        })?;

        let avatar_base_url =
            env::var("AVATAR_BASE_URL").unwrap_or_else(|_| DEFAULT_GRAVATAR_BASE_URL.to_owned());
        let avatar_size = match optional_non_empty_env("AVATAR_SIZE") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid AVATAR_SIZE: {error}")))?,
            None => 96,
        };

        Ok(Self {
            migrate_only,
            api_host,
            api_port,
            public_base_url,
            user_store,
            principal_header,
            avatar_base_url,
            avatar_size,
            hidden_fields: env::var("USER_RECORD_HIDDEN_FIELDS").unwrap_or_default(),
            cors_allowed_origin: optional_non_empty_env("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn optional_non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
