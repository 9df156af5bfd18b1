use std::sync::Arc;

use tracing::info;
use userlookup_application::{
    AuthorizationService, CapabilityRepository, UserLookupService, UserProjector, UserRepository,
};
use userlookup_core::AppError;
use userlookup_infrastructure::{
    GravatarAvatarResolver, HiddenFieldsExtension, InMemoryUserRepository, PostgresUserRepository,
    UrlRouteBuilder,
};

use crate::api_config::{ApiConfig, UserStoreConfig};
use crate::state::AppState;

use super::connect_and_migrate;

struct UserStore {
    user_repository: Arc<dyn UserRepository>,
    capability_repository: Arc<dyn CapabilityRepository>,
}

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let user_store = build_user_store(&config.user_store).await?;
    info!(user_store = config.user_store.kind(), "user store ready");

    let mut projector = UserProjector::new(
        Arc::new(GravatarAvatarResolver::new(
            config.avatar_base_url.as_str(),
            config.avatar_size,
        )),
        Arc::new(UrlRouteBuilder::new(&config.public_base_url)?),
    );

    let hidden_fields = HiddenFieldsExtension::from_list(&config.hidden_fields);
    if !hidden_fields.is_empty() {
        projector = projector.with_extension(Arc::new(hidden_fields));
    }

    Ok(AppState {
        user_lookup_service: UserLookupService::new(
            user_store.user_repository,
            AuthorizationService::new(user_store.capability_repository),
            projector,
        ),
        principal_header: config.principal_header.clone(),
    })
}

async fn build_user_store(config: &UserStoreConfig) -> Result<UserStore, AppError> {
    match config {
        UserStoreConfig::Memory { seed_path } => {
            let repository = Arc::new(match seed_path {
                Some(path) => InMemoryUserRepository::from_seed_file(path)?,
                None => InMemoryUserRepository::new(),
            });

            Ok(UserStore {
                user_repository: repository.clone(),
                capability_repository: repository,
            })
        }
        UserStoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = connect_and_migrate(database_url, *max_connections).await?;
            let repository = Arc::new(PostgresUserRepository::new(pool));

            Ok(UserStore {
                user_repository: repository.clone(),
                capability_repository: repository,
            })
        }
    }
}
