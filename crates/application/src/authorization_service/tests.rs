use std::sync::Arc;

use userlookup_core::{AppError, Principal, UserId};
use userlookup_domain::Capability;

use crate::test_support::{FakeUserStore, admin, alice, bob};

use super::{AuthorizationService, USER_CANNOT_LIST_CODE};

fn service_with(store: Arc<FakeUserStore>) -> AuthorizationService {
    AuthorizationService::new(store)
}

#[tokio::test]
async fn viewing_self_is_allowed_without_capabilities() {
    let store = Arc::new(FakeUserStore::with_users(vec![bob()]));
    let service = service_with(store.clone());

    let result = service
        .authorize_user_view(&Principal::User(UserId::new(5)), UserId::new(5))
        .await;

    assert!(result.is_ok());
    assert!(store.calls().await.is_empty());
}

#[tokio::test]
async fn viewing_self_is_allowed_even_for_unknown_principal() {
    let service = service_with(Arc::new(FakeUserStore::default()));

    let result = service
        .authorize_user_view(&Principal::User(UserId::new(99)), UserId::new(99))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn list_users_capability_allows_viewing_others() {
    let service = service_with(Arc::new(FakeUserStore::with_users(vec![admin(), alice()])));

    let result = service
        .authorize_user_view(&Principal::User(UserId::new(1)), UserId::new(7))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn viewing_others_without_capability_is_denied_with_403_code() {
    let service = service_with(Arc::new(FakeUserStore::with_users(vec![bob(), alice()])));

    let result = service
        .authorize_user_view(&Principal::User(UserId::new(5)), UserId::new(7))
        .await;

    match result {
        Err(error @ AppError::Forbidden { .. }) => {
            assert_eq!(error.code(), USER_CANNOT_LIST_CODE);
            assert_eq!(
                error.to_string(),
                "Sorry, you are not allowed to view this user."
            );
        }
        other => panic!("expected forbidden error, got {other:?}"),
    }
}

#[tokio::test]
async fn anonymous_principal_is_denied_without_consulting_store() {
    let store = Arc::new(FakeUserStore::with_users(vec![alice()]));
    let service = service_with(store.clone());

    let result = service
        .authorize_user_view(&Principal::Anonymous, UserId::new(7))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden { .. })));
    assert!(store.calls().await.is_empty());
}

#[tokio::test]
async fn has_capability_reads_effective_capabilities() {
    let service = service_with(Arc::new(FakeUserStore::with_users(vec![admin(), bob()])));

    let admin_can_list = service
        .has_capability(&Principal::User(UserId::new(1)), Capability::ListUsers)
        .await;
    let bob_can_list = service
        .has_capability(&Principal::User(UserId::new(5)), Capability::ListUsers)
        .await;

    assert!(matches!(admin_can_list, Ok(true)));
    assert!(matches!(bob_can_list, Ok(false)));
}
