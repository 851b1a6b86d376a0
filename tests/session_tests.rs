//! Session lifecycle tests

mod common;

use common::{expired_token, make_token, now, session_with, valid_token};
use freelance_match::auth::{FileTokenStorage, Identity, Role, Route, SessionStore, TokenStorage};
use std::sync::Arc;

#[tokio::test]
async fn test_hydrate_valid_client_token() {
    let (session, storage, navigator) = session_with(Some(valid_token("42", "client")));

    assert_eq!(session.identity().await, Some(Identity::new(42, Role::Client)));
    assert!(storage.contains_token());
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_hydrate_expired_token_purges_storage() {
    let token = make_token("7", "freelancer", Some(now() - 10));
    let (session, storage, _) = session_with(Some(token));

    assert_eq!(session.identity().await, None);
    assert!(!storage.contains_token());
}

#[tokio::test]
async fn test_hydrate_expired_tokens_of_every_role() {
    for role in ["client", "freelancer", "admin"] {
        let (session, storage, _) = session_with(Some(expired_token("3", role)));
        assert!(!session.is_authenticated().await, "role {}", role);
        assert!(!storage.contains_token(), "role {}", role);
    }
}

#[tokio::test]
async fn test_hydrate_malformed_tokens_purge_storage() {
    let malformed = [
        "not-a-token",
        "a.b.c",
        "eyJhbGciOiJIUzI1NiJ9.bm90IGpzb24.c2ln",
        "",
    ];
    for token in malformed {
        let (session, storage, _) = session_with(Some(token.to_string()));
        assert_eq!(session.identity().await, None, "token {:?}", token);
        assert!(!storage.contains_token(), "token {:?}", token);
    }
}

#[tokio::test]
async fn test_hydrate_token_without_expiry_is_rejected() {
    let (session, storage, _) = session_with(Some(make_token("5", "client", None)));

    assert_eq!(session.identity().await, None);
    assert!(!storage.contains_token());
}

#[tokio::test]
async fn test_hydrate_token_with_unknown_role_is_rejected() {
    let (session, storage, _) = session_with(Some(valid_token("5", "superuser")));

    assert_eq!(session.identity().await, None);
    assert!(!storage.contains_token());
}

#[tokio::test]
async fn test_hydrate_without_token() {
    let (session, _, navigator) = session_with(None);

    assert_eq!(session.identity().await, None);
    assert_eq!(session.token().await, None);
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_identity_matches_token_claims() {
    for (sub, role, expected) in [
        ("1", "client", Role::Client),
        ("250", "freelancer", Role::Freelancer),
        ("9", "admin", Role::Admin),
    ] {
        let (session, _, _) = session_with(Some(valid_token(sub, role)));
        let identity = session.identity().await.expect("identity");
        assert_eq!(identity.id.to_string(), sub);
        assert_eq!(identity.role, expected);
    }
}

#[tokio::test]
async fn test_logout_clears_everything_and_redirects() {
    let (session, storage, navigator) = session_with(Some(valid_token("1", "client")));
    assert_eq!(session.identity().await, Some(Identity::new(1, Role::Client)));

    session.logout().await;

    assert!(!storage.contains_token());
    assert_eq!(session.identity().await, None);
    assert_eq!(navigator.routes(), vec![Route::SignIn]);
}

#[tokio::test]
async fn test_logout_when_signed_out_still_redirects() {
    let (session, _, navigator) = session_with(None);

    session.logout().await;

    assert_eq!(navigator.routes(), vec![Route::SignIn]);
}

#[tokio::test]
async fn test_establish_stores_token_and_identity() {
    let (session, storage, _) = session_with(None);
    let token = valid_token("12", "freelancer");

    let identity = session.establish(&token).await.unwrap();

    assert_eq!(identity, Identity::new(12, Role::Freelancer));
    assert!(storage.contains_token());
    assert_eq!(session.token().await.as_deref(), Some(token.as_str()));
    assert_eq!(session.identity().await, Some(identity));
}

#[tokio::test]
async fn test_establish_rejects_expired_token() {
    let (session, storage, _) = session_with(None);

    let result = session.establish(&expired_token("12", "client")).await;

    assert!(result.is_err());
    assert!(!storage.contains_token());
    assert_eq!(session.identity().await, None);
}

#[tokio::test]
async fn test_set_identity_backed_by_stored_token() {
    let (session, storage, _) = session_with(None);
    storage.store(&valid_token("3", "admin")).unwrap();

    session.set_identity(Some(Identity::new(3, Role::Admin))).await;
    assert_eq!(session.identity().await, Some(Identity::new(3, Role::Admin)));

    session.set_identity(None).await;
    assert_eq!(session.identity().await, None);
}

#[tokio::test]
async fn test_set_identity_with_empty_storage_yields_none() {
    let (session, storage, _) = session_with(None);

    session.set_identity(Some(Identity::new(3, Role::Client))).await;

    assert_eq!(session.identity().await, None);
    assert_eq!(session.token().await, None);
    assert!(!storage.contains_token());
}

#[tokio::test]
async fn test_set_identity_with_expired_token_yields_none() {
    let (session, storage, _) = session_with(None);
    storage.store(&expired_token("3", "client")).unwrap();

    session.set_identity(Some(Identity::new(3, Role::Client))).await;

    assert_eq!(session.identity().await, None);
}

#[tokio::test]
async fn test_identity_follows_token_removal() {
    let (session, storage, navigator) = session_with(Some(valid_token("8", "freelancer")));
    assert!(session.is_authenticated().await);

    storage.clear().unwrap();

    assert_eq!(session.identity().await, None);
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_clones_share_one_session() {
    let (session, _, _) = session_with(Some(valid_token("4", "client")));
    let other = session.clone();

    other.logout().await;

    assert_eq!(session.identity().await, None);
}

#[tokio::test]
async fn test_file_storage_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access_token");
    let navigator = Arc::new(common::RecordingNavigator::default());

    let first = SessionStore::hydrate(Arc::new(FileTokenStorage::new(&path)), navigator.clone());
    first.establish(&valid_token("42", "client")).await.unwrap();

    let second = SessionStore::hydrate(Arc::new(FileTokenStorage::new(&path)), navigator);
    assert_eq!(second.identity().await, Some(Identity::new(42, Role::Client)));

    second.logout().await;
    assert!(FileTokenStorage::new(&path).load().unwrap().is_none());
}
