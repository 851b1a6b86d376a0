//! Dashboard section containment tests

mod common;

use common::{client_for, session_with, valid_token};
use freelance_match::auth::{Identity, Role, Route};
use freelance_match::dashboard::{self, SectionData, SectionKind};
use freelance_match::error::Error;
use mockito::Server;

const FREELANCER_JSON: &str = r#"{
    "id": 7,
    "name": "Bia",
    "email": "bia@example.com",
    "skills": "rust",
    "skill_set": [{"id": 1, "name": "Rust"}],
    "portfolio_url": "https://bia.dev",
    "phone": null,
    "role": "freelancer",
    "created_at": "2025-01-01T00:00:00"
}"#;

#[tokio::test]
async fn test_failing_section_leaves_siblings_intact() {
    let mut server = Server::new_async().await;
    let (session, _, navigator) = session_with(Some(valid_token("7", "freelancer")));
    let client = client_for(&server.url(), session);

    server
        .mock("GET", "/freelancer/me")
        .with_status(200)
        .with_body(FREELANCER_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/project/all")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("GET", "/proposal/freelancer/proposals")
        .with_status(500)
        .with_body(r#"{"error": "Erro ao buscar propostas."}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/freelancer/projects/completed")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let board = dashboard::load(&client).await.unwrap();

    assert_eq!(board.identity, Identity::new(7, Role::Freelancer));
    assert_eq!(board.sections.len(), 4);
    assert!(!board.session_ended());

    let failed: Vec<_> = board.failed_sections().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].kind, SectionKind::Proposals);
    assert_eq!(
        failed[0].failure_message().as_deref(),
        Some("Erro ao buscar propostas.")
    );

    let profile = board
        .sections
        .iter()
        .find(|s| s.kind == SectionKind::Profile)
        .unwrap();
    match &profile.outcome {
        Ok(SectionData::FreelancerProfile(p)) => assert_eq!(p.name, "Bia"),
        other => panic!("unexpected profile outcome: {:?}", other),
    }
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_section_401_ends_session() {
    let mut server = Server::new_async().await;
    let (session, storage, navigator) = session_with(Some(valid_token("42", "client")));
    let client = client_for(&server.url(), session);

    server
        .mock("GET", "/client/profile")
        .with_status(401)
        .with_body(r#"{"msg": "Token has expired"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/project/all")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let board = dashboard::load(&client).await.unwrap();

    assert!(board.session_ended());
    assert!(!storage.contains_token());
    assert_eq!(navigator.routes(), vec![Route::SignIn]);
}

#[tokio::test]
async fn test_retry_loads_only_requested_sections() {
    let mut server = Server::new_async().await;
    let (session, _, _) = session_with(Some(valid_token("1", "admin")));
    let client = client_for(&server.url(), session);

    let clients = server
        .mock("GET", "/admin/clients")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let freelancers = server
        .mock("GET", "/admin/freelancers")
        .expect(0)
        .create_async()
        .await;

    let identity = Identity::new(1, Role::Admin);
    let board = dashboard::load_sections(&client, identity, &[SectionKind::Clients]).await;

    assert_eq!(board.sections.len(), 1);
    assert!(matches!(board.sections[0].outcome, Ok(SectionData::Clients(ref c)) if c.is_empty()));
    clients.assert_async().await;
    freelancers.assert_async().await;
}

#[tokio::test]
async fn test_section_not_available_to_role() {
    let server = Server::new_async().await;
    let (session, _, _) = session_with(Some(valid_token("42", "client")));
    let client = client_for(&server.url(), session);

    let result = dashboard::load_section(&client, Role::Client, SectionKind::Clients).await;
    assert!(matches!(result, Err(Error::Other(_))));
}

#[tokio::test]
async fn test_dashboard_requires_sign_in() {
    let server = Server::new_async().await;
    let (session, _, _) = session_with(None);
    let client = client_for(&server.url(), session);

    let result = dashboard::load(&client).await;
    assert!(matches!(result, Err(Error::NotSignedIn)));
}
