//! Session restore against a mock admin API with the on-disk token store.

use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use serde_json::json;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use saree_admin::domain::ports::{RecordingNotifier, TokenStore};
use saree_admin::domain::{BearerToken, ErrorBroadcast, SessionPhase, SessionStore};
use saree_admin::outbound::http::{ApiClient, HttpAuthGateway};
use saree_admin::outbound::token_store::FileTokenStore;

#[fixture]
fn token_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

fn session_against(server: &MockServer, tokens: Arc<FileTokenStore>) -> SessionStore {
    let base_url = Url::parse(&format!("{}/api/", server.uri())).expect("base url");
    let client = ApiClient::new(
        base_url,
        Duration::from_secs(5),
        tokens.clone(),
        ErrorBroadcast::new(),
        Arc::new(RecordingNotifier::default()),
    )
    .expect("client");
    SessionStore::new(tokens, Arc::new(HttpAuthGateway::new(Arc::new(client))))
}

fn seeded(dir: &TempDir) -> Arc<FileTokenStore> {
    let store = FileTokenStore::new(dir.path());
    store
        .save(&BearerToken::new("stored.jwt").expect("token"))
        .expect("seed token");
    Arc::new(store)
}

#[rstest]
#[tokio::test]
async fn accepted_token_restores_the_admin(token_dir: TempDir) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": { "_id": "u1", "email": "admin@shop.test", "fullName": "Anita" } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let session = session_against(&server, seeded(&token_dir));

    let snapshot = session.boot().await;

    assert_eq!(snapshot.phase, SessionPhase::Authenticated);
    assert_eq!(
        snapshot.user.map(|user| user.display_name().to_owned()),
        Some("Anita".to_owned())
    );
}

#[rstest]
#[tokio::test]
async fn rejected_token_is_removed_from_disk(token_dir: TempDir) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .mount(&server)
        .await;
    let tokens = seeded(&token_dir);
    let session = session_against(&server, tokens.clone());

    let snapshot = session.boot().await;

    assert_eq!(snapshot.phase, SessionPhase::Anonymous);
    assert!(tokens.load().expect("load").is_none());
    assert!(!token_dir.path().join("token").exists());
}

#[rstest]
#[tokio::test]
async fn server_errors_keep_the_token(token_dir: TempDir) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/profile"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let tokens = seeded(&token_dir);
    let session = session_against(&server, tokens.clone());

    let snapshot = session.boot().await;

    assert_eq!(snapshot.phase, SessionPhase::Anonymous);
    assert!(tokens.load().expect("load").is_some());
}
