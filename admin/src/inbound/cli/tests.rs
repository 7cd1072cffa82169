//! Command dispatch coverage: the session guard, sign-in and rendering.

use std::sync::Arc;

use clap::Parser;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{
    InMemoryTokenStore, LoginPayload, MockAuthGateway, MockCatalogService, MockCollectionService,
    MockContactService, MockDashboardQuery, MockReviewService, MockSareeService,
    MockSettingsService, MockTestimonialService, RecordingNotifier, TokenStore,
};
use crate::domain::{
    AdminUser, BearerToken, DashboardStats, Envelope, ErrorState, SessionStore, StoreSettings,
};

fn admin() -> AdminUser {
    AdminUser {
        id: "u1".into(),
        email: "admin@shop.test".into(),
        name: "Anita".into(),
        role: "admin".into(),
    }
}

/// Test doubles for every port; unset expectations fail loudly when hit.
#[derive(Default)]
struct Doubles {
    sarees: MockSareeService,
    collections: MockCollectionService,
    catalogs: MockCatalogService,
    testimonials: MockTestimonialService,
    reviews: MockReviewService,
    contacts: MockContactService,
    settings: MockSettingsService,
    dashboard: MockDashboardQuery,
}

impl Doubles {
    fn into_context(self, session: SessionStore) -> AdminContext {
        AdminContext {
            session: Arc::new(session),
            errors: Arc::new(ErrorState::new()),
            notifier: Arc::new(RecordingNotifier::default()),
            sarees: Arc::new(self.sarees),
            collections: Arc::new(self.collections),
            catalogs: Arc::new(self.catalogs),
            testimonials: Arc::new(self.testimonials),
            reviews: Arc::new(self.reviews),
            contacts: Arc::new(self.contacts),
            settings: Arc::new(self.settings),
            dashboard: Arc::new(self.dashboard),
        }
    }
}

fn anonymous(tokens: Arc<InMemoryTokenStore>, gateway: MockAuthGateway) -> SessionStore {
    SessionStore::new(tokens, Arc::new(gateway))
}

async fn signed_in() -> SessionStore {
    let mut gateway = MockAuthGateway::new();
    gateway.expect_fetch_profile().returning(|| Ok(admin()));
    let tokens = InMemoryTokenStore::with_token(BearerToken::new("stored.jwt").expect("token"));
    let session = SessionStore::new(Arc::new(tokens), Arc::new(gateway));
    session.boot().await;
    session
}

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("saree-admin").chain(args.iter().copied()))
        .expect("arguments parse")
        .command
}

async fn run_to_string(command: Command, context: &AdminContext) -> Result<String, CliError> {
    let mut out = Vec::new();
    run(command, context, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[rstest]
#[case::whoami(&["whoami"])]
#[case::dashboard(&["dashboard"])]
#[case::sarees(&["sarees", "list"])]
#[case::reviews(&["reviews", "approve", "r1"])]
#[case::settings(&["settings", "show"])]
#[tokio::test]
async fn protected_commands_need_a_session(#[case] args: &[&str]) {
    let context = Doubles::default().into_context(anonymous(
        Arc::new(InMemoryTokenStore::default()),
        MockAuthGateway::new(),
    ));

    let result = run_to_string(parse(args), &context).await;

    assert!(matches!(result, Err(CliError::LoginRequired)));
}

#[tokio::test]
async fn login_stores_the_token_and_greets_the_admin() {
    let tokens = Arc::new(InMemoryTokenStore::default());
    let mut gateway = MockAuthGateway::new();
    gateway.expect_login().times(1).returning(|_| {
        Ok(Envelope::ok(LoginPayload {
            token: Some("issued.jwt".into()),
            user: Some(admin()),
        }))
    });
    let context = Doubles::default().into_context(anonymous(tokens.clone(), gateway));

    let output = run_to_string(
        parse(&["login", "--email", "admin@shop.test", "--password", "secret"]),
        &context,
    )
    .await
    .expect("login succeeds");

    assert_eq!(output, "signed in as Anita\n");
    assert_eq!(
        tokens.load().expect("load").map(|t| t.expose().to_owned()),
        Some("issued.jwt".to_owned())
    );
}

#[tokio::test]
async fn rejected_login_reports_failure() {
    let mut gateway = MockAuthGateway::new();
    gateway
        .expect_login()
        .returning(|_| Ok(Envelope::rejected("Invalid credentials")));
    let context = Doubles::default().into_context(anonymous(
        Arc::new(InMemoryTokenStore::default()),
        gateway,
    ));

    let result = run_to_string(
        parse(&["login", "--email", "admin@shop.test", "--password", "wrong"]),
        &context,
    )
    .await;

    assert!(matches!(result, Err(CliError::LoginFailed)));
}

#[tokio::test]
async fn logout_clears_the_stored_token() {
    let tokens = Arc::new(InMemoryTokenStore::with_token(
        BearerToken::new("stored.jwt").expect("token"),
    ));
    let context = Doubles::default().into_context(anonymous(tokens.clone(), MockAuthGateway::new()));

    let output = run_to_string(parse(&["logout"]), &context)
        .await
        .expect("logout succeeds");

    assert_eq!(output, "signed out\n");
    assert!(tokens.load().expect("load").is_none());
}

#[tokio::test]
async fn dashboard_renders_counters_in_key_order() {
    let mut doubles = Doubles::default();
    doubles.dashboard.expect_stats().times(1).returning(|| {
        let stats: DashboardStats =
            serde_json::from_value(json!({"totalSarees": 12, "pendingReviews": 3}))
                .expect("stats");
        Ok(Envelope::ok(stats))
    });
    let context = doubles.into_context(signed_in().await);

    let output = run_to_string(parse(&["dashboard"]), &context)
        .await
        .expect("dashboard renders");

    assert_eq!(
        output,
        "METRIC          VALUE\npendingReviews  3\ntotalSarees     12\n"
    );
}

#[tokio::test]
async fn page_zero_is_rejected_before_any_request() {
    let mut doubles = Doubles::default();
    doubles.reviews.expect_list().never();
    let context = doubles.into_context(signed_in().await);

    let result = run_to_string(parse(&["reviews", "list", "--page", "0"]), &context).await;

    assert!(matches!(result, Err(CliError::Page(_))));
}

#[tokio::test]
async fn unchanged_settings_are_not_saved() {
    let mut doubles = Doubles::default();
    doubles.settings.expect_get().times(1).returning(|| {
        Ok(Envelope::ok(StoreSettings {
            store_name: "Saree Sutra".into(),
            ..StoreSettings::default()
        }))
    });
    doubles.settings.expect_update().never();
    let context = doubles.into_context(signed_in().await);

    let output = run_to_string(
        parse(&["settings", "set", "--store-name", "Saree Sutra"]),
        &context,
    )
    .await
    .expect("settings command completes");

    assert_eq!(output, "settings unchanged\n");
}

#[test]
fn update_flags_parse_into_optional_fields() {
    let command = parse(&[
        "sarees", "update", "s1", "--price", "4999.5", "--category", "Silk Heritage",
    ]);
    let Command::Sarees {
        action: sarees::SareeCommand::Update { id, .. },
    } = command
    else {
        panic!("expected a saree update");
    };
    assert_eq!(id, "s1");
}

#[test]
fn login_and_logout_run_signed_out() {
    assert!(!parse(&["logout"]).requires_session());
    assert!(parse(&["whoami"]).requires_session());
}
