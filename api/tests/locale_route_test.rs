//! Integration tests for the locale and health endpoints

use actix_web::{
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
        StatusCode,
    },
    test, web, App,
};
use hal_api::{dto::LocaleResponse, routes, AcceptLanguage};
use hal_core::LocaleMatcher;
use hal_shared::{LocaleConfig, MatchPolicy};
use serde_json::Value;

fn locale_config() -> LocaleConfig {
    LocaleConfig::new(["en-GB", "nl", "pt"], "en-GB")
}

macro_rules! init_app {
    ($config:expr) => {{
        let config: LocaleConfig = $config;
        let matcher = web::Data::new(LocaleMatcher::from_config(&config));
        test::init_service(
            App::new()
                .app_data(matcher.clone())
                .wrap(AcceptLanguage::with_matcher(matcher, &config))
                .configure(routes::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(locale_config());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "hal-api");
}

#[actix_web::test]
async fn test_locale_reports_both_policies() {
    let app = init_app!(locale_config());

    let req = test::TestRequest::get()
        .uri("/api/v1/locale")
        .insert_header((ACCEPT_LANGUAGE, "en-US, nl;q=0.8"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "en-GB");

    let body: LocaleResponse = test::read_body_json(resp).await;
    assert_eq!(body.preferred_languages.as_slice(), ["en-US", "nl"]);
    assert_eq!(body.exact_match.as_deref(), Some("nl"));
    assert_eq!(body.compatible_match.as_deref(), Some("en-GB"));
    assert_eq!(body.locale, "en-GB");
    assert_eq!(body.policy, MatchPolicy::Compatible);
}

#[actix_web::test]
async fn test_locale_with_exact_policy() {
    let app = init_app!(locale_config().with_policy(MatchPolicy::Exact));

    let req = test::TestRequest::get()
        .uri("/api/v1/locale")
        .insert_header((ACCEPT_LANGUAGE, "en-US, nl;q=0.8"))
        .to_request();
    let body: LocaleResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.locale, "nl");
    assert_eq!(body.policy, MatchPolicy::Exact);
}

#[actix_web::test]
async fn test_locale_without_header_falls_back_to_default() {
    let app = init_app!(locale_config());

    let req = test::TestRequest::get().uri("/api/v1/locale").to_request();
    let body: LocaleResponse = test::call_and_read_body_json(&app, req).await;

    assert!(body.preferred_languages.is_empty());
    assert_eq!(body.exact_match, None);
    assert_eq!(body.compatible_match, None);
    assert_eq!(body.locale, "en-GB");
}

#[actix_web::test]
async fn test_forced_locale_replaces_preferences() {
    let app = init_app!(locale_config());

    let req = test::TestRequest::get()
        .uri("/api/v1/locale?force=PT-br")
        .insert_header((ACCEPT_LANGUAGE, "nl"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "pt");

    let body: LocaleResponse = test::read_body_json(resp).await;
    assert_eq!(body.preferred_languages.as_slice(), ["pt-BR"]);
    assert_eq!(body.exact_match, None);
    assert_eq!(body.compatible_match.as_deref(), Some("pt"));
    assert_eq!(body.locale, "pt");
}

#[actix_web::test]
async fn test_forced_locale_must_be_valid_tag() {
    let app = init_app!(locale_config());

    let req = test::TestRequest::get()
        .uri("/api/v1/locale?force=pt_BR")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_LANGUAGE_TAG");
    assert_eq!(body["details"]["tag"], "pt_BR");
}
