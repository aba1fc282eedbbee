//! Integration tests for the Accept-Language middleware and extractors

#[cfg(test)]
mod tests {
    use actix_web::{
        cookie::Cookie,
        http::{
            header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
            StatusCode,
        },
        test, web, App, HttpRequest, HttpResponse,
    };
    use hal_api::{AcceptLanguage, AcceptLanguageExt, NegotiatedLocale, PreferredLanguages};
    use hal_shared::{LocaleConfig, MatchPolicy};
    use serde_json::{json, Value};

    async fn echo_locale(locale: NegotiatedLocale, languages: PreferredLanguages) -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "locale": locale.as_str(),
            "preferred": languages.0,
        }))
    }

    async fn echo_preferences(languages: PreferredLanguages) -> HttpResponse {
        HttpResponse::Ok().json(languages.0)
    }

    async fn select_both(req: HttpRequest) -> HttpResponse {
        let available = ["en-GB", "pt"];
        HttpResponse::Ok().json(json!({
            "exact": req.select_preferred(&available),
            "compatible": req.select_compatible(&available),
        }))
    }

    fn locale_config() -> LocaleConfig {
        LocaleConfig::new(["en", "nl", "pt-BR"], "en")
    }

    #[actix_web::test]
    async fn test_negotiates_locale_from_header() {
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&locale_config()))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl-BE, en;q=0.5"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "nl");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["locale"], "nl");
        assert_eq!(body["preferred"], json!(["nl-BE", "en"]));
    }

    #[actix_web::test]
    async fn test_missing_header_uses_default_locale() {
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&locale_config()))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["locale"], "en");
        assert_eq!(body["preferred"], json!([]));
    }

    #[actix_web::test]
    async fn test_malformed_header_is_ignored() {
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&locale_config()))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl, xx_badtag!!"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["locale"], "en");
        assert_eq!(body["preferred"], json!([]));
    }

    #[actix_web::test]
    async fn test_locale_cookie_overrides_header() {
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&locale_config()))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl"))
            .cookie(Cookie::new("locale", "pt-br"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["locale"], "pt-BR");
        assert_eq!(body["preferred"], json!(["pt-BR"]));
    }

    #[actix_web::test]
    async fn test_invalid_locale_cookie_is_ignored() {
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&locale_config()))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl"))
            .cookie(Cookie::new("locale", "pt_BR"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["locale"], "nl");
    }

    #[actix_web::test]
    async fn test_exact_policy_does_not_fall_back() {
        let config = locale_config().with_policy(MatchPolicy::Exact);
        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&config))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "pt-PT, nl-NL;q=0.5"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["locale"], "en");
    }

    #[actix_web::test]
    async fn test_content_language_can_be_disabled() {
        let mut config = locale_config();
        config.content_language = false;

        let app = test::init_service(
            App::new()
                .wrap(AcceptLanguage::new(&config))
                .route("/", web::get().to(echo_locale)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.headers().get(CONTENT_LANGUAGE).is_none());
    }

    #[actix_web::test]
    async fn test_negotiated_locale_requires_middleware() {
        let app = test::init_service(App::new().route("/", web::get().to(echo_locale))).await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((ACCEPT_LANGUAGE, "nl"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "LOCALE_NOT_NEGOTIATED");
    }

    #[actix_web::test]
    async fn test_preferences_without_middleware() {
        let app = test::init_service(
            App::new()
                .route("/prefs", web::get().to(echo_preferences))
                .route("/select", web::get().to(select_both)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/prefs")
            .insert_header((ACCEPT_LANGUAGE, "da, en-gb;q=0.8, en;q=0.7"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!(["da", "en-GB", "en"]));

        let req = test::TestRequest::get()
            .uri("/select")
            .insert_header((ACCEPT_LANGUAGE, "en-US, pt-BR;q=0.9"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["exact"], Value::Null);
        assert_eq!(body["compatible"], "en-GB");
    }
}
