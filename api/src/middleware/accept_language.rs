//! Accept-Language negotiation for actix-web.
//!
//! The `AcceptLanguage` middleware attaches a [`RequestLanguages`] context to
//! every request, applies the locale cookie override, stores the negotiated
//! locale in the request extensions and mirrors it in `Content-Language`.
//!
//! Handlers reach the same per-request state through [`AcceptLanguageExt`] or
//! the [`PreferredLanguages`] and [`NegotiatedLocale`] extractors. The
//! extension trait also works without the middleware: the context is attached
//! on first use.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use hal_core::{is_valid_tag, normalize_tag, LocaleMatcher, PreferenceList, RequestLanguages};
use hal_shared::LocaleConfig;
use serde::Serialize;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::ApiError;

/// Locale selected for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegotiatedLocale(pub String);

impl NegotiatedLocale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NegotiatedLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Language operations on a request, backed by a memoized [`RequestLanguages`]
pub trait AcceptLanguageExt {
    /// The user's preferred languages, most preferred first
    fn preferred_languages(&self) -> PreferenceList;

    /// Override the browser preferences for the rest of the request
    fn set_preferred_languages(&self, languages: impl Into<PreferenceList>);

    /// First preferred language available verbatim
    fn select_preferred<T: ToString>(&self, available: &[T]) -> Option<String>;

    /// First available locale compatible with the preferences, ignoring region
    fn select_compatible<'a, T: ToString>(&self, available: &'a [T]) -> Option<&'a T>;

    /// Negotiate a locale with `matcher` and remember it on the request
    fn negotiate_locale(&self, matcher: &LocaleMatcher) -> NegotiatedLocale;
}

impl AcceptLanguageExt for HttpRequest {
    fn preferred_languages(&self) -> PreferenceList {
        with_languages(self, |languages| languages.preferred_languages().clone())
    }

    fn set_preferred_languages(&self, languages: impl Into<PreferenceList>) {
        attach_languages(self);
        if let Some(current) = self.extensions_mut().get_mut::<RequestLanguages>() {
            current.set_preferred_languages(languages);
        }
    }

    fn select_preferred<T: ToString>(&self, available: &[T]) -> Option<String> {
        with_languages(self, |languages| languages.select_preferred(available))
    }

    fn select_compatible<'a, T: ToString>(&self, available: &'a [T]) -> Option<&'a T> {
        with_languages(self, |languages| languages.select_compatible(available))
    }

    fn negotiate_locale(&self, matcher: &LocaleMatcher) -> NegotiatedLocale {
        let locale = NegotiatedLocale(with_languages(self, |languages| languages.negotiate(matcher)));
        self.extensions_mut().insert(locale.clone());
        locale
    }
}

/// Raw `Accept-Language` value; non-visible-ASCII values count as absent
pub fn accept_language_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(ACCEPT_LANGUAGE)?.to_str().ok()
}

fn attach_languages(req: &HttpRequest) {
    if !req.extensions().contains::<RequestLanguages>() {
        let languages = RequestLanguages::new(accept_language_header(req.headers()));
        req.extensions_mut().insert(languages);
    }
}

fn with_languages<R>(req: &HttpRequest, f: impl FnOnce(&RequestLanguages) -> R) -> R {
    attach_languages(req);
    let extensions = req.extensions();
    match extensions.get::<RequestLanguages>() {
        Some(languages) => f(languages),
        None => f(&RequestLanguages::new(accept_language_header(req.headers()))),
    }
}

/// Locale negotiation middleware factory
pub struct AcceptLanguage {
    settings: Rc<NegotiationSettings>,
}

struct NegotiationSettings {
    matcher: web::Data<LocaleMatcher>,
    override_cookie: Option<String>,
    content_language: bool,
}

impl AcceptLanguage {
    /// Creates the middleware for the given locale configuration
    pub fn new(config: &LocaleConfig) -> Self {
        Self::with_matcher(web::Data::new(LocaleMatcher::from_config(config)), config)
    }

    /// Creates the middleware around a matcher shared with app data
    pub fn with_matcher(matcher: web::Data<LocaleMatcher>, config: &LocaleConfig) -> Self {
        log::info!(
            "Locale negotiation configured: locales={:?}, default={}, policy={}, override_cookie={:?}",
            config.available_locales,
            config.default_locale,
            config.policy,
            config.override_cookie
        );

        Self {
            settings: Rc::new(NegotiationSettings {
                matcher,
                override_cookie: config.override_cookie.clone(),
                content_language: config.content_language,
            }),
        }
    }

    /// The matcher used to negotiate each request
    pub fn matcher(&self) -> web::Data<LocaleMatcher> {
        self.settings.matcher.clone()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AcceptLanguage
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AcceptLanguageMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AcceptLanguageMiddleware {
            service: Rc::new(service),
            settings: Rc::clone(&self.settings),
        }))
    }
}

/// Locale negotiation middleware service
pub struct AcceptLanguageMiddleware<S> {
    service: Rc<S>,
    settings: Rc<NegotiationSettings>,
}

impl<S, B> Service<ServiceRequest> for AcceptLanguageMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let settings = Rc::clone(&self.settings);

        Box::pin(async move {
            let http_req = req.request();

            if let Some(tag) = cookie_override(http_req, settings.override_cookie.as_deref()) {
                http_req.set_preferred_languages([tag]);
            }

            let locale = http_req.negotiate_locale(&settings.matcher);
            log::debug!(
                "Negotiated locale {} for {} {}",
                locale,
                req.method(),
                req.path()
            );

            let mut response = service.call(req).await?;

            if settings.content_language {
                add_content_language(&mut response);
            }

            Ok(response)
        })
    }
}

/// Normalized tag from the override cookie, if present and well-formed
fn cookie_override(req: &HttpRequest, cookie_name: Option<&str>) -> Option<String> {
    let cookie = req.cookie(cookie_name?)?;
    let value = cookie.value().trim();
    if is_valid_tag(value) {
        Some(normalize_tag(value))
    } else {
        log::debug!("Ignoring locale cookie with invalid tag: {:?}", value);
        None
    }
}

/// Sets `Content-Language` from the locale the request ended up with, unless
/// the handler already set one
fn add_content_language<B>(response: &mut ServiceResponse<B>) {
    if response.headers().contains_key(CONTENT_LANGUAGE) {
        return;
    }

    let locale = response
        .request()
        .extensions()
        .get::<NegotiatedLocale>()
        .map(|locale| locale.as_str().to_owned());

    if let Some(locale) = locale {
        match HeaderValue::from_str(&locale) {
            Ok(value) => {
                response.headers_mut().insert(CONTENT_LANGUAGE, value);
            }
            Err(_) => log::warn!("Negotiated locale is not a valid header value: {:?}", locale),
        }
    }
}

/// Extractor for the request's preference list; never fails
#[derive(Debug, Clone)]
pub struct PreferredLanguages(pub PreferenceList);

impl FromRequest for PreferredLanguages {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(PreferredLanguages(req.preferred_languages())))
    }
}

/// Extractor for the locale negotiated by [`AcceptLanguage`]
impl FromRequest for NegotiatedLocale {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<NegotiatedLocale>()
            .cloned()
            .ok_or_else(|| Error::from(ApiError::LocaleNotNegotiated));

        ready(result)
    }
}
