use actix_web::{web, HttpRequest, HttpResponse};
use hal_core::{is_valid_tag, normalize_tag, LocaleMatcher};

use crate::dto::{LocaleQuery, LocaleResponse};
use crate::handlers::ApiError;
use crate::middleware::AcceptLanguageExt;

/// Handler for GET /api/v1/locale
///
/// Reports how the request's `Accept-Language` header is understood and which
/// supported locale it resolves to.
///
/// # Query
///
/// - `force` (optional): language tag replacing the browser preferences
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "preferred_languages": ["nl-NL", "nl", "en-US", "en"],
///     "exact_match": "nl",
///     "compatible_match": "nl",
///     "locale": "nl",
///     "policy": "compatible"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `force` is not a valid language tag
pub async fn negotiate(
    req: HttpRequest,
    query: web::Query<LocaleQuery>,
    matcher: web::Data<LocaleMatcher>,
) -> Result<HttpResponse, ApiError> {
    if let Some(forced) = query.force.as_deref() {
        if !is_valid_tag(forced) {
            return Err(ApiError::InvalidLanguageTag(forced.to_string()));
        }
        req.set_preferred_languages([normalize_tag(forced)]);
    }

    let locale = req.negotiate_locale(&matcher);
    let available = matcher.available_locales();

    let response = LocaleResponse {
        preferred_languages: req.preferred_languages(),
        exact_match: req.select_preferred(available),
        compatible_match: req.select_compatible(available).cloned(),
        locale: locale.into_inner(),
        policy: matcher.policy(),
    };

    Ok(HttpResponse::Ok().json(response))
}
