//! Route handlers
//!
//! - `health` - service status
//! - `locale` - locale negotiation for the calling client

pub mod health;
pub mod locale;

use actix_web::web;

/// Register all routes on an application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .route("/locale", web::get().to(locale::negotiate)),
        );
}
