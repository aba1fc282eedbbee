use actix_web::{middleware::Logger, web, App, HttpServer};
use hal_core::LocaleMatcher;
use log::info;
use std::time::Duration;

use hal_api::{config::load_config, logging::init_logging, middleware::AcceptLanguage, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_logging(&config.logging);

    info!("Starting Accept-Language negotiation server ({})", config.environment);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let locale_config = config.locale.clone();
    let matcher = web::Data::new(LocaleMatcher::from_config(&locale_config));

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(matcher.clone())
            .wrap(AcceptLanguage::with_matcher(matcher.clone(), &locale_config))
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
