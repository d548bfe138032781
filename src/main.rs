use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use staypricing::bookings::BookingCalculator;
use staypricing::config::Config;
use staypricing::establishments::{EstablishmentRepository, MySqlEstablishmentRepository};
use staypricing::modules::{bookings, health};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing; RUST_LOG wins over LOG_LEVEL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting stay pricing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .expect("Failed to create database pool");

    let repository: Arc<dyn EstablishmentRepository> =
        Arc::new(MySqlEstablishmentRepository::new(db_pool));

    let defaults = config.pricing.platform_defaults();
    tracing::info!(
        commission_rate = %defaults.night_fees.commission_rate,
        fixed_fee = %defaults.night_fees.fixed_fee,
        day_parking_commission_rate = %defaults.day_parking_fees.commission_rate,
        tourist_tax_amount = %defaults.tourist_tax.tourist_tax_amount,
        lookup_timeout_ms = config.pricing.lookup_timeout_ms,
        "Platform pricing defaults loaded"
    );

    let calculator = web::Data::new(BookingCalculator::new(
        repository.clone(),
        defaults,
        config.pricing.lookup_timeout(),
    ));
    let repository = web::Data::new(repository);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(calculator.clone())
            .app_data(repository.clone())
            .configure(health::configure)
            .configure(bookings::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
