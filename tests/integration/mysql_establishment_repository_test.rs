/// Integration tests for the MySQL establishment repository
///
/// **Requires** a MySQL database reachable through `DATABASE_URL` with an
/// `establishments` table holding the pricing columns. Run with
/// `cargo test --test mysql_establishment_repository_test -- --ignored`.

use std::time::Duration;

use rust_decimal_macros::dec;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use staypricing::establishments::{
    EstablishmentRepository, MySqlEstablishmentRepository, PlatformDefaults,
};
use staypricing::fees::FeeSettingsService;
use std::sync::Arc;

async fn setup_test_db() -> MySqlPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for MySQL tests");

    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS establishments (
            slug VARCHAR(191) PRIMARY KEY,
            commission_rate DECIMAL(5, 2) NULL,
            day_parking_commission_rate DECIMAL(5, 2) NULL,
            fixed_fee DECIMAL(10, 2) NULL,
            tourist_tax_enabled BOOLEAN NULL,
            tourist_tax_amount DECIMAL(10, 2) NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create establishments table");

    sqlx::query(
        r#"
        REPLACE INTO establishments
            (slug, commission_rate, day_parking_commission_rate, fixed_fee,
             tourist_tax_enabled, tourist_tax_amount)
        VALUES ('test-hotel-lac', 6.50, 8.00, 2.50, TRUE, 3.50)
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to seed establishment");

    pool
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_find_configs_by_slug() {
    let pool = setup_test_db().await;
    let repo = MySqlEstablishmentRepository::new(pool);

    let fees = repo.find_fee_config("test-hotel-lac").await.unwrap().unwrap();
    assert_eq!(fees.commission_rate, Some(dec!(6.5)));
    assert_eq!(fees.day_parking_commission_rate, Some(dec!(8)));
    assert_eq!(fees.fixed_fee, Some(dec!(2.5)));

    let tax = repo.find_tax_config("test-hotel-lac").await.unwrap().unwrap();
    assert_eq!(tax.tourist_tax_enabled, Some(true));
    assert_eq!(tax.tourist_tax_amount, Some(dec!(3.5)));

    assert!(repo.find_fee_config("test-missing").await.unwrap().is_none());
    assert!(repo.ping().await.is_ok());
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_fee_settings_from_mysql() {
    let pool = setup_test_db().await;
    let service = FeeSettingsService::new(
        Arc::new(MySqlEstablishmentRepository::new(pool)),
        PlatformDefaults::default(),
        Duration::from_secs(2),
    );

    let fees = service.calculate_establishment_fees(dec!(178), "test-hotel-lac").await;
    assert_eq!(fees.net_amount, dec!(163.93));
}
