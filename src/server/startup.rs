use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{config::Config, error::AppError, service::auth::bootstrap_administrator};

/// Opens the club database and brings its schema up to date.
///
/// A `sqlite://club.db?mode=rwc` URL creates the file on first start. All
/// pending migrations run before the connection is handed out.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured administrator when the club has none yet.
///
/// Does nothing unless both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
/// - `config` - Application configuration holding the bootstrap credentials
///
/// # Returns
/// - `Ok(())` - Administrator created, already present, or not configured
/// - `Err(AppError)` - Invalid credentials or database failure
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.bootstrap_admin else {
        tracing::debug!("No bootstrap administrator configured");
        return Ok(());
    };

    match bootstrap_administrator(db, admin).await? {
        Some(account) => tracing::info!(
            "Created administrator account {} ({})",
            account.id,
            account.email
        ),
        None => tracing::debug!("Administrator already exists, skipping bootstrap"),
    }

    Ok(())
}

/// Builds the CORS layer for the configured frontend origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
