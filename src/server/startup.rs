use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::AppError,
    service::notification::sms::{HttpSmsSender, LogSmsSender, SmsSender},
};

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs this crate and HTTP tracing at info level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloodline=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. The inventory migration seeds one row per blood group, so a fresh
/// database is ready for donation completion.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outbound gateway calls.
///
/// Redirects are disabled so a misconfigured gateway URL cannot bounce requests (and the
/// bearer token) to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Selects the SMS sender for this process.
///
/// Uses the HTTP gateway when one is configured, otherwise falls back to logging the
/// outgoing messages.
pub fn setup_sms_sender(config: &Config, http_client: reqwest::Client) -> Arc<dyn SmsSender> {
    match &config.sms {
        Some(sms) => {
            tracing::info!("SMS delivery via gateway {}", sms.gateway_url);
            Arc::new(HttpSmsSender::new(
                http_client,
                sms.gateway_url.clone(),
                sms.token.clone(),
                sms.sender_id.clone(),
            ))
        }
        None => {
            tracing::warn!("SMS_GATEWAY_URL not set, SMS messages will only be logged");
            Arc::new(LogSmsSender)
        }
    }
}
