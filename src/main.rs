mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    realtime::registry::ConnectionRegistry,
    router, service::notification::NotificationDispatcher,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let sms_sender = startup::setup_sms_sender(&config, http_client);

    let registry = ConnectionRegistry::new();
    let dispatcher = NotificationDispatcher::new(db.clone(), registry.clone(), sms_sender);

    let app = router::router()
        .with_state(AppState::new(db, dispatcher, registry))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
