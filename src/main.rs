//! Docubot action server.
//!
//! Serves the manifest actions to the dialogue host over HTTP.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use docubot_actions::adapters::http::{actions_router, ActionsAppState};
use docubot_actions::adapters::manifest::{HttpGeneratorConfig, HttpManifestGenerator};
use docubot_actions::application::handlers::{ActionDispatcher, SubmitManifestHandler};
use docubot_actions::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let generator = HttpManifestGenerator::new(HttpGeneratorConfig::from(&config.generator))?;
    let submit_handler = Arc::new(SubmitManifestHandler::new(Arc::new(generator)));
    let dispatcher = Arc::new(ActionDispatcher::new(submit_handler));

    let app = actions_router(ActionsAppState::new(dispatcher))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        generator = %config.generator.base_url,
        environment = ?config.server.environment,
        "Action server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Action server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
