use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use usersvc_api::config::ApiConfig;
use usersvc_auth::Hs256Jwt;
use usersvc_core::{DirectoryService, InMemoryUserRepository, LoggingService, UserService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    usersvc_observability::init(config.log_format);

    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
    }

    let service: Arc<dyn UserService> = Arc::new(LoggingService::new(DirectoryService::new(
        InMemoryUserRepository::seeded(),
    )));
    let jwt = Arc::new(Hs256Jwt::new(&config.jwt_secret, config.token_ttl));

    let app = usersvc_api::app::build_app(service, jwt);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
