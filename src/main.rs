//! leadgate server binary

use leadgate::{config::AppConfig, handlers, observability, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = AppConfig::load()?;

    tracing::info!(
        backend = config.email.backend.as_str(),
        credential_present = config.email_credential_present(),
        site = %config.email.site_label,
        "configuration loaded"
    );

    let addr = config.server.bind_addr();
    let state = AppState::new(config)?;
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "leadgate listening");

    axum::serve(listener, app).await?;

    Ok(())
}
