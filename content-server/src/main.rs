use content_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, configuration, logging
    let config = setup_environment();

    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        "Content server starting..."
    );

    // 2. Collections (optionally seeded)
    let state = ServerState::initialize(&config)?;

    // 3. Serve until Ctrl-C
    if let Err(e) = Server::new(config, state).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
