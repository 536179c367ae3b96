use report_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional)
    let _ = dotenvy::dotenv();

    // 2. Configuration and logging
    let config = Config::from_env();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    tracing::info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Report server starting..."
    );

    // 3. State over the built-in dataset
    let state = ServerState::initialize(&config);

    // 4. Serve until shutdown signal
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
