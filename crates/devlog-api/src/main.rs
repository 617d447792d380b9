use devlog_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, content store, routes)
    let (_state, router) = devlog_api::setup::initialize_app(&config)?;

    // Start the server
    devlog_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
