use repix_core::Config;

// Use mimalloc as the global allocator for lower fragmentation during
// repeated large pixel-buffer allocations.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    repix_infra::init_telemetry();

    // Initialize the application (state, routes)
    let (_state, router) = repix_api::setup::initialize_app(config.clone());

    // Start the server
    repix_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
