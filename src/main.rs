use std::env;
use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use farm_payroll::api::{AppState, ENGINE_VERSION, create_router};
use farm_payroll::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/farm";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load payroll configuration");
            return Err(err.into());
        }
    };
    info!(
        farm = %config.farm().name,
        day_convention = config.salaried().day_convention.as_str(),
        "Loaded payroll configuration"
    );

    let addr: SocketAddr = env::var("PAYROLL_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(config));

    info!(version = ENGINE_VERSION, "Starting farm payroll server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
