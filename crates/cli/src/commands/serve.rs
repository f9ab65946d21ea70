//! `clausecheck serve` — start the HTTP analysis server.

use clausecheck_config::AppConfig;
use tracing::error;

pub async fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;

    if let Some(port) = port {
        config.gateway.port = port;
    }

    // Fatal startup check: refuse to start without a provider key, rather
    // than failing lazily on the first request.
    let api_key = match config.require_api_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    clausecheck_gateway::start(config, api_key).await
}
