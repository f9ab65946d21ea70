//! `clausecheck analyze` — one-shot analysis without the HTTP server.
//!
//! Reads the agreement from a file (or stdin with `-`), runs the same
//! pipeline the gateway uses, and prints the report as pretty JSON.

use std::io::Read;
use std::sync::Arc;

use clausecheck_analyzer::AnalysisEngine;
use clausecheck_config::AppConfig;
use clausecheck_providers::GeminiProvider;
use tracing::error;

pub async fn run(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let api_key = match config.require_api_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let model = Arc::new(GeminiProvider::new(api_key, config.model.clone()));
    let engine = AnalysisEngine::new(model);

    let report = engine.analyze(&text).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
