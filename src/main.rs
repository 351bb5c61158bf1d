mod application;
mod domain;
mod infrastructure;
mod interfaces;

use std::sync::Arc;

use tracing::{error, info};

use crate::application::SummarizeUseCase;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::interfaces::http::start_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .try_init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Refusing to start without a Gemini API key");
            std::process::exit(1);
        }
    };

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new());
    let summarize_use_case = SummarizeUseCase::new(llm_client, config.llm_config());

    info!(
        model = %config.model,
        addr = %format!("{}:{}", config.host, config.port),
        "Starting AI Log Analyzer"
    );

    start_server(&config, summarize_use_case)?.await
}
