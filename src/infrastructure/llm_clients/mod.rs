pub mod gemini;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;

pub use gemini::GeminiClient;

#[async_trait]
pub trait LLMClient {
    async fn generate(&self, config: &LLMConfig, prompt: &str) -> Result<String>;
}
