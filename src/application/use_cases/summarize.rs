use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;

const PROMPT_TEMPLATE: &str = "You are a helpful assistant that summarizes log files clearly, \
so that the user can understand why the test failed. \
Also try suggesting possible fixes or next steps. Make it simple in the below format:\n\n\
TESTNAME: <testname>\n\
DEVICE : <Device>\n\
STATUS : <Status>\n\
ROOT CAUSE : <Explain why the test failed in simple terms. Not more than 2 sentences>\n\
SOLUTION : <Suggest a fix. If not sure give the solution as 'Reach out to support@rdkcentral.com'>\
If any of the above parameters are not available in the log file, skip that line. \
The only mandatory parameters are ROOT CAUSE and SOLUTION\n\n";

/// The instruction prompt: fixed template with the raw log appended verbatim.
pub fn build_prompt(log_text: &str) -> String {
    format!("{}{}", PROMPT_TEMPLATE, log_text)
}

pub struct SummarizeUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl SummarizeUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    /// Sends the log through the model and returns the raw summary text.
    pub async fn execute(&self, log_text: &str) -> Result<String> {
        let prompt = build_prompt(log_text);
        debug!(prompt_len = prompt.len(), "Submitting log for summarization");

        let started = std::time::Instant::now();
        let summary = self.llm_client.generate(&self.config, &prompt).await?;

        info!(
            summary_len = summary.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received model summary"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockClient {
        prompts: Mutex<Vec<String>>,
        reply: std::result::Result<String, String>,
    }

    impl MockClient {
        fn replying(reply: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Ok(reply.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl LLMClient for MockClient {
        async fn generate(&self, _config: &LLMConfig, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .map_err(AppError::LLMError)
        }
    }

    #[tokio::test]
    async fn test_prompt_is_template_plus_log_verbatim() {
        let client = Arc::new(MockClient::replying("STATUS : PASS"));
        let use_case = SummarizeUseCase::new(client.clone(), LLMConfig::default());

        let log = "2024-01-01 boot ok\ntest finished";
        use_case.execute(log).await.unwrap();

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("You are a helpful assistant"));
        assert!(prompts[0].ends_with(log));
        assert_eq!(prompts[0], build_prompt(log));
    }

    #[test]
    fn test_template_requests_the_five_fields() {
        let prompt = build_prompt("");
        for label in ["TESTNAME", "DEVICE", "STATUS", "ROOT CAUSE", "SOLUTION"] {
            assert!(prompt.contains(label), "missing label {}", label);
        }
        assert!(prompt.contains("Reach out to support@rdkcentral.com"));
    }

    #[tokio::test]
    async fn test_llm_errors_propagate() {
        let client = Arc::new(MockClient::failing("rate limited"));
        let use_case = SummarizeUseCase::new(client, LLMConfig::default());

        let err = use_case.execute("log").await.unwrap_err();
        assert!(matches!(err, AppError::LLMError(msg) if msg == "rate limited"));
    }
}
