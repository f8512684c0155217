pub mod error;
pub mod types;

pub use error::{GeminiError, Result};

use std::time::Duration;

use tracing::debug;

use types::{Content, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Generate a reply for a single user message under a system instruction.
    pub async fn generate_content(
        &self,
        model: &str,
        system_instruction: &str,
        message: &str,
    ) -> Result<String> {
        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let request = GenerateContentRequest {
            system_instruction: Content::system(system_instruction),
            contents: vec![Content::user(message)],
        };

        debug!(model = %model, "Gemini generateContent request");

        let resp = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = resp.json().await?;

        body.first_text().ok_or_else(|| GeminiError::EmptyResponse {
            model: model.to_string(),
        })
    }
}
