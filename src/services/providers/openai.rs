/// OpenAI-compatible chat completion provider
///
/// Sends one user message to `POST /chat/completions` and returns the first choice.
use crate::{
    error::{AppError, AppResult},
    models::{ChatCompletionBody, ChatCompletionResponse, CompletionRequest},
    services::providers::CompletionProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OpenAiCompletionProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OpenAiCompletionProvider {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn first_choice(&self, response: ChatCompletionResponse) -> AppResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalApi("Completion response contained no message".to_string())
            })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);

        let mut builder = self
            .http_client
            .post(&url)
            .json(&ChatCompletionBody::from(request));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Completion API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = self.first_choice(completion)?;

        tracing::info!(
            model = %request.model,
            chars = text.len(),
            provider = "openai",
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
