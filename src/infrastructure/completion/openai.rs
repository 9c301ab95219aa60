//! OpenAI chat completions 게이트웨이 구현.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::application::ports::CompletionGateway;
use crate::domain::campaign::{CompletionOutput, TokenUsage};
use crate::infrastructure::config::{
    COMPLETION_API_KEY_ENV, CompletionConfig, SAMPLING_TEMPERATURE, resolve_completion_api_key,
};
use crate::infrastructure::http::{build_api_client, send_json};

pub struct OpenAiGateway {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl OpenAiGateway {
    /// API key가 해석되는 경우에만 게이트웨이를 생성한다.
    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        let Some(api_key) = resolve_completion_api_key(config).value else {
            bail!(
                "missing completion API key. Configure completion.api_key or the {COMPLETION_API_KEY_ENV} environment variable"
            );
        };

        Ok(Self {
            client: build_api_client(),
            api_base: config.api_base(),
            model: config.model(),
            api_key,
        })
    }

    fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, prompt: &str) -> Result<CompletionOutput> {
        // 대화는 user 메시지 1건, 완성 1건만 요청한다.
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": SAMPLING_TEMPERATURE,
            "n": 1,
        });

        let response = send_json(
            "openai",
            "request chat completion",
            self.client
                .post(self.completions_endpoint())
                .bearer_auth(&self.api_key)
                .json(&payload),
        )
        .await?;

        // 첫 번째 choice의 본문 텍스트만 사용한다.
        let content = response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();
        if content.is_empty() {
            bail!("openai: empty completion content");
        }

        Ok(CompletionOutput {
            content,
            usage: TokenUsage {
                prompt_tokens: response
                    .pointer("/usage/prompt_tokens")
                    .and_then(Value::as_u64),
                completion_tokens: response
                    .pointer("/usage/completion_tokens")
                    .and_then(Value::as_u64),
                total_tokens: response
                    .pointer("/usage/total_tokens")
                    .and_then(Value::as_u64),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_for(server: &mockito::ServerGuard) -> OpenAiGateway {
        OpenAiGateway {
            client: build_api_client(),
            api_base: server.url(),
            model: "gpt-4o".to_string(),
            api_key: "test-key".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_first_choice_content_and_usage() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "temperature": 0.8,
                "n": 1,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"1. Hello\n2. World"}}],"usage":{"prompt_tokens":50,"completion_tokens":120,"total_tokens":170}}"#,
            )
            .create_async()
            .await;

        let output = gateway_for(&server).complete("prompt").await.unwrap();
        mock.assert_async().await;

        assert_eq!(output.content, "1. Hello\n2. World");
        assert_eq!(output.usage.total_tokens, Some(170));
        assert_eq!(output.usage.prompt_tokens, Some(50));
    }

    #[tokio::test]
    async fn sends_the_prompt_as_a_single_user_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(json!({
                "messages": [{ "role": "user", "content": "say hi" }],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
            .create_async()
            .await;

        let output = gateway_for(&server).complete("say hi").await.unwrap();
        mock.assert_async().await;
        assert_eq!(output.content, "hi");
        assert_eq!(output.usage.total_tokens, None);
    }

    #[tokio::test]
    async fn empty_choice_list_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = gateway_for(&server).complete("prompt").await.unwrap_err();
        assert!(err.to_string().contains("empty completion content"));
    }

    #[tokio::test]
    async fn api_failure_surfaces_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
            .create_async()
            .await;

        let err = gateway_for(&server).complete("prompt").await.unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("request chat completion failed"));
        assert!(rendered.contains("Rate limit reached"));
    }
}
