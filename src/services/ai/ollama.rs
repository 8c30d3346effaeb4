use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{function_tools, non_empty, LlmProvider, ModelReply, ToolCall, ToolDeclaration};

pub struct OllamaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(url: String, model: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build Ollama HTTP client")?;
        Ok(Self { url, model, client })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        tools: &[ToolDeclaration],
    ) -> anyhow::Result<ModelReply> {
        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_message },
            ],
            "stream": false,
        });
        if !tools.is_empty() {
            body["tools"] = json!(function_tools(tools));
        }

        let resp = self
            .client
            .post(format!("{}/api/chat", self.url.trim_end_matches('/')))
            .json(&body)
            .send()
            .await
            .context("failed to call Ollama API")?
            .error_for_status()
            .context("Ollama API returned error")?;

        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Ollama response")?;

        let message = &data["message"];
        let tool_call = message["tool_calls"][0]["function"]["name"]
            .as_str()
            .map(|name| ToolCall {
                name: name.to_string(),
                args: message["tool_calls"][0]["function"]["arguments"].clone(),
            });

        Ok(ModelReply {
            text: non_empty(message["content"].as_str()),
            tool_call,
        })
    }
}
