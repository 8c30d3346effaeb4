use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{function_tools, non_empty, LlmProvider, ModelReply, ToolCall, ToolDeclaration};

pub struct GroqProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GroqProvider {
    pub fn new(api_key: String, model: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build Groq HTTP client")?;
        Ok(Self {
            api_key,
            model,
            client,
        })
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
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
            "temperature": 0.7,
        });
        if !tools.is_empty() {
            body["tools"] = json!(function_tools(tools));
            body["tool_choice"] = json!("auto");
        }

        let resp = self
            .client
            .post("https://api.groq.com/openai/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to call Groq API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Groq response")?;

        if !status.is_success() {
            anyhow::bail!("Groq API error ({}): {}", status, data);
        }

        Ok(parse_chat_completion(&data))
    }
}

fn parse_chat_completion(data: &serde_json::Value) -> ModelReply {
    let message = &data["choices"][0]["message"];

    // Arguments arrive as a JSON-encoded string.
    let tool_call = message["tool_calls"][0]["function"]["name"]
        .as_str()
        .map(|name| {
            let args = message["tool_calls"][0]["function"]["arguments"]
                .as_str()
                .and_then(|raw| serde_json::from_str(raw).ok())
                .unwrap_or_default();
            ToolCall {
                name: name.to_string(),
                args,
            }
        });

    ModelReply {
        text: non_empty(message["content"].as_str()),
        tool_call,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_call_arguments_string() {
        let data = json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "function": {
                            "name": "recommend_treatment",
                            "arguments": "{\"treatmentId\":\"hot-stone-massage\",\"reasoning\":\"Warmth for tired muscles.\"}"
                        }
                    }]
                }
            }]
        });
        let reply = parse_chat_completion(&data);
        let call = reply.tool_call.unwrap();
        assert_eq!(call.args["treatmentId"], "hot-stone-massage");
        assert!(reply.text.is_none());
    }

    #[test]
    fn test_parse_plain_content() {
        let data = json!({ "choices": [{ "message": { "content": "  Welcome!  " } }] });
        let reply = parse_chat_completion(&data);
        assert_eq!(reply.text.as_deref(), Some("Welcome!"));
        assert!(reply.tool_call.is_none());
    }
}
