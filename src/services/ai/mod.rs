pub mod gemini;
pub mod groq;
pub mod ollama;
pub mod recommend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A function the model may call instead of answering in prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object.
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub name: String,
    pub args: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply {
    pub text: Option<String>,
    pub tool_call: Option<ToolCall>,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        tools: &[ToolDeclaration],
    ) -> anyhow::Result<ModelReply>;
}

/// Tool list in the OpenAI chat-completions shape, shared by Groq and Ollama.
fn function_tools(tools: &[ToolDeclaration]) -> Vec<serde_json::Value> {
    tools
        .iter()
        .map(|t| {
            json!({
                "type": "function",
                "function": {
                    "name": t.name,
                    "description": t.description,
                    "parameters": t.parameters,
                },
            })
        })
        .collect()
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
