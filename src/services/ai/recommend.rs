use serde::Deserialize;
use serde_json::json;

use crate::catalog::Catalog;
use crate::models::{ChatReply, ServiceRecommendation};
use crate::services::ai::{LlmProvider, ModelReply, ToolDeclaration};

pub const RECOMMEND_TOOL: &str = "recommend_treatment";

pub const NO_RECOMMENDATION_TEXT: &str =
    "I'd love to help you relax. Could you tell me if you prefer a strong massage or something more gentle?";

pub const UNAVAILABLE_TEXT: &str =
    "I am having a brief moment of meditation. Please check our Price List for the full menu.";

#[derive(Debug, Deserialize)]
struct RecommendArgs {
    #[serde(rename = "treatmentId", alias = "treatment_id", alias = "serviceId")]
    treatment_id: String,
    #[serde(default)]
    reasoning: String,
}

pub fn system_prompt(catalog: &Catalog, business_name: &str) -> String {
    let menu = catalog
        .all()
        .iter()
        .map(|s| format!("{}: {} ({})", s.id, s.name, s.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are 'Cherie', the AI Wellness Concierge for {business_name} Home Spa.\n\
         Your tone is soft, feminine, elegant, and professional.\n\n\
         Your goal is to understand how the client is feeling (stressed, muscle pain, tired, wants beauty) \
         and recommend ONE specific treatment from our menu using the '{RECOMMEND_TOOL}' tool.\n\n\
         Here is our menu context:\n{menu}\n\n\
         Instructions:\n\
         1. If the user describes a physical issue (back pain, tension) or emotional state (stress), \
         IMMEDIATELY use the '{RECOMMEND_TOOL}' tool to suggest the best fit.\n\
         2. If the user is just saying hello, respond politely as a concierge.\n\
         3. Do not list multiple options in text. Pick the best one and use the tool."
    )
}

pub fn recommend_tool(catalog: &Catalog) -> ToolDeclaration {
    let ids = catalog
        .all()
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    ToolDeclaration {
        name: RECOMMEND_TOOL.to_string(),
        description: "Select the best spa treatment for the user based on their described symptoms, mood, or request.".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "treatmentId": {
                    "type": "string",
                    "description": format!("The exact ID of the service to recommend. Available IDs: {ids}"),
                },
                "reasoning": {
                    "type": "string",
                    "description": "A short, warm, feminine explanation of why this specific treatment is perfect for them.",
                },
            },
            "required": ["treatmentId", "reasoning"],
        }),
    }
}

/// Asks the model for a treatment suggestion. Never fails: provider errors
/// and unusable replies turn into a fallback text reply.
pub async fn recommend(
    llm: &dyn LlmProvider,
    catalog: &Catalog,
    business_name: &str,
    query: &str,
) -> ChatReply {
    let query = query.trim();
    if query.is_empty() {
        return ChatReply::text(NO_RECOMMENDATION_TEXT);
    }

    let system = system_prompt(catalog, business_name);
    let tools = [recommend_tool(catalog)];

    match llm.generate(&system, query, &tools).await {
        Ok(reply) => interpret_reply(catalog, reply),
        Err(e) => {
            tracing::error!(error = %e, "recommendation call failed");
            ChatReply::text(UNAVAILABLE_TEXT)
        }
    }
}

fn interpret_reply(catalog: &Catalog, reply: ModelReply) -> ChatReply {
    let from_tool = reply
        .tool_call
        .filter(|call| call.name == RECOMMEND_TOOL)
        .and_then(|call| serde_json::from_value::<RecommendArgs>(call.args).ok());

    if let Some(args) = from_tool {
        if let Some(rec) = resolve(catalog, args) {
            return ChatReply::recommending(rec);
        }
    }

    let Some(text) = reply.text else {
        return ChatReply::text(NO_RECOMMENDATION_TEXT);
    };

    // Some models answer with the tool arguments as JSON text.
    if let Some(args) = parse_args_from_text(&text) {
        return match resolve(catalog, args) {
            Some(rec) => ChatReply::recommending(rec),
            None => ChatReply::text(NO_RECOMMENDATION_TEXT),
        };
    }

    ChatReply::text(text)
}

fn resolve(catalog: &Catalog, args: RecommendArgs) -> Option<ServiceRecommendation> {
    let Some(service) = catalog.get(args.treatment_id.trim()) else {
        tracing::warn!(treatment_id = %args.treatment_id, "model recommended unknown treatment");
        return None;
    };
    Some(ServiceRecommendation {
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        reasoning: args.reasoning,
    })
}

fn parse_args_from_text(response: &str) -> Option<RecommendArgs> {
    if let Ok(args) = serde_json::from_str::<RecommendArgs>(response) {
        return Some(args);
    }

    // Strip markdown code fences
    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(args) = serde_json::from_str::<RecommendArgs>(cleaned) {
        return Some(args);
    }

    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<RecommendArgs>(&cleaned[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ai::ToolCall;

    fn tool_reply(id: &str, reasoning: &str) -> ModelReply {
        ModelReply {
            text: None,
            tool_call: Some(ToolCall {
                name: RECOMMEND_TOOL.to_string(),
                args: json!({ "treatmentId": id, "reasoning": reasoning }),
            }),
        }
    }

    fn text_reply(text: &str) -> ModelReply {
        ModelReply {
            text: Some(text.to_string()),
            tool_call: None,
        }
    }

    #[test]
    fn test_tool_call_resolves_against_catalog() {
        let catalog = Catalog::builtin();
        let reply = interpret_reply(&catalog, tool_reply("deep-tissue-massage", "Eases knots."));
        assert_eq!(reply.text, "Eases knots.");
        let rec = reply.recommendation.unwrap();
        assert_eq!(rec.service_id, "deep-tissue-massage");
        assert_eq!(rec.service_name, "Deep Tissue Massage");
    }

    #[test]
    fn test_unknown_treatment_falls_back_to_text() {
        let catalog = Catalog::builtin();
        let mut reply = tool_reply("mud-bath", "Mud!");
        reply.text = Some("Let me think about that.".to_string());
        let chat = interpret_reply(&catalog, reply);
        assert!(chat.recommendation.is_none());
        assert_eq!(chat.text, "Let me think about that.");

        let chat = interpret_reply(&catalog, tool_reply("mud-bath", "Mud!"));
        assert_eq!(chat.text, NO_RECOMMENDATION_TEXT);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let catalog = Catalog::builtin();
        let chat = interpret_reply(&catalog, text_reply("Good evening! How are you feeling?"));
        assert_eq!(chat.text, "Good evening! How are you feeling?");
        assert!(chat.recommendation.is_none());
    }

    #[test]
    fn test_empty_reply_uses_default_text() {
        let catalog = Catalog::builtin();
        let chat = interpret_reply(&catalog, ModelReply::default());
        assert_eq!(chat.text, NO_RECOMMENDATION_TEXT);
    }

    #[test]
    fn test_fenced_json_text_is_recognised() {
        let catalog = Catalog::builtin();
        let raw = "```json\n{\"treatmentId\":\"aromatherapy-massage\",\"reasoning\":\"Calm your mind.\"}\n```";
        let chat = interpret_reply(&catalog, text_reply(raw));
        assert_eq!(chat.recommendation.unwrap().service_id, "aromatherapy-massage");
    }

    #[test]
    fn test_embedded_json_text_is_recognised() {
        let catalog = Catalog::builtin();
        let raw = "Sure! {\"treatmentId\": \"thai-massage\", \"reasoning\": \"Stretching helps.\"} Enjoy.";
        let chat = interpret_reply(&catalog, text_reply(raw));
        assert_eq!(chat.text, "Stretching helps.");
    }

    #[test]
    fn test_other_tool_names_ignored() {
        let catalog = Catalog::builtin();
        let reply = ModelReply {
            text: Some("Hello there.".to_string()),
            tool_call: Some(ToolCall {
                name: "book_now".to_string(),
                args: json!({ "treatmentId": "thai-massage" }),
            }),
        };
        let chat = interpret_reply(&catalog, reply);
        assert!(chat.recommendation.is_none());
    }

    #[test]
    fn test_prompt_and_tool_list_catalog() {
        let catalog = Catalog::builtin();
        let prompt = system_prompt(&catalog, "Exotica Bali");
        assert!(prompt.contains("Exotica Bali Home Spa"));
        assert!(prompt.contains("balinese-massage: Balinese Massage ("));
        let tool = recommend_tool(&catalog);
        let desc = tool.parameters["properties"]["treatmentId"]["description"]
            .as_str()
            .unwrap();
        assert!(desc.contains("customised-spa-package"));
    }
}
