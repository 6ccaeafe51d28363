//! Single-shot lesson-plan generation via the Bedrock Converse API.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use educustom_core::models::request::PlanRequest;

use crate::error::GenerateError;
use crate::prompt::{build_system_prompt, GENERATION_USER_MESSAGE};

/// Default model: a US-scoped Claude Sonnet inference profile. The
/// Converse API requires an inference profile ID — bare foundation model
/// IDs fail with "on-demand throughput isn't supported".
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

const TEMPERATURE: f32 = 0.7;

/// Generate one lesson plan from a validated request.
///
/// One attempt per request — a failed call is terminal and the caller
/// surfaces the error message to the user, who resubmits.
pub async fn generate_plan(
    config: &aws_config::SdkConfig,
    model_id: &str,
    request: &PlanRequest,
) -> Result<String, GenerateError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(GENERATION_USER_MESSAGE.to_string()))
        .build()
        .map_err(|e| GenerateError::Invocation(e.to_string()))?;

    info!(model_id, topic = %request.curriculum_topic, "generating lesson plan");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(build_system_prompt(request)))
        .messages(message)
        .inference_config(
            InferenceConfiguration::builder()
                .temperature(TEMPERATURE)
                .build(),
        )
        .send()
        .await
        .map_err(|e| GenerateError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| GenerateError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    Ok(text)
}
