use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use std::time::Instant;

use crate::error::{EnhancerError, Result};
use crate::postprocess::finalize;
use crate::prompts::{build_base_prompt, SYSTEM_INSTRUCTIONS};
use crate::render::RenderedOutputs;
use crate::types::{Enhancement, EnhancerConfig, PromptFields, Usage};

/// Reject a submission before anything is sent
///
/// The credential is checked first, then the three inputs.
pub fn validate_submission(api_key: Option<&str>, fields: &PromptFields) -> Result<()> {
    if api_key.map_or(true, str::is_empty) {
        return Err(EnhancerError::MissingApiKey);
    }
    if fields.is_empty() {
        return Err(EnhancerError::EmptyInputs);
    }
    Ok(())
}

/// Rewrites Role, Context and Task into an enhanced prompt
pub struct Enhancer {
    config: EnhancerConfig,
    client: Client<OpenAIConfig>,
}

impl Enhancer {
    /// Create an enhancer for one session
    ///
    /// Fails without an API key or with out-of-range settings.
    pub fn new(config: EnhancerConfig) -> Result<Self> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(EnhancerError::MissingApiKey),
        };
        config.validate()?;

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }
        let client = Client::with_config(openai_config);

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    /// Run one enhancement
    ///
    /// Sends the combined Role/Context/Task with the fixed system instruction,
    /// then enforces the assumptions clause and the length limit on the reply.
    pub async fn enhance(&self, fields: &PromptFields) -> Result<Enhancement> {
        validate_submission(self.config.api_key.as_deref(), fields)?;

        let start = Instant::now();
        let base_prompt = build_base_prompt(fields);

        let (raw, usage) = self.call_llm(&base_prompt).await?;
        if raw.is_empty() {
            tracing::warn!(model = %self.config.model, "model returned empty text");
        }

        let prompt = finalize(&raw, self.config.max_output_chars);
        let outputs = RenderedOutputs::from_prompt(&prompt)?;
        let execution_time = start.elapsed();

        tracing::info!(
            model = %self.config.model,
            raw_chars = raw.chars().count(),
            final_chars = prompt.chars().count(),
            total_tokens = usage.total_tokens,
            elapsed = ?execution_time,
            "enhanced prompt generated"
        );

        Ok(Enhancement {
            prompt,
            outputs,
            model: self.config.model,
            usage,
            execution_time,
        })
    }

    /// Single chat-completion call: system instruction plus one user message
    async fn call_llm(&self, base_prompt: &str) -> Result<(String, Usage)> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_INSTRUCTIONS)
                    .build()?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(base_prompt)
                    .build()?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.config.model.as_str())
            .messages(messages)
            .temperature(self.config.temperature)
            .build()?;

        tracing::debug!(
            model = %self.config.model,
            temperature = self.config.temperature,
            input_chars = base_prompt.chars().count(),
            "calling chat completions"
        );

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, "chat completion failed");
            EnhancerError::OpenAi(e)
        })?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage::new(u.prompt_tokens as u64, u.completion_tokens as u64))
            .unwrap_or_default();

        Ok((content, usage))
    }
}
