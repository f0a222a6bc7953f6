use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{EnhancerError, Result};
use crate::render::RenderedOutputs;

/// Allowed sampling temperature
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.2;

/// Allowed maximum length of the enhanced prompt, in characters
pub const MAX_OUTPUT_CHARS_RANGE: RangeInclusive<usize> = 400..=10_000;

/// Text-capable model used for the rewrite
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Gpt4oMini, Model::Gpt4o];

    /// Model identifier sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = EnhancerError;

    fn from_str(s: &str) -> Result<Self> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| EnhancerError::Config(format!("unknown model '{}'", s)))
    }
}

/// The three free-text inputs of the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptFields {
    /// Persona the target prompt should assume
    pub role: String,
    /// Background information
    pub context: String,
    /// Desired action
    pub task: String,
}

impl PromptFields {
    pub fn new(
        role: impl Into<String>,
        context: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            context: context.into(),
            task: task.into(),
        }
    }

    /// True when all three fields are empty strings
    pub fn is_empty(&self) -> bool {
        self.role.is_empty() && self.context.is_empty() && self.task.is_empty()
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl Usage {
    pub fn new(input: u64, output: u64) -> Self {
        Self {
            input_tokens: input,
            output_tokens: output,
            total_tokens: input + output,
        }
    }
}

/// Result of one successful enhancement
#[derive(Debug, Clone)]
pub struct Enhancement {
    /// Final prompt text, after clause enforcement and truncation
    pub prompt: String,
    pub outputs: RenderedOutputs,
    pub model: Model,
    pub usage: Usage,
    pub execution_time: Duration,
}

/// Settings for a single enhancement
#[derive(Clone)]
pub struct EnhancerConfig {
    pub model: Model,
    pub temperature: f32,
    pub max_output_chars: usize,
    /// API key supplied by the caller for this session only
    pub api_key: Option<String>,
    /// Base URL for API (optional, for OpenAI-compatible endpoints)
    pub base_url: Option<String>,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.5,
            max_output_chars: 2000,
            api_key: None,
            base_url: None,
        }
    }
}

impl EnhancerConfig {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, t: f32) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_max_output_chars(mut self, n: usize) -> Self {
        self.max_output_chars = n;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Check the numeric settings against their bounds
    pub fn validate(&self) -> Result<()> {
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(EnhancerError::Config(format!(
                "temperature must be between {} and {}, got {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end(),
                self.temperature
            )));
        }
        if !MAX_OUTPUT_CHARS_RANGE.contains(&self.max_output_chars) {
            return Err(EnhancerError::Config(format!(
                "max output characters must be between {} and {}, got {}",
                MAX_OUTPUT_CHARS_RANGE.start(),
                MAX_OUTPUT_CHARS_RANGE.end(),
                self.max_output_chars
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for EnhancerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhancerConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_chars", &self.max_output_chars)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
