//! Form and page types for the enhancer web UI

use prompt_enhancer::{
    types::{MAX_OUTPUT_CHARS_RANGE, TEMPERATURE_RANGE},
    EnhancerConfig, EnhancerError, Model, OutputFormat, PromptFields, RenderedOutputs,
};
use serde::{Deserialize, Serialize};

/// URL-encoded body of `POST /enhance`
///
/// Numeric settings arrive as text and are parsed in [`EnhanceForm::config`],
/// so bad numbers show up on the page like any other validation error.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct EnhanceForm {
    pub api_key: String,
    pub model: Model,
    pub temperature: String,
    pub max_output_chars: String,
    pub role: String,
    pub context: String,
    pub task: String,
}

impl Default for EnhanceForm {
    fn default() -> Self {
        let config = EnhancerConfig::default();
        Self {
            api_key: String::new(),
            model: config.model,
            temperature: config.temperature.to_string(),
            max_output_chars: config.max_output_chars.to_string(),
            role: String::new(),
            context: String::new(),
            task: String::new(),
        }
    }
}

impl EnhanceForm {
    pub fn fields(&self) -> PromptFields {
        PromptFields::new(&self.role, &self.context, &self.task)
    }

    /// Settings for this submission, minus the API base which the server owns
    pub fn config(&self) -> Result<EnhancerConfig, EnhancerError> {
        let temperature: f32 = self.temperature.trim().parse().map_err(|_| {
            EnhancerError::Config(format!(
                "temperature must be a number, got '{}'",
                self.temperature
            ))
        })?;
        let max_output_chars: usize = self.max_output_chars.trim().parse().map_err(|_| {
            EnhancerError::Config(format!(
                "max output characters must be a whole number, got '{}'",
                self.max_output_chars
            ))
        })?;

        Ok(EnhancerConfig::new(self.model)
            .with_temperature(temperature)
            .with_max_output_chars(max_output_chars)
            .with_api_key(self.api_key.as_str()))
    }
}

/// Selection list entry
#[derive(Debug, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub selected: bool,
}

/// One of the three output views
#[derive(Debug, Serialize)]
pub struct OutputView {
    pub label: &'static str,
    pub language: &'static str,
    pub body: String,
}

/// Everything the page template needs
///
/// Never carries the API key.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub models: Vec<ModelOption>,
    pub temperature: String,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub max_output_chars: String,
    pub max_chars_min: usize,
    pub max_chars_max: usize,
    pub role: String,
    pub context: String,
    pub task: String,
    pub error: Option<String>,
    pub outputs: Option<Vec<OutputView>>,
}

impl PageContext {
    /// Page re-populated with what the user submitted
    pub fn from_form(form: &EnhanceForm) -> Self {
        Self {
            models: Model::ALL
                .iter()
                .map(|m| ModelOption {
                    id: m.as_str(),
                    selected: *m == form.model,
                })
                .collect(),
            temperature: form.temperature.clone(),
            temperature_min: *TEMPERATURE_RANGE.start(),
            temperature_max: *TEMPERATURE_RANGE.end(),
            max_output_chars: form.max_output_chars.clone(),
            max_chars_min: *MAX_OUTPUT_CHARS_RANGE.start(),
            max_chars_max: *MAX_OUTPUT_CHARS_RANGE.end(),
            role: form.role.clone(),
            context: form.context.clone(),
            task: form.task.clone(),
            error: None,
            outputs: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_outputs(mut self, outputs: &RenderedOutputs) -> Self {
        self.outputs = Some(
            OutputFormat::ALL
                .iter()
                .map(|format| OutputView {
                    label: format.label(),
                    language: match format {
                        OutputFormat::Plain => "markdown",
                        OutputFormat::Xml => "xml",
                        OutputFormat::Json => "json",
                    },
                    body: outputs.get(*format).to_string(),
                })
                .collect(),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_matches_config_defaults() {
        let form = EnhanceForm::default();
        assert_eq!(form.model, Model::Gpt4oMini);
        assert_eq!(form.temperature, "0.5");
        assert_eq!(form.max_output_chars, "2000");
        let config = form.config().unwrap();
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_output_chars, 2000);
    }

    #[test]
    fn test_non_numeric_settings_are_config_errors() {
        let form = EnhanceForm {
            temperature: "warm".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.config(), Err(EnhancerError::Config(_))));

        let form = EnhanceForm {
            max_output_chars: "lots".to_string(),
            ..Default::default()
        };
        let err = form.config().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_page_context_marks_selected_model() {
        let form = EnhanceForm {
            model: Model::Gpt4o,
            ..Default::default()
        };
        let page = PageContext::from_form(&form);
        let selected: Vec<_> = page.models.iter().filter(|m| m.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "gpt-4o");
    }

    #[test]
    fn test_outputs_in_tab_order() {
        let outputs = RenderedOutputs::from_prompt("hello").unwrap();
        let page = PageContext::from_form(&EnhanceForm::default()).with_outputs(&outputs);
        let labels: Vec<_> = page.outputs.unwrap().iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Plain text", "XML", "JSON"]);
    }
}
