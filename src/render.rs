//! The three views of an enhanced prompt: plain text, XML and JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const XML_ROOT: &str = "enhancedPrompt";

/// One of the output views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Xml,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Plain, OutputFormat::Xml, OutputFormat::Json];

    /// Tab label shown above the view
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "Plain text",
            OutputFormat::Xml => "XML",
            OutputFormat::Json => "JSON",
        }
    }
}

/// JSON shape of the enhanced prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonPrompt {
    pub enhanced_prompt: String,
}

/// All three views of one enhanced prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputs {
    pub plain: String,
    pub xml: String,
    pub json: String,
}

impl RenderedOutputs {
    pub fn from_prompt(prompt: &str) -> Result<Self> {
        Ok(Self {
            plain: prompt.to_string(),
            xml: to_xml(prompt),
            json: to_json_string(prompt)?,
        })
    }

    pub fn get(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Plain => &self.plain,
            OutputFormat::Xml => &self.xml,
            OutputFormat::Json => &self.json,
        }
    }
}

/// Escape the characters that are reserved in XML text and attributes
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap the escaped prompt in a single `<enhancedPrompt>` element
pub fn to_xml(prompt: &str) -> String {
    format!("<{XML_ROOT}>\n{}\n</{XML_ROOT}>", escape_markup(prompt))
}

pub fn to_json(prompt: &str) -> JsonPrompt {
    JsonPrompt {
        enhanced_prompt: prompt.to_string(),
    }
}

/// Pretty-printed JSON, two-space indent, non-ASCII left as-is
pub fn to_json_string(prompt: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(prompt))?)
}
