//! # Prompt Enhancer
//!
//! Turns a Role, Context and Task into a more elaborate, professional
//! prompt by asking an OpenAI model to rewrite them, then renders the
//! result as plain text, XML and JSON.

pub mod error;
pub mod postprocess;
pub mod render;
pub mod types;

mod enhancer;
mod prompts;

// Re-exports
pub use enhancer::{validate_submission, Enhancer};
pub use error::{EnhancerError, Result};
pub use prompts::{build_base_prompt, ASSUMPTIONS_LINE, SYSTEM_INSTRUCTIONS};
pub use render::{OutputFormat, RenderedOutputs};
pub use types::{Enhancement, EnhancerConfig, Model, PromptFields, Usage};
