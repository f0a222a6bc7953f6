use crate::types::PromptFields;

macro_rules! assumptions_line {
    () => {
        "Before responding, explicitly list any assumptions, identify missing information, and ask clarifying questions as needed."
    };
}

/// Clause every enhanced prompt must carry
pub const ASSUMPTIONS_LINE: &str = assumptions_line!();

/// System instruction sent with every enhancement request
///
/// Quotes [`ASSUMPTIONS_LINE`] verbatim so the model is asked to include it;
/// `postprocess::ensure_assumptions_clause` covers the case where it doesn't.
pub const SYSTEM_INSTRUCTIONS: &str = concat!(
    "You are a senior prompt engineer. Rewrite the user\u{2019}s Role, Context, and Task into a much more elaborate, polished, and professional instruction prompt. ",
    "The result must be self-contained, expand upon the role, context, and task in a structured way, provide extra clarity and detail, and be more robust than the original instructions. ",
    "Explicitly include this clause: '",
    assumptions_line!(),
    "'. Do not answer the task \u{2014} only output the improved prompt itself."
);

/// Build the user message from the three form fields
pub fn build_base_prompt(fields: &PromptFields) -> String {
    format!(
        "Role: {}\nContext: {}\nTask: {}",
        fields.role, fields.context, fields.task
    )
}
