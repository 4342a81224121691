//! System prompt and offline reply composition.

use skylark_domain::DataQualityReport;

use super::context::RenderedContext;

pub const PERSONA: &str = "You are Skylark, an advanced BI AI.";

pub const OFFLINE_NOTICE: &str =
    "*Note: AI services are currently unavailable. Check server logs for details.*";

/// Build the system prompt: persona, question, context, data-quality
/// caveats and answering instructions.
pub fn compose_system_prompt(
    message: &str,
    context: &RenderedContext,
    quality: &DataQualityReport,
) -> String {
    let warnings = if quality.missing_deal_value_count > 0 {
        format!("- {} deals missing value", quality.missing_deal_value_count)
    } else {
        String::new()
    };

    format!(
        "{PERSONA}\nUser Question: \"{message}\"\n\nCONTEXT ({label}):\n{context}\n\n\
         DATA QUALITY WARNINGS:\n{warnings}\n\n\
         INSTRUCTIONS:\n- Answer ONLY based on the provided context.\n- Be professional and concise.\n",
        label = context.label(),
        context = context.text,
    )
}

/// Deterministic summary used when every backend failed or none is configured.
pub fn compose_offline_reply(context: &RenderedContext) -> String {
    format!("**{}**\n{}\n\n{OFFLINE_NOTICE}", context.summary_title(), context.text)
}
