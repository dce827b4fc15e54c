//! Prompt assembly and response parsing for portfolio narrative generation.

use thiserror::Error;

use crate::profile::PortfolioDraft;

/// System preamble for the generative model.
pub const PREAMBLE: &str = "\
You write freelancer portfolios. You answer with a single JSON object and nothing else: \
no markdown, no code fences, no commentary.";

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("Model returned an empty response")]
    Empty,
    #[error("Model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Model response is JSON but not an object")]
    NotAnObject,
}

fn or_absent(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

/// Build the generation prompt for a draft.
pub fn build_prompt(draft: &PortfolioDraft) -> String {
    let services =
        serde_json::to_string_pretty(&draft.services).unwrap_or_else(|_| "[]".to_string());
    let tools = serde_json::to_string_pretty(&draft.tools).unwrap_or_else(|_| "[]".to_string());

    let mut parts = Vec::new();

    parts.push(format!(
        "Freelancer data\n\
         Full name: {}\n\
         About: {}\n\
         GitHub: {}\n\
         Behance: {}\n\
         Dribbble: {}\n\
         Portfolio: {}\n\
         LinkedIn: {}\n\
         Profile photo: {}",
        draft.full_name,
        draft.about,
        or_absent(&draft.github_link),
        or_absent(&draft.behance_link),
        or_absent(&draft.dribbble_link),
        or_absent(&draft.portfolio_link),
        or_absent(&draft.linkedin_link),
        or_absent(&draft.profile_photo),
    ));

    parts.push(format!("Services matched from declared skills:\n{services}"));
    parts.push(format!("Tools matched from declared tools:\n{tools}"));
    parts.push(format!(
        "Resume text:\n{}",
        draft.resume_text.as_deref().unwrap_or("(no resume available)")
    ));

    parts.push(
        "Task\n\
         Return a JSON object with the fields: full_name; about (a professional narrative \
         built from everything above); profile_photo, github_link, behance_link, \
         dribbble_link, linkedin_link and portfolio_link when known; services as an array \
         of {\"category\": string, \"services\": [string]}; tools as an array of strings; \
         projects as an array of {\"title\", \"description\": [string], \"link\"?, \"files\"?}; \
         experience as an array of {\"title\", \"company_name\", \"description\": [string], \
         \"start_date\": \"MM/YYYY\", \"end_date\": \"MM/YYYY\" or \"\" when current}. \
         Each description bullet is a full sentence covering the work, its context and its \
         impact. Do not repeat fields."
            .to_string(),
    );

    parts.join("\n\n")
}

/// Parse the model's reply into a JSON object.
///
/// A reply wrapped in a ```` ``` ```` fence, with or without a language tag,
/// is unwrapped first.
pub fn parse_narrative(response: &str) -> Result<serde_json::Value, NarrativeError> {
    let text = strip_fences(response);

    if text.is_empty() {
        return Err(NarrativeError::Empty);
    }

    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(NarrativeError::NotAnObject);
    }

    Ok(value)
}

fn strip_fences(response: &str) -> &str {
    let text = response.trim();

    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Whatever follows the opening fence on its line is a language tag.
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}
