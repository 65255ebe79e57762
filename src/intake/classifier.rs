// file: src/intake/classifier.rs
// description: request classification prompt and best-effort response parsing
// reference: internal intake workflow stage

use crate::ai::ChatMessage;

pub const DEFAULT_CATEGORY: &str = "Other IT Support";
pub const NO_MISSING_INFO: &str = "None";

const SYSTEM_PROMPT: &str = "You are a help desk planning and routing agent. Analyze the \
user query and classify the request into one of these categories: 'Password Reset', \
'VDI Resource Increase', or 'Other IT Support'. Also, identify any missing information \
required to process the request. Return your answer in the format:\n\n\
Category: <category>\nMissing: <missing details or 'None'>";

/// Build the chat messages for the classification stage.
pub fn classification_messages(query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("User Query: {}", query)),
    ]
}

/// Parsed classification of a support request.
///
/// The service contract is textual, not structural: the expected response
/// is two labeled lines, but nothing enforces that. `parse` scans for the
/// labels case-insensitively and falls back to defaults for any line that
/// is absent or has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub missing: String,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            missing: NO_MISSING_INFO.to_string(),
        }
    }
}

impl Classification {
    pub fn parse(response: &str) -> Self {
        let mut category = None;
        let mut missing = None;

        for line in response.lines() {
            if let Some(value) = labeled_value(line, "category:") {
                category = Some(value.to_string());
            } else if let Some(value) = labeled_value(line, "missing:") {
                missing = Some(value.to_string());
            }
        }

        Self {
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            missing: missing.unwrap_or_else(|| NO_MISSING_INFO.to_string()),
        }
    }

    /// Whether the classifier flagged required information as missing.
    pub fn needs_more_info(&self) -> bool {
        !self.missing.eq_ignore_ascii_case(NO_MISSING_INFO)
    }
}

/// Case-insensitive label match; returns the trimmed non-empty remainder.
fn labeled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let trimmed = line.trim();
    if trimmed.len() < label.len() || !trimmed.is_char_boundary(label.len()) {
        return None;
    }

    let (head, tail) = trimmed.split_at(label.len());
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }

    let value = tail.trim();
    (!value.is_empty()).then_some(value)
}
