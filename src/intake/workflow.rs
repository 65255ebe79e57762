// file: src/intake/workflow.rs
// description: linear intake workflow sequencing classification, verification, routing, and summary
// reference: internal workflow state machine

use crate::ai::{ChatClient, ChatMessage};
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::intake::classifier::{self, Classification};
use crate::intake::router;
use std::fmt;
use tracing::info;

const VERIFY_SYSTEM_PROMPT: &str = "You are a help desk verification agent. Verify that the \
request, categorized as '{category}', contains all the necessary information. If any required \
information is missing, list it; otherwise, reply with 'Verified'.";

const SUMMARY_SYSTEM_PROMPT: &str = "You are a help desk final summary agent. Based on the \
provided information, generate a final summary report for the user that outlines the original \
request, the classification, the verification outcome, and the resolution details.";

/// Terminal result of one intake run.
///
/// `MissingInfo` and `VerificationIssue` are the two business-rule exits;
/// `Summarized` is the full path. Service failures are not represented
/// here; they propagate as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    MissingInfo(String),
    VerificationIssue(String),
    Summarized(String),
}

impl fmt::Display for IntakeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeOutcome::MissingInfo(message)
            | IntakeOutcome::VerificationIssue(message)
            | IntakeOutcome::Summarized(message) => write!(f, "{}", message),
        }
    }
}

/// Four-stage linear workflow over a single free-text support request.
///
/// Received → Classified → (MissingInfo | Verified → (VerificationIssue
/// | Routed → Resolved → Summarized)). Unlike the summarization pipeline,
/// a failed service call at any stage aborts the run.
pub struct IntakeWorkflow {
    chat: ChatClient,
    temperature: f32,
}

impl IntakeWorkflow {
    pub fn new(config: &Config) -> Result<Self> {
        let chat = ChatClient::new(config.openai.clone(), config.pipeline.request_timeout_secs)?;

        Ok(Self {
            chat,
            temperature: config.pipeline.intake_temperature,
        })
    }

    pub async fn handle_query(&self, query: &str) -> Result<IntakeOutcome> {
        // Stage 1: classification
        let raw = self
            .chat
            .complete(classifier::classification_messages(query), self.temperature)
            .await
            .map_err(PipelineError::in_stage("classification"))?;
        info!("Classification response:\n{}", raw);

        let classification = Classification::parse(&raw);
        if classification.needs_more_info() {
            return Ok(IntakeOutcome::MissingInfo(format!(
                "Missing Information: {}. Please provide the missing details and try again.",
                classification.missing
            )));
        }

        // Stage 2: verification
        let verification = self
            .chat
            .complete(
                verification_messages(query, &classification.category),
                self.temperature,
            )
            .await
            .map_err(PipelineError::in_stage("verification"))?;
        info!("Verification outcome:\n{}", verification);

        if verification_flags_missing(&verification) {
            return Ok(IntakeOutcome::VerificationIssue(format!(
                "Verification Issue: {}. Please provide complete details.",
                verification
            )));
        }

        // Stage 3: routing
        let resolution = router::route(&classification.category);
        info!("Routed '{}' request", classification.category);

        // Stage 4: final summary
        let summary = self
            .chat
            .complete(
                final_summary_messages(query, &classification.category, &verification, resolution),
                self.temperature,
            )
            .await
            .map_err(PipelineError::in_stage("final summary"))?;

        Ok(IntakeOutcome::Summarized(summary))
    }
}

fn verification_messages(query: &str, category: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(VERIFY_SYSTEM_PROMPT.replace("{category}", category)),
        ChatMessage::user(format!(
            "Request Details: {}\n\nVerification Outcome:",
            query
        )),
    ]
}

fn final_summary_messages(
    query: &str,
    category: &str,
    verification: &str,
    resolution: &str,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "User Query: {}\nCategory: {}\nVerification Outcome: {}\nResolution Details: {}\n\nFinal Summary Report:",
            query, category, verification, resolution
        )),
    ]
}

/// Substring heuristic over the free-text verification outcome. Matches
/// unrelated uses of the word too ("nothing is missing vs. last time"),
/// which is a known false-positive source.
fn verification_flags_missing(outcome: &str) -> bool {
    outcome.to_lowercase().contains("missing")
}
