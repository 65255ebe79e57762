// file: src/pipeline/summarizer.rs
// description: corpus summarization through the chat deployment with fixed prompts
// reference: internal summarization stage

use crate::ai::{ChatClient, ChatMessage};
use tracing::error;

pub const EMPTY_CORPUS_MESSAGE: &str = "No content available to summarize.";
pub const SUMMARY_FAILED_MESSAGE: &str = "An error occurred while generating the summary.";

const SYSTEM_PROMPT: &str = "You are an AI assistant that provides comprehensive summaries \
of Confluence content and extracted data from images.";

const USER_PREAMBLE: &str = "Here is the collected information about the software/tool. \
Please write a detailed summary:\n";

/// Final summarization stage of the aggregation pipeline.
///
/// Runs deterministically (temperature 0). Like the other leaves of this
/// pipeline it swallows service failures and substitutes a sentinel, so
/// the pipeline always yields a printable string.
pub struct Summarizer {
    chat: ChatClient,
}

impl Summarizer {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    pub async fn summarize(&self, corpus: &str) -> String {
        if corpus.trim().is_empty() {
            return EMPTY_CORPUS_MESSAGE.to_string();
        }

        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("{}{}", USER_PREAMBLE, corpus)),
        ];

        match self.chat.complete(messages, 0.0).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Error during summarization: {}", e);
                SUMMARY_FAILED_MESSAGE.to_string()
            }
        }
    }
}
