// file: src/ai/mod.rs
// description: Azure AI service clients module exports
// reference: internal module structure

pub mod chat;
pub mod vision;

pub use chat::{ChatClient, ChatMessage};
pub use vision::VisionClient;
