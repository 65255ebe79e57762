// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod ai;
pub mod config;
pub mod confluence;
pub mod error;
pub mod intake;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use ai::{ChatClient, ChatMessage, VisionClient};
pub use config::{Config, ConfluenceConfig, OpenAiConfig, PipelineConfig, VisionConfig};
pub use confluence::ConfluenceClient;
pub use error::{PipelineError, Result};
pub use intake::{Classification, IntakeOutcome, IntakeWorkflow};
pub use models::{Attachment, Page};
pub use parser::HtmlNormalizer;
pub use pipeline::{
    CorpusBuilder, EnrichmentCoordinator, ImageCaption, PipelineStats, ProgressTracker,
    SummarizePipeline, Summarizer,
};
pub use utils::Validator;
