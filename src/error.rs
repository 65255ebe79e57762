// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    Download {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{service} request failed with status {status}: {message}")]
    Service {
        service: &'static str,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{service} returned an empty response")]
    EmptyResponse { service: &'static str },

    #[error("Intake stage '{stage}' failed: {source}")]
    Workflow {
        stage: &'static str,
        #[source]
        source: Box<PipelineError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl PipelineError {
    /// Wrap an error as a failure of the named intake workflow stage.
    pub fn in_stage(stage: &'static str) -> impl FnOnce(PipelineError) -> PipelineError {
        move |source| PipelineError::Workflow {
            stage,
            source: Box::new(source),
        }
    }
}
