// file: src/ai/vision.rs
// description: Azure Computer Vision image description client with sentinel fallbacks
// reference: https://learn.microsoft.com/azure/ai-services/computer-vision

use crate::config::VisionConfig;
use crate::error::{PipelineError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

/// Returned when the service answered but produced no caption candidates.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Returned when the describe call itself failed.
pub const ANALYSIS_FAILED: &str = "Image analysis failed.";

#[derive(Debug, Deserialize)]
struct DescribeResponse {
    #[serde(default)]
    description: DescriptionBlock,
}

#[derive(Debug, Default, Deserialize)]
struct DescriptionBlock {
    #[serde(default)]
    captions: Vec<CaptionCandidate>,
}

#[derive(Debug, Deserialize)]
struct CaptionCandidate {
    text: String,
}

/// Client for the Computer Vision describe endpoint.
///
/// `describe` never raises: callers always receive a caption string, a
/// "no description" sentinel, or a failure sentinel.
#[derive(Clone)]
pub struct VisionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl VisionClient {
    pub fn new(config: VisionConfig, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Describe an image, substituting sentinels for empty or failed results.
    pub async fn describe(&self, image: &[u8]) -> String {
        match self.try_describe(image).await {
            Ok(Some(caption)) => caption,
            Ok(None) => NO_DESCRIPTION.to_string(),
            Err(e) => {
                error!("Error analyzing image: {}", e);
                ANALYSIS_FAILED.to_string()
            }
        }
    }

    async fn try_describe(&self, image: &[u8]) -> Result<Option<String>> {
        let url = format!("{}/vision/v3.2/describe", self.endpoint);

        debug!("Requesting image description for {} bytes", image.len());

        let response = self
            .client
            .post(&url)
            .query(&[("maxCandidates", "1")])
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Service {
                service: "Computer Vision",
                status,
                message,
            });
        }

        let parsed: DescribeResponse = response.json().await?;
        Ok(parsed
            .description
            .captions
            .into_iter()
            .next()
            .map(|candidate| candidate.text))
    }
}
