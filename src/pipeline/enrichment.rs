// file: src/pipeline/enrichment.rs
// description: bounded concurrent download-and-describe fan-out for image attachments
// reference: https://docs.rs/futures

use crate::ai::VisionClient;
use crate::confluence::ConfluenceClient;
use crate::models::Attachment;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, warn};

/// Caption produced for one image attachment, success or failure.
#[derive(Debug, Clone)]
pub struct ImageCaption {
    pub attachment_title: String,
    pub caption: String,
    pub failed: bool,
}

/// Fans out download+describe units for one page's image attachments.
///
/// Units run on a bounded worker pool and are collected in completion
/// order. A failed unit becomes a failure caption instead of aborting its
/// siblings, so the output always has exactly one entry per selected
/// attachment. The coordinator returns only after every unit finished.
pub struct EnrichmentCoordinator {
    confluence: ConfluenceClient,
    vision: VisionClient,
    workers: usize,
}

impl EnrichmentCoordinator {
    pub fn new(confluence: ConfluenceClient, vision: VisionClient, workers: usize) -> Self {
        Self {
            confluence,
            vision,
            workers: workers.max(1),
        }
    }

    /// Caption every image attachment in the list.
    pub async fn describe_images(&self, attachments: Vec<Attachment>) -> Vec<ImageCaption> {
        let images: Vec<Attachment> = attachments
            .into_iter()
            .filter(Attachment::is_image)
            .collect();

        if images.is_empty() {
            return Vec::new();
        }

        debug!(
            "Describing {} image attachment(s) with {} worker(s)",
            images.len(),
            self.workers
        );

        stream::iter(
            images
                .into_iter()
                .map(|attachment| self.describe_one(attachment)),
        )
        .buffer_unordered(self.workers)
        .collect()
        .await
    }

    async fn describe_one(&self, attachment: Attachment) -> ImageCaption {
        let title = attachment.title.clone();

        let Some(url) = attachment.resolve_download_url(self.confluence.base_url()) else {
            warn!("Attachment '{}' has no download link", title);
            return Self::failure_caption(title);
        };

        match self.confluence.download(&url).await {
            Ok(bytes) => {
                let caption = self.vision.describe(&bytes).await;
                ImageCaption {
                    attachment_title: title,
                    caption,
                    failed: false,
                }
            }
            Err(e) => {
                error!("Error downloading image '{}': {}", title, e);
                Self::failure_caption(title)
            }
        }
    }

    fn failure_caption(title: String) -> ImageCaption {
        let caption = format!("Failed to analyze image '{}'.", title);
        ImageCaption {
            attachment_title: title,
            caption,
            failed: true,
        }
    }
}
