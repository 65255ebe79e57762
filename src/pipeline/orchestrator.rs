// file: src/pipeline/orchestrator.rs
// description: coordinates search, normalization, image enrichment, and summarization
// reference: orchestrates the knowledge summarization workflow

use crate::config::Config;
use crate::confluence::ConfluenceClient;
use crate::ai::{ChatClient, VisionClient};
use crate::error::Result;
use crate::parser::HtmlNormalizer;
use crate::pipeline::aggregator::CorpusBuilder;
use crate::pipeline::enrichment::EnrichmentCoordinator;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::pipeline::summarizer::Summarizer;
use tracing::{info, warn};

/// The knowledge summarization pipeline.
///
/// Pages are processed one at a time; only image enrichment within a page
/// runs concurrently. Every leaf swallows its own failures, so
/// `summarize_software` always returns a printable string.
pub struct SummarizePipeline {
    confluence: ConfluenceClient,
    normalizer: HtmlNormalizer,
    enrichment: EnrichmentCoordinator,
    summarizer: Summarizer,
}

impl SummarizePipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = config.pipeline.request_timeout_secs;

        let confluence = ConfluenceClient::new(
            config.confluence.clone(),
            timeout,
            config.pipeline.search_limit,
        )?;
        let vision = VisionClient::new(config.vision.clone(), timeout)?;
        let chat = ChatClient::new(config.openai.clone(), timeout)?;

        let enrichment = EnrichmentCoordinator::new(
            confluence.clone(),
            vision,
            config.pipeline.image_workers,
        );

        Ok(Self {
            confluence,
            normalizer: HtmlNormalizer::new(),
            enrichment,
            summarizer: Summarizer::new(chat),
        })
    }

    /// Search, enrich, aggregate, and summarize everything known about the
    /// given software or tool.
    pub async fn summarize_software(&self, keyword: &str) -> String {
        let pages = self.confluence.search(keyword).await;

        if pages.is_empty() {
            return format!("No Confluence pages found for '{}'.", keyword);
        }

        info!("Processing {} page(s)", pages.len());
        let progress = ProgressTracker::new(pages.len());
        let mut corpus = CorpusBuilder::new();

        for page in &pages {
            progress.set_message(format!("Processing '{}'", page.title));

            let text = self.normalizer.to_text(page.body_html());
            corpus.push_page(&page.title, &text);

            if page.id.is_empty() {
                warn!(
                    "Page '{}' has no id, skipping attachment lookup",
                    page.title
                );
                progress.inc_pages_processed();
                continue;
            }

            let attachments = self.confluence.attachments(&page.id).await;
            let captions = self.enrichment.describe_images(attachments).await;

            for caption in &captions {
                if caption.failed {
                    progress.inc_images_failed();
                } else {
                    progress.inc_images_captioned();
                }
                corpus.push_caption(&caption.attachment_title, &caption.caption);
            }

            progress.inc_pages_processed();
        }

        let stats = progress.get_stats();
        progress.finish();
        log_final_stats(&stats);

        info!("Sending combined content to the summarization service");
        self.summarizer.summarize(&corpus.build()).await
    }
}

fn log_final_stats(stats: &PipelineStats) {
    info!("=== Pipeline Execution Summary ===");
    info!("Duration: {} seconds", stats.duration_secs);
    info!("Pages processed: {}", stats.pages_processed);
    info!("Images captioned: {}", stats.images_captioned);
    info!("Images failed: {}", stats.images_failed);
    info!("Caption success rate: {:.2}%", stats.caption_success_rate());
    info!("=================================");
}
