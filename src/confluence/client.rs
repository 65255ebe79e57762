// file: src/confluence/client.rs
// description: Confluence REST client for content search, attachment listing, and binary download
// reference: https://developer.atlassian.com/cloud/confluence/rest/v1

use crate::config::ConfluenceConfig;
use crate::error::{PipelineError, Result};
use crate::models::{Attachment, Page};
use crate::utils::Validator;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct AttachmentResponse {
    #[serde(default)]
    results: Vec<Attachment>,
}

/// Authenticated client for the Confluence REST API.
///
/// Search and attachment listing swallow their own failures and return
/// empty sequences; the pipeline treats "nothing found" and "call failed"
/// identically. Downloads raise, because the enrichment coordinator turns
/// a failed download into a per-image failure caption.
#[derive(Clone)]
pub struct ConfluenceClient {
    client: Client,
    base_url: String,
    username: String,
    api_token: String,
    search_limit: usize,
}

impl ConfluenceClient {
    pub fn new(config: ConfluenceConfig, timeout_secs: u64, search_limit: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            api_token: config.api_token,
            search_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search pages matching the keyword via CQL. Error ⇒ empty sequence.
    pub async fn search(&self, keyword: &str) -> Vec<Page> {
        match self.try_search(keyword).await {
            Ok(pages) => pages,
            Err(e) => {
                error!("Error searching Confluence: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_search(&self, keyword: &str) -> Result<Vec<Page>> {
        let url = format!("{}/rest/api/content/search", self.base_url);
        // The keyword is escaped before being embedded in the CQL term so
        // quote characters cannot break out of the quoted string.
        let cql = format!("text ~ \"{}\"", Validator::sanitize_cql_term(keyword));
        let limit = self.search_limit.to_string();

        info!("Searching Confluence for '{}'", keyword);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .query(&[
                ("cql", cql.as_str()),
                ("limit", limit.as_str()),
                ("expand", "body.view,metadata,version"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: SearchResponse = response.json().await?;
        debug!("Search returned {} page(s)", data.results.len());
        Ok(data.results)
    }

    /// List the attachments of a page. Error ⇒ empty sequence.
    pub async fn attachments(&self, page_id: &str) -> Vec<Attachment> {
        match self.try_attachments(page_id).await {
            Ok(attachments) => attachments,
            Err(e) => {
                error!("Error retrieving attachments for page {}: {}", page_id, e);
                Vec::new()
            }
        }
    }

    async fn try_attachments(&self, page_id: &str) -> Result<Vec<Attachment>> {
        let url = format!(
            "{}/rest/api/content/{}/child/attachment",
            self.base_url, page_id
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?
            .error_for_status()?;

        let data: AttachmentResponse = response.json().await?;
        debug!(
            "Page {} has {} attachment(s)",
            page_id,
            data.results.len()
        );
        Ok(data.results)
    }

    /// Fetch raw bytes from a resolved download URL.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading attachment from {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::Download {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
