// file: src/models/attachment.rs
// description: Confluence attachment model with image detection and link resolution
// reference: https://developer.atlassian.com/cloud/confluence/rest/v1

use serde::{Deserialize, Serialize};

/// Filename suffixes treated as image attachments.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "svg"];

/// One binary attachment of a Confluence page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Attachment {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "_links")]
    pub links: AttachmentLinks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AttachmentLinks {
    #[serde(default)]
    pub download: String,
}

impl Attachment {
    /// Whether the attachment filename carries one of the known image
    /// suffixes, compared case-insensitively.
    pub fn is_image(&self) -> bool {
        let name = self.title.to_ascii_lowercase();
        IMAGE_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
    }

    /// Resolve the download reference to an absolute URL.
    ///
    /// Absolute links pass through; relative links are joined onto the
    /// configured Confluence base URL. Returns `None` when the API gave
    /// no download link at all.
    pub fn resolve_download_url(&self, base_url: &str) -> Option<String> {
        let link = self.links.download.as_str();
        if link.is_empty() {
            return None;
        }
        if link.starts_with("http://") || link.starts_with("https://") {
            return Some(link.to_string());
        }
        let base = base_url.trim_end_matches('/');
        if link.starts_with('/') {
            Some(format!("{base}{link}"))
        } else {
            Some(format!("{base}/{link}"))
        }
    }
}
