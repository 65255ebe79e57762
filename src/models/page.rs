// file: src/models/page.rs
// description: Confluence page model deserialized from the content search API
// reference: https://developer.atlassian.com/cloud/confluence/rest/v1

use serde::{Deserialize, Serialize};

/// One page returned by the Confluence content search.
///
/// Pages are immutable for the duration of a pipeline run. Fields the
/// pipeline does not interpret (version, metadata) are carried as opaque
/// JSON so they survive round-trips.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub body: PageBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageBody {
    #[serde(default)]
    pub view: PageView,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageView {
    #[serde(default)]
    pub value: String,
}

fn default_title() -> String {
    "Untitled".to_string()
}

impl Page {
    /// Rendered HTML body, empty when the search response omitted it.
    pub fn body_html(&self) -> &str {
        &self.body.view.value
    }
}
