use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tracked product of the versions file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRecord {
    /// Product or channel name to look up in the feed
    #[serde(rename = "update-channel")]
    pub update_channel: String,
    #[serde(rename = "url-template")]
    pub url_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Fields this tool does not manage, written back untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ProductRecord {
    pub fn new(update_channel: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            update_channel: update_channel.into(),
            url_template: url_template.into(),
            version: None,
            build_number: None,
            sha256: None,
            url: None,
            extra: IndexMap::new(),
        }
    }
}

/// Product name to record, in file order
pub type Products = IndexMap<String, ProductRecord>;
