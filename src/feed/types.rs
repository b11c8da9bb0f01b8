//! Serde model of the release feed document
//!
//! Attribute fields keep their `@` prefix on both sides, so the JSON snapshot
//! mirrors the XML attribute names.

use serde::{Deserialize, Serialize};

/// Root `<products>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Feed {
    #[serde(rename = "product", default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "code", default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
    #[serde(rename = "channel", default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Channel {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@licensing", default, skip_serializing_if = "Option::is_none")]
    pub licensing: Option<String>,
    #[serde(rename = "@url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "build", default)]
    pub builds: Vec<Build>,
}

/// Status value marking a pre-release channel
pub const EAP_STATUS: &str = "eap";

impl Channel {
    pub fn is_eap(&self) -> bool {
        self.status == EAP_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Build {
    #[serde(rename = "@number")]
    pub number: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@fullNumber", default, skip_serializing_if = "Option::is_none")]
    pub full_number: Option<String>,
    #[serde(rename = "@releaseDate", default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl Build {
    /// The full build number when published, else the short one
    pub fn build_number(&self) -> &str {
        self.full_number.as_deref().unwrap_or(&self.number)
    }
}
