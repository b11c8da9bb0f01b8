//! Reachability checks for candidate download URLs

#[cfg(test)]
use mockall::automock;

use reqwest::Client;
use tracing::debug;

/// Answers whether a URL currently serves a resource
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Probe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}

/// Probe issuing a GET and discarding the body
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Probe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Probe {} returned {}", url, status);
                status.is_success()
            }
            Err(e) => {
                debug!("Probe {} failed: {}", url, e);
                false
            }
        }
    }
}
