//! Release feed download and parsing

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::feed::index::FeedIndex;
use crate::feed::types::Feed;

pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Downloads the feed and indexes it
    pub async fn fetch(&self) -> Result<FeedIndex, FeedError> {
        info!("Checking for updates from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Feed returned status {}: {}", status, self.url);
            return Err(FeedError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().await?;
        let feed = parse_feed(&body)?;

        debug!("Feed lists {} products", feed.products.len());

        Ok(FeedIndex::new(feed))
    }
}

pub fn parse_feed(xml: &str) -> Result<Feed, FeedError> {
    quick_xml::de::from_str(xml).map_err(|e| {
        warn!("Failed to parse feed: {}", e);
        FeedError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<products>
  <product name="IntelliJ IDEA">
    <code>IC</code>
    <code>IU</code>
    <channel id="IC-IU-RELEASE-licensing-RELEASE" name="IntelliJ IDEA RELEASE" status="release" url="https://example.com" licensing="release">
      <build number="241.15989" version="2024.1.2" releaseDate="20240521" fullNumber="241.15989.150">
        <message><![CDATA[IntelliJ IDEA 2024.1.2 is available]]></message>
        <button name="Download" url="https://example.com/download" download="true"/>
        <patch from="241.14494" size="from 20 to 40"/>
      </build>
      <build number="241.14494" version="2024.1.1" fullNumber="241.14494.240"/>
    </channel>
    <channel id="IC-IU-EAP" name="IntelliJ IDEA EAP" status="eap" licensing="eap">
      <build number="242.10180" version="2024.2 EAP"/>
    </channel>
  </product>
  <product name="Retired Tool">
    <code>RT</code>
  </product>
</products>
"#;

    #[test]
    fn parse_feed_reads_products_channels_and_builds() {
        let feed = parse_feed(FEED).unwrap();

        assert_eq!(feed.products.len(), 2);

        let idea = &feed.products[0];
        assert_eq!(idea.name, "IntelliJ IDEA");
        assert_eq!(idea.codes, vec!["IC", "IU"]);
        assert_eq!(idea.channels.len(), 2);

        let release = &idea.channels[0];
        assert_eq!(release.name, "IntelliJ IDEA RELEASE");
        assert_eq!(release.status, "release");
        assert_eq!(release.builds.len(), 2);
        assert_eq!(release.builds[0].version, "2024.1.2");
        assert_eq!(release.builds[0].build_number(), "241.15989.150");
        assert_eq!(release.builds[0].release_date.as_deref(), Some("20240521"));

        let eap = &idea.channels[1];
        assert!(eap.is_eap());
        assert_eq!(eap.builds.len(), 1);
        assert_eq!(eap.builds[0].build_number(), "242.10180");

        assert!(feed.products[1].channels.is_empty());
    }

    #[test]
    fn parse_feed_rejects_malformed_document() {
        let result = parse_feed("<products><product name=\"x\"><channel></product>");

        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_returns_index_of_feed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/updates.xml")
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(FEED)
            .create_async()
            .await;

        let client = FeedClient::new(Client::new(), format!("{}/updates.xml", server.url()));
        let index = client.fetch().await.unwrap();

        mock.assert_async().await;
        assert!(index.by_product("IntelliJ IDEA").is_some());
        assert!(index.by_channel("IntelliJ IDEA EAP").is_some());
    }

    #[tokio::test]
    async fn fetch_fails_on_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/updates.xml")
            .with_status(503)
            .create_async()
            .await;

        let client = FeedClient::new(Client::new(), format!("{}/updates.xml", server.url()));
        let result = client.fetch().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FeedError::Status { status, .. }) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn fetch_handles_network_error() {
        let client = FeedClient::new(Client::new(), "http://invalid.localhost.test:99999/updates.xml");
        let result = client.fetch().await;

        assert!(matches!(result, Err(FeedError::Network(_))));
    }
}
