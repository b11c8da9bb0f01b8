//! Lookups over the parsed feed by product name and by channel name

use std::collections::BTreeSet;

use crate::feed::types::{Channel, Feed, Product};

/// A product together with the channels a lookup resolved to
///
/// Looking up a product name yields every channel of that product; looking up
/// a channel name yields the owning product restricted to that one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry<'a> {
    pub key: &'a str,
    pub product: &'a Product,
    pub channels: Vec<&'a Channel>,
}

pub struct FeedIndex {
    feed: Feed,
}

impl FeedIndex {
    pub fn new(feed: Feed) -> Self {
        Self { feed }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Products that expose at least one channel
    fn tracked_products(&self) -> impl Iterator<Item = &Product> {
        self.feed.products.iter().filter(|p| !p.channels.is_empty())
    }

    pub fn by_product(&self, name: &str) -> Option<IndexEntry<'_>> {
        // Like channels, a repeated product name resolves to the last entry
        self.tracked_products()
            .filter(|p| p.name == name)
            .last()
            .map(|product| IndexEntry {
                key: &product.name,
                product,
                channels: product.channels.iter().collect(),
            })
    }

    pub fn by_channel(&self, name: &str) -> Option<IndexEntry<'_>> {
        self.tracked_products()
            .flat_map(|product| product.channels.iter().map(move |c| (product, c)))
            .filter(|(_, channel)| channel.name == name)
            .last()
            .map(|(product, channel)| IndexEntry {
                key: &channel.name,
                product,
                channels: vec![channel],
            })
    }

    /// Resolves an `update-channel` value, product names taking precedence
    pub fn lookup(&self, name: &str) -> Option<IndexEntry<'_>> {
        self.by_product(name).or_else(|| self.by_channel(name))
    }

    /// Sorted, de-duplicated product and channel names
    pub fn available_keys(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self
            .tracked_products()
            .flat_map(|product| {
                std::iter::once(product.name.as_str())
                    .chain(product.channels.iter().map(|c| c.name.as_str()))
            })
            .collect();

        keys.into_iter().map(str::to_string).collect()
    }
}
