//! The seam between the pipeline and the network.

use anyhow::Result;
use async_trait::async_trait;
use newsgrep_core::Article;
use newsgrep_feeds::{html, rss, FeedHead};
use reqwest::Client;
use std::sync::Arc;

/// The three collaborators the ingestion pipeline consumes. One trait so
/// tests can script feeds and inject faults without touching the network.
#[async_trait]
pub trait NewsSource: Send + Sync + 'static {
    /// Resolve a feed-list URI into the feeds it names.
    async fn feed_list(&self, uri: &str) -> Result<Vec<FeedHead>>;

    /// Resolve one feed into the articles it references.
    async fn feed_articles(&self, feed_url: &str) -> Result<Vec<Article>>;

    /// Pull one article's HTML body and tokenize it.
    async fn article_tokens(&self, article_url: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: NewsSource + ?Sized> NewsSource for Arc<T> {
    async fn feed_list(&self, uri: &str) -> Result<Vec<FeedHead>> {
        (**self).feed_list(uri).await
    }

    async fn feed_articles(&self, feed_url: &str) -> Result<Vec<Article>> {
        (**self).feed_articles(feed_url).await
    }

    async fn article_tokens(&self, article_url: &str) -> Result<Vec<String>> {
        (**self).article_tokens(article_url).await
    }
}

/// The live implementation: RSS and HTML over a shared HTTP client.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: newsgrep_feeds::http_client()?,
        })
    }
}

#[async_trait]
impl NewsSource for HttpSource {
    async fn feed_list(&self, uri: &str) -> Result<Vec<FeedHead>> {
        rss::fetch_feed_list(&self.client, uri).await
    }

    async fn feed_articles(&self, feed_url: &str) -> Result<Vec<Article>> {
        rss::fetch_feed(&self.client, feed_url).await
    }

    async fn article_tokens(&self, article_url: &str) -> Result<Vec<String>> {
        html::fetch_article_tokens(&self.client, article_url).await
    }
}
