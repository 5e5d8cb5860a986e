//! The three-tier ingestion pipeline: the feed list fans out into feed
//! workers, each feed into article workers, and the article workers merge
//! what they tokenize into the shared index. Each tier joins all of its
//! children before finishing.

use anyhow::{Context, Result};
use newsgrep_core::{Article, TokenIndex};
use newsgrep_feeds::FeedHead;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::error;

use crate::limiter::{origin_of, OriginGates, OriginPermit};
use crate::query::ellipsize;
use crate::source::NewsSource;

/// How many feeds may be in the parsing stage at once.
pub const MAX_ACTIVE_FEEDS: usize = 8;
/// How many article fetches may be in flight process-wide.
pub const MAX_ACTIVE_FETCHES: usize = 64;
/// How many article fetches may be in flight against one origin server.
pub const MAX_FETCHES_PER_ORIGIN: usize = 12;

/// Everything the workers share, owned in one place: the index being
/// populated, the source collaborators, the two global gates, and the
/// per-origin limiter registry.
struct Ingest<S> {
    source: S,
    index: Arc<TokenIndex>,
    feed_gate: Arc<Semaphore>,
    fetch_gate: Arc<Semaphore>,
    origins: OriginGates,
}

/// Pull every article reachable from the feed list at `feed_list_uri` into a
/// fresh index, returning it once every spawned worker has finished. The
/// feed list failing is the single fatal error; a failed feed or article is
/// logged and contributes nothing.
pub async fn ingest<S: NewsSource>(source: S, feed_list_uri: &str) -> Result<Arc<TokenIndex>> {
    let feeds = source
        .feed_list(feed_list_uri)
        .await
        .with_context(|| format!("failed to pull the RSS feed list from \"{feed_list_uri}\""))?;

    let ingest = Arc::new(Ingest {
        source,
        index: Arc::new(TokenIndex::new()),
        feed_gate: Arc::new(Semaphore::new(MAX_ACTIVE_FEEDS)),
        fetch_gate: Arc::new(Semaphore::new(MAX_ACTIVE_FETCHES)),
        origins: OriginGates::new(MAX_FETCHES_PER_ORIGIN),
    });

    let mut workers = Vec::with_capacity(feeds.len());
    for feed in feeds {
        let slot = ingest
            .feed_gate
            .clone()
            .acquire_owned()
            .await
            .expect("feed gate never closes");
        workers.push(tokio::spawn(feed_worker(Arc::clone(&ingest), feed, slot)));
    }
    for worker in workers {
        let _ = worker.await;
    }
    Ok(Arc::clone(&ingest.index))
}

/// Parse one feed and fan out one article worker per article it names.
/// The feed-gate slot is given back as soon as the article list is parsed,
/// before the articles download, so the next feed can start parsing while
/// this feed's articles are still in flight.
async fn feed_worker<S: NewsSource>(
    ingest: Arc<Ingest<S>>,
    feed: FeedHead,
    slot: OwnedSemaphorePermit,
) {
    println!("Begin full download of feed URI: {}", feed.url);
    let articles = match ingest.source.feed_articles(&feed.url).await {
        Ok(articles) => articles,
        Err(err) => {
            error!(feed = %feed.url, error = %err, "failed to pull RSS feed; skipping it");
            return;
        }
    };
    drop(slot);

    let mut workers = Vec::with_capacity(articles.len());
    for article in articles {
        // Reserve the origin slot here in the parent; the child owns it from
        // the moment it starts until it exits.
        let origin_slot = ingest.origins.acquire(origin_of(&article.url)).await;
        workers.push(tokio::spawn(article_worker(
            Arc::clone(&ingest),
            article,
            origin_slot,
        )));
    }
    for worker in workers {
        let _ = worker.await;
    }
    println!("End full download of feed URI: {}", feed.url);
}

/// Fetch one article's body, tokenize it, and merge the result into the
/// index. Holds a fetch-gate slot for its whole run plus the origin slot its
/// parent reserved; both free themselves on every exit path.
async fn article_worker<S: NewsSource>(
    ingest: Arc<Ingest<S>>,
    article: Article,
    _origin_slot: OriginPermit,
) {
    let _active = ingest
        .fetch_gate
        .clone()
        .acquire_owned()
        .await
        .expect("fetch gate never closes");
    // one write so concurrent workers cannot interleave the pair
    println!(
        "  Parsing \"{}\"\n    [at \"{}\"]",
        ellipsize(&article.title),
        ellipsize(&article.url)
    );
    match ingest.source.article_tokens(&article.url).await {
        Ok(tokens) => ingest.index.add(&article, &tokens),
        Err(err) => {
            error!(article = %article.url, error = %err, "failed to pull article; skipping it");
        }
    }
}
