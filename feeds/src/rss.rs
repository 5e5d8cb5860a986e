//! RSS parsing for the two document shapes the aggregator consumes: a feed
//! list (items are feeds) and a feed (items are articles). Fetching and
//! parsing are split so parsing is testable on literal XML.

use anyhow::{Context, Result};
use feed_rs::parser;
use newsgrep_core::Article;
use reqwest::Client;

use crate::get_bytes;

/// One entry of a feed list: a feed's URL and its human-readable title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedHead {
    pub url: String,
    pub title: String,
}

/// Fetch a feed list and parse it into the feeds it names.
pub async fn fetch_feed_list(client: &Client, uri: &str) -> Result<Vec<FeedHead>> {
    let bytes = get_bytes(client, uri).await?;
    parse_feed_list(&bytes).with_context(|| format!("malformed feed list at \"{uri}\""))
}

/// Fetch one feed and parse it into the articles it references.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<Article>> {
    let bytes = get_bytes(client, url).await?;
    parse_feed(&bytes).with_context(|| format!("malformed feed at \"{url}\""))
}

/// Parse a feed-list document. Entries without a usable link are skipped;
/// a missing title falls back to the feed URL.
pub fn parse_feed_list(bytes: &[u8]) -> Result<Vec<FeedHead>> {
    let feed = parser::parse(bytes).context("unparseable RSS document")?;
    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let url = select_entry_link(&entry)?;
            let title = entry
                .title
                .map(|t| t.content)
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| url.clone());
            Some(FeedHead { url, title })
        })
        .collect())
}

/// Parse a feed document. Entries without a usable link are skipped; a
/// missing title falls back to the article URL so both identity fields are
/// always non-empty.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Article>> {
    let feed = parser::parse(bytes).context("unparseable RSS document")?;
    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let url = select_entry_link(&entry)?;
            let title = entry
                .title
                .map(|t| t.content)
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| url.clone());
            Some(Article::new(title, url))
        })
        .collect())
}

/// The entry's primary link: the first with no `rel` or `rel="alternate"`,
/// else the first non-empty one.
fn select_entry_link(entry: &feed_rs::model::Entry) -> Option<String> {
    for link in &entry.links {
        let href = link.href.trim();
        if href.is_empty() {
            continue;
        }
        let rel = link.rel.as_deref().unwrap_or("");
        if rel.is_empty() || rel.eq_ignore_ascii_case("alternate") {
            return Some(href.to_string());
        }
    }
    entry
        .links
        .iter()
        .map(|link| link.href.trim())
        .find(|href| !href.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_LIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>World News Feeds</title>
    <item>
      <title>Front Page</title>
      <link>http://news.example.com/rss/front.xml</link>
    </item>
    <item>
      <title>Business</title>
      <link>http://news.example.com/rss/business.xml</link>
    </item>
  </channel>
</rss>"#;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Front Page</title>
    <item>
      <title>Markets rally on rate cut</title>
      <link>http://news.example.com/story/markets</link>
    </item>
    <item>
      <title>Orphaned item with no link</title>
    </item>
    <item>
      <link>http://news.example.com/story/untitled</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn feed_list_yields_feed_heads_in_order() {
        let feeds = parse_feed_list(FEED_LIST.as_bytes()).unwrap();
        assert_eq!(
            feeds,
            vec![
                FeedHead {
                    url: "http://news.example.com/rss/front.xml".into(),
                    title: "Front Page".into(),
                },
                FeedHead {
                    url: "http://news.example.com/rss/business.xml".into(),
                    title: "Business".into(),
                },
            ]
        );
    }

    #[test]
    fn feed_yields_articles_and_skips_linkless_entries() {
        let articles = parse_feed(FEED.as_bytes()).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Markets rally on rate cut");
        assert_eq!(articles[0].url, "http://news.example.com/story/markets");
        // title falls back to the link, never empty
        assert_eq!(articles[1].title, "http://news.example.com/story/untitled");
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_feed(b"this is not xml").is_err());
        assert!(parse_feed_list(b"<html><body>nope</body></html>").is_err());
    }
}
