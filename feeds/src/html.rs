//! Article HTML fetching and tokenization.

use anyhow::{bail, Context, Result};
use newsgrep_core::tokenizer;
use reqwest::{header, Client};
use scraper::{Html, Selector};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Pull one article and tokenize its `<body>` text. Any failure (network,
/// HTTP status, wrong content type, oversized body) is an ordinary error the
/// caller absorbs; the article simply contributes no tokens.
pub async fn fetch_article_tokens(client: &Client, url: &str) -> Result<Vec<String>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to \"{url}\" failed"))?
        .error_for_status()
        .with_context(|| format!("request to \"{url}\" was refused"))?;
    if let Some(content_type) = resp.headers().get(header::CONTENT_TYPE) {
        if let Ok(value) = content_type.to_str() {
            if !value.starts_with("text/html") {
                bail!("article at \"{url}\" is not HTML (content type \"{value}\")");
            }
        }
    }
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("failed to read article body from \"{url}\""))?;
    if bytes.len() > MAX_BODY_BYTES {
        bail!("article at \"{url}\" exceeds {MAX_BODY_BYTES} bytes");
    }
    let body = String::from_utf8_lossy(&bytes);
    Ok(tokenize_html(&body))
}

/// Extract the text of the document's `<body>` and tokenize it. A document
/// without a body yields no tokens.
pub fn tokenize_html(html: &str) -> Vec<String> {
    let sel_body = Selector::parse("body").expect("valid selector");
    let doc = Html::parse_document(html);
    let text = doc
        .select(&sel_body)
        .next()
        .map(|node| node.text().collect::<String>())
        .unwrap_or_default();
    tokenizer::tokenize(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_text_is_tokenized() {
        let html = "<html><head><title>Skip me</title></head>\
                    <body><h1>Markets rally</h1><p>Stocks surged again.</p></body></html>";
        assert_eq!(tokenize_html(html), vec!["markets", "rally", "stocks", "surged"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(tokenize_html("").is_empty());
    }
}
