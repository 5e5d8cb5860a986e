/// One news item, identified by its `(title, url)` pair.
///
/// Two articles are the same article exactly when both fields match; the
/// derived ordering compares titles first, then URLs, which is the order
/// ties are broken in when query results share a count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Article {
    pub title: String,
    pub url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
