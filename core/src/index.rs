use parking_lot::Mutex;
use std::collections::HashMap;

use crate::article::Article;
use crate::tokenizer;

/// Thread-safe inverted index from token to per-article occurrence counts.
///
/// Writers from any number of threads call [`TokenIndex::add`]; one coarse
/// lock serializes merges, so no posting set is ever observed in a torn
/// state. The index is append-only: postings are never removed and counts
/// only grow.
#[derive(Default)]
pub struct TokenIndex {
    postings: Mutex<HashMap<String, HashMap<Article, u32>>>,
}

impl TokenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every token in `tokens` into the index as occurrences of
    /// `article`. Duplicate tokens accumulate, and repeated calls for the
    /// same article accumulate across calls.
    pub fn add(&self, article: &Article, tokens: &[String]) {
        if tokens.is_empty() {
            return;
        }
        // Count duplicates locally so the lock is held only over the merge.
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        let mut postings = self.postings.lock();
        for (token, occurrences) in counts {
            *postings
                .entry(token.to_string())
                .or_default()
                .entry(article.clone())
                .or_insert(0) += occurrences;
        }
    }

    /// Articles containing `query`, most frequent first; articles with equal
    /// counts are ordered by `(title, url)`. The query goes through the same
    /// normalization the tokenizer applies at ingest. An unknown term yields
    /// an empty vec.
    pub fn matching(&self, query: &str) -> Vec<(Article, u32)> {
        let Some(term) = tokenizer::normalize_term(query) else {
            return Vec::new();
        };
        let mut matches: Vec<(Article, u32)> = {
            let postings = self.postings.lock();
            match postings.get(&term) {
                Some(by_article) => by_article
                    .iter()
                    .map(|(article, &count)| (article.clone(), count))
                    .collect(),
                None => return Vec::new(),
            }
        };
        matches.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.cmp(b))
        });
        matches
    }

    /// Number of distinct tokens indexed so far.
    pub fn token_count(&self) -> usize {
        self.postings.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn unknown_token_matches_nothing() {
        let index = TokenIndex::new();
        index.add(&Article::new("t1", "u1"), &toks(&["alpha"]));
        assert!(index.matching("gamma").is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let index = TokenIndex::new();
        index.add(&Article::new("t1", "u1"), &toks(&["alpha"]));
        assert!(index.matching("").is_empty());
        assert!(index.matching("   ").is_empty());
    }

    #[test]
    fn token_count_is_distinct_tokens() {
        let index = TokenIndex::new();
        index.add(&Article::new("t1", "u1"), &toks(&["alpha", "beta", "alpha"]));
        assert_eq!(index.token_count(), 2);
    }
}
