use newsgrep_core::{Article, TokenIndex};

fn toks(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn counts_accumulate_within_one_add() {
    let index = TokenIndex::new();
    let a1 = Article::new("t1", "u1");
    index.add(&a1, &toks(&["alpha", "beta", "alpha"]));

    assert_eq!(index.matching("alpha"), vec![(a1.clone(), 2)]);
    assert_eq!(index.matching("beta"), vec![(a1, 1)]);
    assert!(index.matching("gamma").is_empty());
}

#[test]
fn ranking_is_by_descending_count() {
    let index = TokenIndex::new();
    let a1 = Article::new("t1", "u1");
    let a2 = Article::new("t2", "u2");
    index.add(&a1, &toks(&["x", "x"]));
    index.add(&a2, &toks(&["x"]));

    assert_eq!(index.matching("x"), vec![(a1, 2), (a2, 1)]);
}

#[test]
fn same_article_merges_into_one_posting() {
    let index = TokenIndex::new();
    let a1 = Article::new("t1", "u1");
    index.add(&a1, &toks(&["k"]));
    index.add(&a1, &toks(&["k"]));

    assert_eq!(index.matching("k"), vec![(a1, 2)]);
}

#[test]
fn split_adds_equal_one_add() {
    let split = TokenIndex::new();
    let joined = TokenIndex::new();
    let article = Article::new("t1", "u1");

    split.add(&article, &toks(&["red", "blue", "red"]));
    split.add(&article, &toks(&["blue", "green"]));
    joined.add(&article, &toks(&["red", "blue", "red", "blue", "green"]));

    for term in ["red", "blue", "green"] {
        assert_eq!(split.matching(term), joined.matching(term));
    }
}

#[test]
fn ties_break_lexicographically_by_title_then_url() {
    let index = TokenIndex::new();
    let a = Article::new("apple", "u1");
    let b = Article::new("apple", "u2");
    let c = Article::new("banana", "u3");
    // insert out of order so the sort does the work
    index.add(&c, &toks(&["q"]));
    index.add(&b, &toks(&["q"]));
    index.add(&a, &toks(&["q"]));

    assert_eq!(index.matching("q"), vec![(a, 1), (b, 1), (c, 1)]);
}

#[test]
fn query_is_normalized_like_indexed_text() {
    let index = TokenIndex::new();
    let a1 = Article::new("t1", "u1");
    index.add(&a1, &toks(&["budget"]));

    assert_eq!(index.matching("Budget"), vec![(a1.clone(), 1)]);
    assert_eq!(index.matching("  budget  "), vec![(a1, 1)]);
}

#[test]
fn concurrent_adds_sum_exactly() {
    const WRITERS: usize = 8;
    const ROUNDS: usize = 100;

    let index = TokenIndex::new();
    std::thread::scope(|scope| {
        for writer in 0..WRITERS {
            let index = &index;
            scope.spawn(move || {
                let own = Article::new(format!("t{writer}"), format!("u{writer}"));
                let shared = Article::new("shared", "us");
                for _ in 0..ROUNDS {
                    index.add(&own, &toks(&["common", "common"]));
                    index.add(&shared, &toks(&["common"]));
                }
            });
        }
    });

    let matches = index.matching("common");
    assert_eq!(matches.len(), WRITERS + 1);
    let total: u64 = matches.iter().map(|(_, count)| u64::from(*count)).sum();
    // each writer contributes 2 per round to its own article and 1 to the shared one
    assert_eq!(total, (WRITERS * ROUNDS * 3) as u64);
    let shared_count = matches
        .iter()
        .find(|(article, _)| article.title == "shared")
        .map(|(_, count)| *count)
        .unwrap();
    assert_eq!(shared_count as usize, WRITERS * ROUNDS);
}
