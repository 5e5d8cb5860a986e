//! The interactive query loop and its display formatting.

use newsgrep_core::{Article, TokenIndex};
use std::borrow::Cow;
use std::io::{self, Write};

/// How many matches one query displays at most.
pub const MAX_MATCHES_SHOWN: usize = 15;
const MAX_DISPLAY_CHARS: usize = 60;

/// Shorten `text` for display with a trailing `...` once it passes the
/// width cap. The index never truncates anything; this is display-only.
pub fn ellipsize(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= MAX_DISPLAY_CHARS {
        Cow::Borrowed(text)
    } else {
        let mut shortened: String = text.chars().take(MAX_DISPLAY_CHARS).collect();
        shortened.push_str("...");
        Cow::Owned(shortened)
    }
}

/// Render one query's result block, at most [`MAX_MATCHES_SHOWN`] entries.
pub fn render_matches(term: &str, matches: &[(Article, u32)]) -> String {
    if matches.is_empty() {
        return format!("Ah, we didn't find the term \"{term}\". Try again.");
    }
    let mut out = format!(
        "That term appears in {} article{}.  {}",
        matches.len(),
        if matches.len() == 1 { "" } else { "s" },
        if matches.len() > MAX_MATCHES_SHOWN {
            format!("Here are the top {MAX_MATCHES_SHOWN} of them:")
        } else {
            "Here they are:".to_string()
        }
    );
    for (rank, (article, count)) in matches.iter().take(MAX_MATCHES_SHOWN).enumerate() {
        let times = if *count == 1 { "time" } else { "times" };
        out.push_str(&format!(
            "\n  {:>2}.) \"{}\" [appears {count} {times}].\n       \"{}\"",
            rank + 1,
            ellipsize(&article.title),
            ellipsize(&article.url)
        ));
    }
    out
}

/// Prompt for search terms until an empty line (or EOF) ends the session.
pub fn run(index: &TokenIndex) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "Enter a search term [or just hit <enter> to quit]: ")?;
        stdout.flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let term = line.trim();
        if term.is_empty() {
            break;
        }
        println!("{}", render_matches(term, &index.matching(term)));
    }
    Ok(())
}
