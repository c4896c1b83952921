use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

/// Token standing for a clause or sentence break. N-grams never span it.
pub const BOUNDARY: &str = "|";

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t\f\v]").unwrap());
static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z \r\n\t\f\v]").unwrap());

/// Split text into lowercase words and [`BOUNDARY`] markers.
pub fn tokens(text: &str) -> Vec<String> {
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = NON_LETTERS.replace_all(&text, " | ");
    let lower = text.to_lowercase();
    lower.split_whitespace().map(String::from).collect()
}

/// All n-grams of `text` in order of appearance, words joined by a single space.
///
/// The window holds at most `n` words seen since the last boundary and emits
/// only when full, so segments shorter than `n` produce nothing.
pub fn ngrams(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    let mut window: VecDeque<String> = VecDeque::with_capacity(n);
    let mut out = Vec::new();
    for token in tokens(text) {
        if token == BOUNDARY {
            window.clear();
            continue;
        }
        window.push_back(token);
        if window.len() == n {
            out.push(window.iter().map(String::as_str).collect::<Vec<_>>().join(" "));
            window.pop_front();
        }
    }
    out
}
