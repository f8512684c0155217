//! Free-text query interpretation: keyword tokens and an optional budget
//! ceiling extracted from the user message. Always succeeds.

/// Filler words never treated as search keywords, compared case-insensitively.
const STOP_WORDS: &[&str] = &[
    "what", "where", "best", "food", "have", "want", "with", "under", "for", "rupees", "price",
];

/// Tokens this short are noise ("a", "the", "rs").
const MIN_KEYWORD_LEN: usize = 4;

/// Digit runs at or below this value read as quantities ("3 people"), not
/// prices. Heuristic threshold, kept as a tunable constant.
pub const MIN_BUDGET_VALUE: i64 = 100;

#[derive(Debug, Clone, Default)]
pub struct ParsedQuery {
    /// Lowercased tokens, stop words and short tokens removed. Order follows
    /// the message; duplicates are not removed.
    pub keywords: Vec<String>,
    /// Inclusive price ceiling, from the first digit run worth more than
    /// `MIN_BUDGET_VALUE`.
    pub budget: Option<i64>,
}

pub fn parse_message(message: &str) -> ParsedQuery {
    let keywords = message
        .split_whitespace()
        .filter(|w| w.len() >= MIN_KEYWORD_LEN)
        .map(|w| w.to_lowercase())
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect();

    let digit_run = regex::Regex::new(r"\d+").expect("valid regex");
    let budget = digit_run
        .find(message)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|v| *v > MIN_BUDGET_VALUE);

    ParsedQuery { keywords, budget }
}
