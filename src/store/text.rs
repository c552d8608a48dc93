//! # Text Matching
//!
//! Tokenizer and relevance scorer backing the in-memory engine's text
//! index over `title` and `content`.
//!
//! Matching is case-insensitive and term-oriented: a document matches a
//! query when any query term occurs in either field. The score is a
//! term-frequency sum, so documents mentioning more of the query terms
//! (or mentioning them more often) rank higher. Ranking is an engine
//! detail; callers only rely on "higher score = better match".

/// Split text into lowercase alphanumeric terms.
pub fn terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Relevance of a document against pre-tokenized query terms.
///
/// Returns 0.0 when no query term occurs in either field, which the
/// engine treats as "does not match".
pub fn score(query: &[String], title: &str, content: &str) -> f64 {
    if query.is_empty() {
        return 0.0;
    }

    let title_terms = terms(title);
    let content_terms = terms(content);

    let mut total = 0.0;
    for term in query {
        let in_title = title_terms.iter().filter(|t| *t == term).count();
        let in_content = content_terms.iter().filter(|t| *t == term).count();
        total += (in_title + in_content) as f64;
    }
    total
}
