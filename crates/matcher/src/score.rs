//! Lexical similarity signals over normalized text. Both return a
//! similarity in [0, 1] where 1.0 means identical.

/// Whole-string edit-distance similarity. Catches typos and small
/// phrasing drift across the full question.
pub(crate) fn whole_similarity(query: &str, question: &str) -> f64 {
    if query.is_empty() && question.is_empty() {
        return 1.0;
    }
    strsim::normalized_levenshtein(query, question)
}

/// Word-order-insensitive similarity: each query token is aligned with its
/// best-matching question token, and the alignment scores are averaged.
/// Averaging over the query keeps a single shared word from carrying an
/// otherwise unrelated query over the acceptance threshold.
pub(crate) fn token_similarity(query_tokens: &[String], question_tokens: &[String]) -> f64 {
    if query_tokens.is_empty() || question_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = query_tokens
        .iter()
        .map(|token| {
            question_tokens
                .iter()
                .map(|candidate| strsim::normalized_levenshtein(token, candidate))
                .fold(0.0_f64, f64::max)
        })
        .sum();

    total / query_tokens.len() as f64
}
