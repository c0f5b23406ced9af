use crate::fuzzy::subsequence_similarities;
use crate::normalize::{normalize, tokenize};
use crate::score::{token_similarity, whole_similarity};
use concierge_records::QARecord;
use serde::{Deserialize, Serialize};

/// Default acceptance threshold, matching the original widget's tuning.
/// Scores run 0 = identical to 1 = unrelated; a result is accepted when
/// `score <= threshold` (inclusive).
pub const DEFAULT_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchConfig {
    pub threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// One accepted match, produced transiently per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub record: QARecord,
    pub score: f64,
}

/// Read-only fuzzy index over the question field of a record snapshot.
///
/// `build` is the only constructor and the only step that computes state;
/// every `search` afterwards is a pure read, so the index can be queried
/// arbitrarily many times with identical results.
#[derive(Debug, Clone)]
pub struct QuestionIndex {
    records: Vec<QARecord>,
    questions: Vec<String>,
    normalized: Vec<String>,
    tokens: Vec<Vec<String>>,
    config: MatchConfig,
}

impl QuestionIndex {
    #[must_use]
    pub fn build(records: Vec<QARecord>, config: MatchConfig) -> Self {
        let questions: Vec<String> = records.iter().map(|r| r.question.clone()).collect();
        let normalized: Vec<String> = questions.iter().map(|q| normalize(q)).collect();
        let tokens: Vec<Vec<String>> = normalized.iter().map(|q| tokenize(q)).collect();

        log::debug!("built question index over {} records", records.len());
        Self {
            records,
            questions,
            normalized,
            tokens,
            config,
        }
    }

    /// Scores `query` against every indexed question and returns the
    /// accepted matches, best (lowest score) first. Ties keep feed
    /// insertion order. Empty or whitespace queries return no results.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        let query = query.trim();
        if query.is_empty() || self.records.is_empty() {
            return Vec::new();
        }

        let normalized_query = normalize(query);
        let query_tokens = tokenize(&normalized_query);
        let subsequence = subsequence_similarities(query, &self.questions);

        let mut results: Vec<MatchResult> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                let whole = whole_similarity(&normalized_query, &self.normalized[idx]);
                let tokens = token_similarity(&query_tokens, &self.tokens[idx]);
                let similarity = whole.max(tokens).max(subsequence[idx]);
                let score = 1.0 - similarity;

                (score <= self.config.threshold).then(|| MatchResult {
                    record: record.clone(),
                    score,
                })
            })
            .collect();

        // Stable sort: equal scores stay in insertion order.
        results.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));

        log::debug!(
            "query {query:?}: {} of {} questions accepted",
            results.len(),
            self.records.len()
        );
        results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[QARecord] {
        &self.records
    }

    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }
}
