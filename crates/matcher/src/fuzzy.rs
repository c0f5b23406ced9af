use nucleo_matcher::{pattern::Pattern, Matcher, Utf32String};

/// Subsequence similarities of `query` against each question, in [0, 1].
///
/// Scores every question with a nucleo pattern and normalizes by the
/// pattern's score against the query itself, so an exact restatement of a
/// question scores 1.0. This signal rewards partial phrase containment
/// ("rsvp" inside "How do I RSVP?") that edit distance punishes.
pub(crate) fn subsequence_similarities(query: &str, questions: &[String]) -> Vec<f64> {
    let pattern = Pattern::parse(
        query,
        nucleo_matcher::pattern::CaseMatching::Smart,
        nucleo_matcher::pattern::Normalization::Smart,
    );
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let self_haystack = Utf32String::from(query);
    let self_score = pattern
        .score(self_haystack.slice(..), &mut matcher)
        .unwrap_or(0);
    if self_score == 0 {
        return vec![0.0; questions.len()];
    }

    questions
        .iter()
        .map(|question| {
            let haystack = Utf32String::from(question.as_str());
            match pattern.score(haystack.slice(..), &mut matcher) {
                // Longer haystacks can pick up boundary bonuses the query
                // itself lacks, so clamp.
                Some(score) => (f64::from(score) / f64::from(self_score)).min(1.0),
                None => 0.0,
            }
        })
        .collect()
}
