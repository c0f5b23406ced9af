use concierge_router::KeywordRoute;
use serde::{Deserialize, Serialize};

/// The per-query output: an optional answer, an optional navigation hint,
/// or neither. `matched` is false only when both are absent; that is the
/// caller's cue to present the "I don't know" fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub answer_text: Option<String>,
    pub route: Option<KeywordRoute>,
    pub matched: bool,
}

impl Decision {
    pub(crate) fn unknown() -> Self {
        Self {
            answer_text: None,
            route: None,
            matched: false,
        }
    }
}
