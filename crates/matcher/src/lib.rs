mod fuzzy;
mod index;
mod normalize;
mod score;

pub use index::{MatchConfig, MatchResult, QuestionIndex, DEFAULT_THRESHOLD};
pub use normalize::{normalize, tokenize};
