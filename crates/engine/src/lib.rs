mod context;
mod decision;
mod error;

pub use context::{Concierge, FALLBACK_QUESTIONS, SUGGESTED_QUESTIONS};
pub use decision::Decision;
pub use error::{EngineError, Result};
