use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The feed has not finished loading: no index exists yet. Callers show
    /// a "still loading" message instead of the no-answer fallback.
    #[error("knowledge base is still loading, please wait")]
    NotReady,
}
