use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordsError>;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: usize, message: String },
}
