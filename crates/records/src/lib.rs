mod error;
mod feed;
mod record;

pub use error::{RecordsError, Result};
pub use feed::parse_csv;
pub use record::{load_records, FieldMap, QARecord, RawRow};
