#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Empty or whitespace-only text")]
    EmptyText,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),
}
