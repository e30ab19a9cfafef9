use thiserror::Error;

#[derive(Debug, Error)]
pub enum TweenError {
    /// A non-finite bound makes every derived sample non-finite; rejected
    /// at construction, before any sink is installed.
    #[error("non-finite {field} value: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("batch has no entries")]
    EmptyBatch,
}
