use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("counter overflow: cannot increment past {value}")]
    Overflow { value: i64 },
}
