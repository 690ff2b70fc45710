use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpeedError {
    #[error("time interval must be positive, got {elapsed_seconds}s")]
    NonPositiveInterval { elapsed_seconds: i64 },
    #[error("time interval between {from} and {to} does not fit in 64 bits")]
    IntervalOverflow { from: i64, to: i64 },
}
