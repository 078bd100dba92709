use std::fmt;
use std::time::SystemTimeError;

#[derive(Debug)]
pub enum ClockError {
    /// The host clock reports a time before the Unix epoch.
    BeforeEpoch(SystemTimeError),
    /// The timestamp does not fit the supported calendar range.
    OutOfRange(u64),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::BeforeEpoch(e) => write!(f, "system clock is before the Unix epoch: {e}"),
            ClockError::OutOfRange(secs) => write!(f, "timestamp out of range: {secs}"),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::BeforeEpoch(e) => Some(e),
            ClockError::OutOfRange(_) => None,
        }
    }
}

impl From<SystemTimeError> for ClockError {
    fn from(e: SystemTimeError) -> Self {
        ClockError::BeforeEpoch(e)
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
