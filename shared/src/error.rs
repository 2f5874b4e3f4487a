use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised by the name pool itself.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolError {
    #[error("no name at position {index} (pool holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Reasons a spin request is turned down. The wheel state is untouched in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinRejected {
    #[error("Add at least one name first ✍️")]
    EmptyPool,
    #[error("The wheel is already spinning")]
    AlreadySpinning,
    #[error("Only the host can do that. Unlock first.")]
    Locked,
    #[error("Only one spin is allowed per device on this link.")]
    RateLimited,
}

/// Errors surfaced by the wheel's mutating operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelError {
    #[error(transparent)]
    Pool(PoolError),
    #[error(transparent)]
    Spin(SpinRejected),
    #[error("The name list cannot change while the wheel is spinning")]
    Spinning,
    #[error("Only the host can change the name list. Unlock first.")]
    Locked,
}

impl From<PoolError> for WheelError {
    fn from(err: PoolError) -> Self {
        WheelError::Pool(err)
    }
}

impl From<SpinRejected> for WheelError {
    fn from(err: SpinRejected) -> Self {
        WheelError::Spin(err)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockError {
    #[error("Enter your secret key.")]
    BlankKey,
    #[error("Wrong key. Try again.")]
    WrongKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_error_converts_into_wheel_error() {
        let err: WheelError = PoolError::OutOfRange { index: 3, len: 3 }.into();
        assert_eq!(err, WheelError::Pool(PoolError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(err.to_string(), "no name at position 3 (pool holds 3)");
    }

    #[test]
    fn test_spin_rejected_round_trips_through_json() {
        let json = serde_json::to_string(&SpinRejected::RateLimited).unwrap();
        let back: SpinRejected = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SpinRejected::RateLimited);
    }
}
