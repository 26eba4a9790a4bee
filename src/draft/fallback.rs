//! Best-effort results for calls to third-party services.

use std::fmt::Display;

/// The value a best-effort call produced, tagged with whether it is the
/// real result or the fallback substituted after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort<T> {
    Ok(T),
    Fallback(T),
}

impl<T> BestEffort<T> {
    /// Keeps a successful value, or logs the failure and substitutes a fallback.
    pub fn attempt<E: Display>(
        result: Result<T, E>,
        operation: &str,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => {
                tracing::debug!(%error, operation, "call failed, using fallback");
                Self::Fallback(fallback())
            }
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Ok(value) | Self::Fallback(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_ok() {
        let result: BestEffort<i32> = BestEffort::attempt(Ok::<_, String>(1), "op", || 0);
        assert_eq!(result, BestEffort::Ok(1));
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_attempt_err_uses_fallback() {
        let result = BestEffort::attempt(Err::<i32, _>("boom"), "op", || 7);
        assert!(result.is_fallback());
        assert_eq!(result.into_inner(), 7);
    }
}
