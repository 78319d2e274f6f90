//! The `Response` value every top-level operation returns.
//!
//! Core operations never call `std::process::exit`; an outer CLI layer
//! (out of scope here) decides what to do with the code and message.

use serde::Serialize;

/// Result of a top-level operation (`master_start`, `deploy`, ...).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Response {
    /// `0` on success, non-zero on failure.
    pub code: i32,
    /// Human-readable message, empty on a quiet success.
    pub message: String,
}

impl Response {
    /// Build a successful response with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }

    /// Build a failing response from an error's rendered message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: message.into(),
        }
    }

    /// True when `code == 0`.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl From<crate::errors::Error> for Response {
    fn from(err: crate::errors::Error) -> Self {
        Response::fail(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_code_zero() {
        let r = Response::success("ok");
        assert!(r.is_success());
        assert_eq!(r.code, 0);
    }

    #[test]
    fn fail_has_nonzero_code() {
        let r = Response::fail("bad");
        assert!(!r.is_success());
        assert_eq!(r.message, "bad");
    }
}
