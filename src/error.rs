//! Process-level error type shared by the library and the `si` binary.
//!
//! Exit-code conventions:
//!
//! - `2` — caller/input errors (bad CSV, mismatched parameter sets, invalid
//!   thresholds or grid options)
//! - `3` — empty input (no parameters / not enough draws to do anything)
//! - `4` — numeric failures (density fitting could not produce a usable model)
//!
//! Warnings are deliberately *not* errors here; non-fatal conditions travel as
//! [`crate::domain::Diagnostic`] values inside results.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
