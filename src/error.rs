//! Application error type.
//!
//! The rule engine itself never fails; `AppError` only covers the layers around
//! it (argument/config validation, terminal setup, output encoding). Each error
//! carries the process exit code `main` should return.

/// Exit code for invalid user input or configuration.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for runtime failures (terminal, output encoding).
pub const EXIT_RUNTIME: u8 = 4;

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

    /// An input that falls outside the displayed slider bounds under `--strict`.
    pub fn out_of_domain(field: &str, value: f64, bounds: (f64, f64)) -> Self {
        Self::new(
            EXIT_INVALID_INPUT,
            format!(
                "Out of domain: {field}={value} (expected a finite value in [{}, {}]).",
                bounds.0, bounds.1
            ),
        )
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
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
