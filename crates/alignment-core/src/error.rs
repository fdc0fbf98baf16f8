//! Error types for Alignment Core
//!
//! Every failure here is a contract violation by the caller: a weight vector
//! with no mass, a state count that has no logarithm, or a sensitivity
//! parameter outside its domain. We use `thiserror` for the Display/Error
//! implementations.

use thiserror::Error;

/// Result type alias for alignment operations
pub type Result<T> = std::result::Result<T, AlignmentError>;

/// Main error type for alignment operations
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// The vector's total weight is zero, so it cannot be normalized
    #[error("Degenerate input: {label} has zero total weight")]
    DegenerateInput {
        /// Which vector was degenerate ("goals", "state", ...)
        label: String,
    },

    /// Every entry is finite but the total overflows
    #[error("Total weight of {label} overflows to a non-finite value")]
    NonFiniteTotal {
        /// Which vector (or outer product) overflowed
        label: String,
    },

    /// A single entry is negative or not finite
    #[error("Invalid weight in {label} at index {index}: {value}")]
    InvalidWeight {
        /// Which vector held the entry
        label: String,
        /// Position of the offending entry
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The number of system states must be positive
    #[error("State count must be positive, got {0}")]
    InvalidStateCount(i64),

    /// The sensitivity parameter must be finite and strictly positive
    #[error("Alpha must be finite and > 0.0, got {0}")]
    InvalidAlpha(f64),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// What was being attempted
        context: String,
        /// Underlying error
        source: Box<AlignmentError>,
    },
}

impl AlignmentError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Strip any context wrappers and return the underlying error
    pub fn root(&self) -> &AlignmentError {
        match self {
            Self::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<toml::de::Error> for AlignmentError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}
