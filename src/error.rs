//! Error types for depender operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for depender operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// singular covariance matrices, and invalid test or simulation parameters.
///
/// # Examples
///
/// ```
/// use depender::error::DependerError;
///
/// let err = DependerError::DimensionMismatch {
///     expected: "100 samples in x".to_string(),
///     actual: "50 samples in y".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum DependerError {
    /// Sample matrices or vectors have incompatible shapes for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Covariance matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (close to zero)
        det: f64,
    },

    /// Invalid test, simulation, or estimation parameter.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DependerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependerError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Sample dimension mismatch: expected {expected}, got {actual}"
                )
            }
            DependerError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            DependerError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            DependerError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DependerError {}

impl From<&str> for DependerError {
    fn from(msg: &str) -> Self {
        DependerError::Other(msg.to_string())
    }
}

impl From<String> for DependerError {
    fn from(msg: String) -> Self {
        DependerError::Other(msg)
    }
}

impl DependerError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid parameter error
    #[must_use]
    pub fn invalid_parameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for DependerError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<DependerError> for &str {
    fn eq(&self, other: &DependerError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DependerError>;
