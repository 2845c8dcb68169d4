use thiserror::Error;

/// Rejected solver configuration. Raised by [`crate::DiffusionSolver::new`]
/// before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The stencil needs at least one interior cell per axis.
    #[error("grid must be at least 3x3, got {nx}x{ny}")]
    GridTooSmall { nx: usize, ny: usize },

    #[error("injection rate must be finite and >= 0, got {0}")]
    NegativeInjection(f64),

    #[error("dx must be finite and > 0, got {0}")]
    InvalidSpacing(f64),

    #[error("{name} must be finite and >= 0, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Injection-rate text that could not be turned into a usable rate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("`{text}` is not a number")]
    Parse { text: String },

    #[error("injection rate cannot be negative, got {0}")]
    Negative(f64),

    #[error("injection rate must be finite, got {0}")]
    NonFinite(f64),
}
