// File: crates/linechart-core/src/error.rs
// Summary: Error type for configuration and chart setup failures.

use thiserror::Error;

/// Errors raised while configuring a chart. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Smoothing factor outside `(0, 0.5]`.
    #[error("invalid smooth size {0}: expected a value in (0, 0.5]")]
    InvalidSmoothSize(f32),

    /// Color string that is not `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    /// Non-finite or non-positive size.
    #[error("invalid {field}: {value}")]
    InvalidSize { field: &'static str, value: f32 },

    /// Malformed TOML config.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
