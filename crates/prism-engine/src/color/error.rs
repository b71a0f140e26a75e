use std::fmt;

/// Error produced when decoding a color from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a 6-digit hex color. Carries the rejected input.
    InvalidFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidFormat(input) => {
                write!(f, "invalid hex color {input:?}: expected 6 hex digits (#rrggbb)")
            }
        }
    }
}

impl std::error::Error for ColorError {}
