use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeFnError {
    /// Invalid relationship between order, sample count and control points.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A parameter value that falls outside the sampled domain.
    #[error("Lookup error: {0}")]
    Lookup(String),
}

impl ShapeFnError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}

pub type Result<T> = std::result::Result<T, ShapeFnError>;
