use crate::error::Result;

/// Validate a value before any derived state is built from it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
