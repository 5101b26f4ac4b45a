/// Absolute tolerance used when comparing sampled basis values.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance for value comparisons
    pub absolute: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
        }
    }

    /// Check if two values are equal within tolerance
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.absolute
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_partition_tolerance() {
        assert_eq!(Tolerance::default().absolute, 1e-9);
    }

    #[test]
    fn test_approx_eq() {
        let tol = Tolerance::default();
        assert!(tol.approx_eq(0.25 + 0.5 + 0.25, 1.0));
        assert!(!tol.approx_eq(0.75, 1.0));
        let loose = Tolerance { absolute: 1e-6 };
        assert!(loose.approx_eq(1.0 + 1e-7, 1.0));
        assert!(!tol.approx_eq(1.0 + 1e-7, 1.0));
    }
}
