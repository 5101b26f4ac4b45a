use crate::Point2;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec2(1.0, 2.0), dvec2(3.0, 4.0), dvec2(5.0, 1.0), dvec2(9.0, 5.0)];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec2(1.0, 1.0));
        assert_eq!(aabb.max, dvec2(9.0, 5.0));
    }

    #[test]
    fn test_empty() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn test_merge() {
        let a = Aabb2::from_points(&[dvec2(0.0, 0.0), dvec2(1.0, 1.0)]).unwrap();
        let b = Aabb2::from_points(&[dvec2(-1.0, 0.5), dvec2(0.5, 3.0)]).unwrap();
        let m = a.merge(&b);
        assert_eq!(m.min, dvec2(-1.0, 0.0));
        assert_eq!(m.max, dvec2(1.0, 3.0));
    }
}
