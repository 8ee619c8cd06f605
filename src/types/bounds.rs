use serde::Serialize;

/// Axis-aligned bounding box in 3-D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Degenerate box around a single point.
    pub fn from_point(p: [f32; 3]) -> Self {
        Self { min: p, max: p }
    }

    /// Grow the box so it contains `p`.
    pub fn expand(&mut self, p: [f32; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p[axis]);
            self.max[axis] = self.max[axis].max(p[axis]);
        }
    }

    /// Centre point of the box.
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Half-extents along each axis.
    pub fn half_extents(&self) -> [f32; 3] {
        [
            (self.max[0] - self.min[0]) * 0.5,
            (self.max[1] - self.min[1]) * 0.5,
            (self.max[2] - self.min[2]) * 0.5,
        ]
    }

    /// Length of the space diagonal.
    pub fn diagonal(&self) -> f32 {
        let dx = self.max[0] - self.min[0];
        let dy = self.max[1] - self.min[1];
        let dz = self.max[2] - self.min[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether a point lies inside (or on the boundary of) the box.
    pub fn contains_point(&self, p: [f32; 3]) -> bool {
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }

    /// Return the smallest box that contains both `self` and `other`.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        let mut merged = *self;
        merged.expand(other.min);
        merged.expand(other.max);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox {
            min: [-1.0, -1.0, -1.0],
            max: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn center_and_extents() {
        let bb = BoundingBox {
            min: [0.0, 2.0, -4.0],
            max: [2.0, 6.0, 0.0],
        };
        assert_eq!(bb.center(), [1.0, 4.0, -2.0]);
        assert_eq!(bb.half_extents(), [1.0, 2.0, 2.0]);
        assert_relative_eq!(bb.diagonal(), 6.0);
    }

    #[test]
    fn expand_from_point() {
        let mut bb = BoundingBox::from_point([1.0, 1.0, 1.0]);
        bb.expand([-2.0, 3.0, 1.0]);
        assert_eq!(bb.min, [-2.0, 1.0, 1.0]);
        assert_eq!(bb.max, [1.0, 3.0, 1.0]);
    }

    #[test]
    fn contains_boundary_points() {
        let bb = unit_box();
        assert!(bb.contains_point([0.0, 0.0, 0.0]));
        assert!(bb.contains_point([1.0, -1.0, 1.0]));
        assert!(!bb.contains_point([1.01, 0.0, 0.0]));
    }

    #[test]
    fn merge_boxes() {
        let other = BoundingBox {
            min: [0.0, 0.0, -3.0],
            max: [4.0, 0.5, 0.0],
        };
        let merged = unit_box().merge(&other);
        assert_eq!(merged.min, [-1.0, -1.0, -3.0]);
        assert_eq!(merged.max, [4.0, 1.0, 1.0]);
    }
}
