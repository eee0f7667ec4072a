//! Affine matrix primitives.

/// A 2D affine transformation.
///
/// The matrix is represented as:
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
/// and maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMatrix {
    /// Scale X component.
    pub a: f64,
    /// Skew Y component.
    pub b: f64,
    /// Skew X component.
    pub c: f64,
    /// Scale Y component.
    pub d: f64,
    /// Translate X component.
    pub e: f64,
    /// Translate Y component.
    pub f: f64,
}

impl Default for RawMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RawMatrix {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Compose two transforms. `rhs` is applied first, then `self`.
    pub fn multiply(&self, rhs: &RawMatrix) -> RawMatrix {
        RawMatrix {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        self.is_finite() && det.is_finite() && det != 0.0
    }

    /// Invert the matrix, or `None` when it is singular or not finite.
    pub fn invert(&self) -> Option<RawMatrix> {
        if !self.is_invertible() {
            return None;
        }
        let det = self.determinant();
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(RawMatrix {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Transform a distance vector; translation does not apply.
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.a * dx + self.c * dy, self.b * dx + self.d * dy)
    }

    /// Bounding box of the image of an axis-aligned box.
    pub(crate) fn transform_bounding_box(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> (f64, f64, f64, f64) {
        let corners = [
            self.transform_point(x1, y1),
            self.transform_point(x2, y1),
            self.transform_point(x2, y2),
            self.transform_point(x1, y2),
        ];
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (x, y) in corners {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

impl From<RawMatrix> for tiny_skia::Transform {
    fn from(m: RawMatrix) -> Self {
        tiny_skia::Transform::from_row(
            m.a as f32, m.b as f32, m.c as f32, m.d as f32, m.e as f32, m.f as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_multiply_applies_rhs_first() {
        let t = RawMatrix::translation(10.0, 0.0);
        let s = RawMatrix::scaling(2.0, 2.0);
        // Scale first, then translate.
        assert_close(t.multiply(&s).transform_point(1.0, 1.0), (12.0, 2.0));
        // Translate first, then scale.
        assert_close(s.multiply(&t).transform_point(1.0, 1.0), (22.0, 2.0));
    }

    #[test]
    fn test_invert_round_trip() {
        let m = RawMatrix::rotation(0.7)
            .multiply(&RawMatrix::scaling(3.0, 0.5))
            .multiply(&RawMatrix::translation(-4.0, 9.0));
        let inv = m.invert().unwrap();
        let (x, y) = m.transform_point(12.5, -3.25);
        assert_close(inv.transform_point(x, y), (12.5, -3.25));
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        assert!(RawMatrix::scaling(0.0, 1.0).invert().is_none());
        assert!(RawMatrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0).invert().is_none());
        assert!(RawMatrix::translation(f64::NAN, 0.0).invert().is_none());
    }

    #[test]
    fn test_distance_ignores_translation() {
        let m = RawMatrix::translation(100.0, 100.0).multiply(&RawMatrix::scaling(2.0, 3.0));
        assert_close(m.transform_distance(1.0, 1.0), (2.0, 3.0));
    }

    #[test]
    fn test_transform_bounding_box_of_rotation() {
        let m = RawMatrix::rotation(std::f64::consts::FRAC_PI_2);
        let (x1, y1, x2, y2) = m.transform_bounding_box(0.0, 0.0, 2.0, 1.0);
        assert_close((x1, y1), (-1.0, 0.0));
        assert_close((x2, y2), (0.0, 2.0));
    }
}
