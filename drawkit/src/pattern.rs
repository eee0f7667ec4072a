//! Paint sources.

use crate::enums::{Extend, PatternType};
use crate::error::Status;
use crate::matrix::Matrix;
use crate::surface::ImageSurface;
use drawkit_engine::{PatternKind, RawColor, RawPattern};
use std::sync::Arc;

/// A reference-counted paint source: a solid color, a gradient or a surface.
///
/// Clones share one pattern; changes to stops, extend mode or matrix are
/// seen through every handle, including a context using it as its source.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: Arc<RawPattern>,
}

impl Pattern {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Pattern {
        Self::rgba(red, green, blue, 1.0)
    }

    /// A solid color. Components are clamped to `0.0..=1.0`.
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Pattern {
        Pattern {
            raw: RawPattern::solid(RawColor::new(red, green, blue, alpha)),
        }
    }

    /// A linear gradient along `(x0, y0) -> (x1, y1)` in pattern space.
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Pattern {
        Pattern {
            raw: RawPattern::linear(x0, y0, x1, y1),
        }
    }

    /// A radial gradient between two circles in pattern space.
    pub fn radial(cx0: f64, cy0: f64, r0: f64, cx1: f64, cy1: f64, r1: f64) -> Pattern {
        Pattern {
            raw: RawPattern::radial(cx0, cy0, r0, cx1, cy1, r1),
        }
    }

    /// A pattern painting `surface`.
    pub fn for_surface(surface: &ImageSurface) -> Pattern {
        Pattern {
            raw: RawPattern::for_surface(Arc::clone(surface.raw())),
        }
    }

    pub(crate) fn from_raw(raw: Arc<RawPattern>) -> Self {
        Pattern { raw }
    }

    pub(crate) fn raw(&self) -> &Arc<RawPattern> {
        &self.raw
    }

    pub fn kind(&self) -> PatternType {
        PatternType::from_raw_or_default(self.raw.pattern_type())
    }

    pub fn status(&self) -> Status {
        Status::from_raw(self.raw.status())
    }

    /// The color of a solid pattern as `(red, green, blue, alpha)`.
    pub fn solid_rgba(&self) -> Option<(f64, f64, f64, f64)> {
        match self.raw.kind() {
            PatternKind::Solid(c) => Some((c.red, c.green, c.blue, c.alpha)),
            _ => None,
        }
    }

    /// The surface a surface pattern paints.
    pub fn surface(&self) -> Option<ImageSurface> {
        match self.raw.kind() {
            PatternKind::Surface(surface) => Some(ImageSurface::from_raw(Arc::clone(surface))),
            _ => None,
        }
    }

    pub fn add_color_stop_rgb(&self, offset: f64, red: f64, green: f64, blue: f64) {
        self.add_color_stop_rgba(offset, red, green, blue, 1.0);
    }

    /// Add a gradient stop. Other pattern kinds enter `PatternTypeMismatch`.
    pub fn add_color_stop_rgba(&self, offset: f64, red: f64, green: f64, blue: f64, alpha: f64) {
        self.raw
            .add_color_stop(offset, RawColor::new(red, green, blue, alpha));
    }

    pub fn color_stop_count(&self) -> usize {
        self.raw.color_stops().len()
    }

    /// Stop `index` as `(offset, red, green, blue, alpha)`.
    pub fn color_stop_rgba(&self, index: usize) -> Option<(f64, f64, f64, f64, f64)> {
        self.raw.color_stops().get(index).map(|stop| {
            let c = stop.color;
            (stop.offset, c.red, c.green, c.blue, c.alpha)
        })
    }

    pub fn set_extend(&self, extend: Extend) {
        self.raw.set_extend(extend.into_raw());
    }

    pub fn extend(&self) -> Extend {
        Extend::from_raw_or_default(self.raw.extend())
    }

    /// Set the user-space to pattern-space matrix. Non-invertible matrices
    /// enter `InvalidMatrix`.
    pub fn set_matrix(&self, matrix: &Matrix) {
        self.raw.set_matrix(matrix.raw());
    }

    pub fn matrix(&self) -> Matrix {
        self.raw.matrix().into()
    }

    /// Number of live handles to this pattern, including contexts using it
    /// as their source.
    pub fn reference_count(&self) -> usize {
        Arc::strong_count(&self.raw)
    }
}

impl PartialEq for Pattern {
    /// Handles are equal when they share one pattern.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.raw, &other.raw)
    }
}

impl Eq for Pattern {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Format;

    #[test]
    fn test_solid() {
        let p = Pattern::rgba(0.25, 0.5, 2.0, 0.75);
        assert_eq!(p.kind(), PatternType::Solid);
        assert_eq!(p.solid_rgba(), Some((0.25, 0.5, 1.0, 0.75)));
        assert_eq!(p.status(), Status::Success);
        assert!(p.surface().is_none());
    }

    #[test]
    fn test_gradient_stops() {
        let p = Pattern::linear(0.0, 0.0, 100.0, 0.0);
        p.add_color_stop_rgb(1.0, 0.0, 0.0, 1.0);
        p.add_color_stop_rgba(0.0, 1.0, 0.0, 0.0, 0.5);
        assert_eq!(p.color_stop_count(), 2);
        assert_eq!(p.color_stop_rgba(0), Some((0.0, 1.0, 0.0, 0.0, 0.5)));
        assert_eq!(p.color_stop_rgba(2), None);
        assert_eq!(p.extend(), Extend::Pad);
        assert!(p.solid_rgba().is_none());
    }

    #[test]
    fn test_stop_on_solid_is_mismatch() {
        let p = Pattern::rgb(0.0, 0.0, 0.0);
        p.add_color_stop_rgb(0.5, 1.0, 1.0, 1.0);
        assert_eq!(p.status(), Status::PatternTypeMismatch);
    }

    #[test]
    fn test_surface_pattern() {
        let surface = ImageSurface::create(Format::Argb32, 8, 8).unwrap();
        let p = Pattern::for_surface(&surface);
        assert_eq!(p.kind(), PatternType::Surface);
        assert_eq!(p.extend(), Extend::None);
        assert_eq!(p.surface(), Some(surface.clone()));
        // The pattern keeps its own reference to the surface.
        assert_eq!(surface.reference_count(), 2);
    }

    #[test]
    fn test_matrix_and_sharing() {
        let p = Pattern::radial(0.0, 0.0, 0.0, 10.0, 10.0, 5.0);
        let q = p.clone();
        assert_eq!(p.reference_count(), 2);
        q.set_matrix(&Matrix::scaling(2.0, 2.0));
        assert_eq!(p.matrix(), Matrix::scaling(2.0, 2.0));

        p.set_matrix(&Matrix::scaling(0.0, 2.0));
        assert_eq!(q.status(), Status::InvalidMatrix);
        assert_eq!(p.matrix(), Matrix::scaling(2.0, 2.0));
        drop(q);
        assert_eq!(p.reference_count(), 1);
    }
}
