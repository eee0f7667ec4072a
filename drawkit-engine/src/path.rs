//! Current-path storage.
//!
//! Segments are stored in device space: every coordinate is transformed by
//! the CTM at the moment the path operation is issued.

use crate::matrix::RawMatrix;
use tiny_skia::PathBuilder;

/// One path element. Points are in the coordinate space of their container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    ClosePath,
}

impl PathSegment {
    /// Map every point of the segment through `m`.
    pub fn transformed(&self, m: &RawMatrix) -> PathSegment {
        match *self {
            PathSegment::MoveTo(x, y) => {
                let (x, y) = m.transform_point(x, y);
                PathSegment::MoveTo(x, y)
            }
            PathSegment::LineTo(x, y) => {
                let (x, y) = m.transform_point(x, y);
                PathSegment::LineTo(x, y)
            }
            PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => {
                let (x1, y1) = m.transform_point(x1, y1);
                let (x2, y2) = m.transform_point(x2, y2);
                let (x3, y3) = m.transform_point(x3, y3);
                PathSegment::CurveTo(x1, y1, x2, y2, x3, y3)
            }
            PathSegment::ClosePath => PathSegment::ClosePath,
        }
    }
}

/// Device-space path plus current point bookkeeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathData {
    segments: Vec<PathSegment>,
    /// Current point, present only after a path-extending operation.
    current: Option<(f64, f64)>,
    /// Start of the current sub-path, target of close_path.
    subpath_start: (f64, f64),
}

impl PathData {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.current = None;
    }

    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.current
    }

    /// Forget the current point but keep the segments.
    pub fn clear_current_point(&mut self) {
        self.current = None;
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        // Consecutive moves collapse into one.
        if let Some(PathSegment::MoveTo(..)) = self.segments.last() {
            self.segments.pop();
        }
        self.segments.push(PathSegment::MoveTo(x, y));
        self.current = Some((x, y));
        self.subpath_start = (x, y);
    }

    /// Line to a point; starts a sub-path instead when there is no current point.
    pub fn line_to(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x, y);
            return;
        }
        self.segments.push(PathSegment::LineTo(x, y));
        self.current = Some((x, y));
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        if self.current.is_none() {
            self.move_to(x1, y1);
        }
        self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x3, y3));
        self.current = Some((x3, y3));
    }

    /// Close the current sub-path. Without a current point this does nothing.
    pub fn close_path(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.segments.push(PathSegment::ClosePath);
        // The next segment starts from the sub-path origin.
        let (x, y) = self.subpath_start;
        self.segments.push(PathSegment::MoveTo(x, y));
        self.current = Some((x, y));
    }

    pub fn append(&mut self, segment: PathSegment) {
        match segment {
            PathSegment::MoveTo(x, y) => self.move_to(x, y),
            PathSegment::LineTo(x, y) => self.line_to(x, y),
            PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => self.curve_to(x1, y1, x2, y2, x3, y3),
            PathSegment::ClosePath => self.close_path(),
        }
    }

    /// Segments mapped through `m`, with the trailing move that close_path
    /// leaves behind removed.
    pub fn transformed_segments(&self, m: &RawMatrix) -> Vec<PathSegment> {
        let mut segments: Vec<PathSegment> =
            self.segments.iter().map(|s| s.transformed(m)).collect();
        if let Some(PathSegment::MoveTo(..)) = segments.last() {
            if segments.len() >= 2 && segments[segments.len() - 2] == PathSegment::ClosePath {
                segments.pop();
            }
        }
        segments
    }

    /// Build a tiny-skia path with every point mapped through `m`.
    pub fn to_skia(&self, m: &RawMatrix) -> Option<tiny_skia::Path> {
        build_skia_path(self.segments.iter().map(|s| s.transformed(m)))
    }

    /// Tight bounds of the path after mapping through `m`, as `(x1, y1, x2, y2)`.
    pub fn bounds(&self, m: &RawMatrix) -> Option<(f64, f64, f64, f64)> {
        let mut bounds = Bounds::default();
        let mut last = (0.0, 0.0);
        for segment in self.segments.iter().map(|s| s.transformed(m)) {
            match segment {
                PathSegment::MoveTo(x, y) => {
                    last = (x, y);
                }
                PathSegment::LineTo(x, y) => {
                    bounds.add(last.0, last.1);
                    bounds.add(x, y);
                    last = (x, y);
                }
                PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => {
                    bounds.add(last.0, last.1);
                    bounds.add(x3, y3);
                    for t in cubic_extrema(last.0, x1, x2, x3)
                        .into_iter()
                        .chain(cubic_extrema(last.1, y1, y2, y3))
                        .flatten()
                    {
                        let (x, y) = (
                            cubic_at(last.0, x1, x2, x3, t),
                            cubic_at(last.1, y1, y2, y3, t),
                        );
                        bounds.add(x, y);
                    }
                    last = (x3, y3);
                }
                PathSegment::ClosePath => {}
            }
        }
        bounds.finish()
    }
}

pub(crate) fn build_skia_path(
    segments: impl IntoIterator<Item = PathSegment>,
) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for segment in segments {
        match segment {
            PathSegment::MoveTo(x, y) => builder.move_to(x as f32, y as f32),
            PathSegment::LineTo(x, y) => builder.line_to(x as f32, y as f32),
            PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => builder.cubic_to(
                x1 as f32, y1 as f32, x2 as f32, y2 as f32, x3 as f32, y3 as f32,
            ),
            PathSegment::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[derive(Default)]
struct Bounds {
    extents: Option<(f64, f64, f64, f64)>,
}

impl Bounds {
    fn add(&mut self, x: f64, y: f64) {
        self.extents = Some(match self.extents {
            None => (x, y, x, y),
            Some((x1, y1, x2, y2)) => (x1.min(x), y1.min(y), x2.max(x), y2.max(y)),
        });
    }

    fn finish(self) -> Option<(f64, f64, f64, f64)> {
        self.extents
    }
}

fn cubic_at(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// Parameters in `(0, 1)` where a cubic's derivative vanishes.
fn cubic_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> [Option<f64>; 2] {
    // Derivative: 3(a t^2 + b t + c)
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;
    let in_range = |t: f64| (t > 0.0 && t < 1.0).then_some(t);

    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return [None, None];
        }
        return [in_range(-c / b), None];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let sqrt = disc.sqrt();
    [
        in_range((-b + sqrt) / (2.0 * a)),
        in_range((-b - sqrt) / (2.0 * a)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_to_without_current_point_moves() {
        let mut path = PathData::default();
        path.line_to(3.0, 4.0);
        assert_eq!(path.segments(), &[PathSegment::MoveTo(3.0, 4.0)]);
        assert_eq!(path.current_point(), Some((3.0, 4.0)));
    }

    #[test]
    fn test_close_path_returns_to_subpath_start() {
        let mut path = PathData::default();
        path.move_to(1.0, 1.0);
        path.line_to(5.0, 1.0);
        path.line_to(5.0, 5.0);
        path.close_path();
        assert_eq!(path.current_point(), Some((1.0, 1.0)));

        let copied = path.transformed_segments(&RawMatrix::identity());
        assert_eq!(copied.last(), Some(&PathSegment::ClosePath));
    }

    #[test]
    fn test_close_path_after_lone_move_is_recorded() {
        let mut path = PathData::default();
        path.move_to(2.0, 3.0);
        path.close_path();
        assert_eq!(path.current_point(), Some((2.0, 3.0)));
        assert_eq!(
            path.transformed_segments(&RawMatrix::identity()),
            vec![PathSegment::MoveTo(2.0, 3.0), PathSegment::ClosePath]
        );

        path.close_path();
        assert_eq!(
            path.transformed_segments(&RawMatrix::identity()),
            vec![
                PathSegment::MoveTo(2.0, 3.0),
                PathSegment::ClosePath,
                PathSegment::MoveTo(2.0, 3.0),
                PathSegment::ClosePath,
            ]
        );
    }

    #[test]
    fn test_close_path_without_current_point_is_noop() {
        let mut path = PathData::default();
        path.close_path();
        assert!(path.is_empty());
        assert_eq!(path.current_point(), None);
    }

    #[test]
    fn test_consecutive_moves_collapse() {
        let mut path = PathData::default();
        path.move_to(1.0, 1.0);
        path.move_to(2.0, 2.0);
        assert_eq!(path.segments(), &[PathSegment::MoveTo(2.0, 2.0)]);
    }

    #[test]
    fn test_curve_bounds_are_tight() {
        let mut path = PathData::default();
        path.move_to(0.0, 0.0);
        // Symmetric arch peaking at y = 75 (control points at y = 100).
        path.curve_to(0.0, 100.0, 100.0, 100.0, 100.0, 0.0);
        let (x1, y1, x2, y2) = path.bounds(&RawMatrix::identity()).unwrap();
        assert_eq!((x1, y1, x2), (0.0, 0.0, 100.0));
        assert!((y2 - 75.0).abs() < 1e-9, "y2 = {}", y2);
    }

    #[test]
    fn test_lone_move_has_no_bounds() {
        let mut path = PathData::default();
        path.move_to(4.0, 4.0);
        assert_eq!(path.bounds(&RawMatrix::identity()), None);
    }
}
