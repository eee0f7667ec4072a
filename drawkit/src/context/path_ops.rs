//! Path construction and inspection.
//!
//! Coordinates are user-space values mapped through the CTM at call time;
//! changing the CTM afterwards does not move segments already added.

use super::{Context, Extents};
use crate::error::{Result, Status};
use drawkit_engine::PathSegment;

impl Context {
    /// Clear the current path and current point.
    pub fn new_path(&self) {
        self.write(|ctx| ctx.new_path());
    }

    /// Clear the current point only; earlier sub-paths are kept.
    pub fn new_sub_path(&self) {
        self.write(|ctx| ctx.new_sub_path());
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.write(|ctx| ctx.move_to(x, y));
    }

    /// Add a line to `(x, y)`. Without a current point this is a move.
    pub fn line_to(&self, x: f64, y: f64) {
        self.write(|ctx| ctx.line_to(x, y));
    }

    pub fn curve_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.write(|ctx| ctx.curve_to(x1, y1, x2, y2, x3, y3));
    }

    /// Move relative to the current point. Without one the context enters
    /// [`Status::NoCurrentPoint`].
    pub fn rel_move_to(&self, dx: f64, dy: f64) {
        self.write(|ctx| ctx.rel_move_to(dx, dy));
    }

    pub fn rel_line_to(&self, dx: f64, dy: f64) {
        self.write(|ctx| ctx.rel_line_to(dx, dy));
    }

    pub fn rel_curve_to(&self, dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx3: f64, dy3: f64) {
        self.write(|ctx| ctx.rel_curve_to(dx1, dy1, dx2, dy2, dx3, dy3));
    }

    /// Add a closed rectangle sub-path.
    pub fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) {
        self.write(|ctx| ctx.rectangle(x, y, width, height));
    }

    /// Close the current sub-path with a joined segment back to its start.
    pub fn close_path(&self) {
        self.write(|ctx| ctx.close_path());
    }

    /// Add a circular arc sweeping from `angle1` to `angle2` in increasing
    /// angle. `angle2` is advanced by full turns until it is not less than
    /// `angle1`. A line connects any current point to the arc start.
    pub fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.write(|ctx| ctx.arc(xc, yc, radius, angle1, angle2));
    }

    /// Like [`Context::arc`], sweeping in decreasing angle.
    pub fn arc_negative(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.write(|ctx| ctx.arc_negative(xc, yc, radius, angle1, angle2));
    }

    /// The current path in user space.
    pub fn copy_path(&self) -> Vec<PathSegment> {
        self.read(Vec::new(), |ctx| ctx.copy_path())
    }

    /// Append user-space segments to the current path.
    pub fn append_path(&self, segments: &[PathSegment]) {
        self.write(|ctx| ctx.append_path(segments));
    }

    pub fn has_current_point(&self) -> bool {
        self.read(false, |ctx| ctx.has_current_point())
    }

    /// The current point in user space.
    pub fn current_point(&self) -> Result<(f64, f64)> {
        self.read(Err(Status::NullHandle.into()), |ctx| {
            ctx.current_point()
                .ok_or_else(|| Status::NoCurrentPoint.into())
        })
    }

    /// Bounds of the current path in user space, ignoring line style.
    pub fn path_extents(&self) -> Extents {
        self.read(Extents::default(), |ctx| ctx.path_extents())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::tests::new_context;
    use crate::error::Status;
    use drawkit_engine::PathSegment;

    #[test]
    fn test_line_to_without_current_point_moves() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.line_to(3.0, 4.0);
        assert_eq!(ctx.copy_path(), vec![PathSegment::MoveTo(3.0, 4.0)]);
        assert_eq!(ctx.current_point().unwrap(), (3.0, 4.0));
    }

    #[test]
    fn test_relative_ops_need_current_point() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.rel_line_to(1.0, 1.0);
        assert_eq!(ctx.status(), Status::NoCurrentPoint);
        assert!(!ctx.has_current_point());
    }

    #[test]
    fn test_relative_ops() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.move_to(1.0, 1.0);
        ctx.rel_line_to(2.0, 0.0);
        ctx.rel_move_to(0.0, 3.0);
        ctx.rel_curve_to(1.0, 0.0, 1.0, 1.0, 0.0, 1.0);
        assert_eq!(ctx.current_point().unwrap(), (3.0, 5.0));
        assert_eq!(ctx.status(), Status::Success);
    }

    #[test]
    fn test_current_point_errors() {
        let (_surface, ctx) = new_context(10, 10);
        let err = ctx.current_point().unwrap_err();
        assert_eq!(err.status(), Some(Status::NoCurrentPoint));
        // Asking does not change the context status.
        assert_eq!(ctx.status(), Status::Success);

        ctx.close().unwrap();
        let err = ctx.current_point().unwrap_err();
        assert_eq!(err.status(), Some(Status::NullHandle));
    }

    #[test]
    fn test_rectangle_and_extents() {
        let (_surface, ctx) = new_context(100, 100);
        ctx.rectangle(10.0, 20.0, 30.0, 40.0);
        assert_eq!(
            ctx.copy_path(),
            vec![
                PathSegment::MoveTo(10.0, 20.0),
                PathSegment::LineTo(40.0, 20.0),
                PathSegment::LineTo(40.0, 60.0),
                PathSegment::LineTo(10.0, 60.0),
                PathSegment::ClosePath,
            ]
        );
        assert_eq!(ctx.path_extents(), (10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_new_sub_path_keeps_segments() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.move_to(0.0, 0.0);
        ctx.line_to(5.0, 5.0);
        ctx.new_sub_path();
        assert!(!ctx.has_current_point());
        assert_eq!(ctx.copy_path().len(), 2);
        ctx.new_path();
        assert!(ctx.copy_path().is_empty());
    }

    #[test]
    fn test_append_path() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.translate(1.0, 1.0);
        ctx.append_path(&[PathSegment::MoveTo(0.0, 0.0), PathSegment::LineTo(2.0, 0.0)]);
        ctx.identity_matrix();
        assert_eq!(
            ctx.copy_path(),
            vec![PathSegment::MoveTo(1.0, 1.0), PathSegment::LineTo(3.0, 1.0)]
        );
    }
}
