//! Path operations for RawContext.
//!
//! Coordinates are given in user space and stored in device space, using
//! the CTM current at the time of the call.

use super::RawContext;
use crate::arc;
use crate::path::PathSegment;
use crate::status;

impl RawContext {
    /// Discard the current path and current point.
    pub fn new_path(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "new_path");
        self.path.clear();
    }

    /// Start a new sub-path without a current point.
    pub fn new_sub_path(&mut self) {
        if !self.is_ok() {
            return;
        }
        self.path.clear_current_point();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        if !self.is_ok() {
            return;
        }
        let (x, y) = self.user_to_device(x, y);
        self.path.move_to(x, y);
    }

    /// Line to a point; without a current point this behaves as `move_to`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        if !self.is_ok() {
            return;
        }
        let (x, y) = self.user_to_device(x, y);
        self.path.line_to(x, y);
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        if !self.is_ok() {
            return;
        }
        let (x1, y1) = self.user_to_device(x1, y1);
        let (x2, y2) = self.user_to_device(x2, y2);
        let (x3, y3) = self.user_to_device(x3, y3);
        self.path.curve_to(x1, y1, x2, y2, x3, y3);
    }

    /// Device-space current point, or `NO_CURRENT_POINT`.
    fn require_current_point(&mut self) -> Option<(f64, f64)> {
        if !self.is_ok() {
            return None;
        }
        let current = self.path.current_point();
        if current.is_none() {
            self.set_error(status::NO_CURRENT_POINT);
        }
        current
    }

    fn offset(&self, base: (f64, f64), dx: f64, dy: f64) -> (f64, f64) {
        let (dx, dy) = self.user_to_device_distance(dx, dy);
        (base.0 + dx, base.1 + dy)
    }

    pub fn rel_move_to(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.require_current_point() else {
            return;
        };
        let (x, y) = self.offset(current, dx, dy);
        self.path.move_to(x, y);
    }

    pub fn rel_line_to(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.require_current_point() else {
            return;
        };
        let (x, y) = self.offset(current, dx, dy);
        self.path.line_to(x, y);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rel_curve_to(
        &mut self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    ) {
        let Some(current) = self.require_current_point() else {
            return;
        };
        let (x1, y1) = self.offset(current, dx1, dy1);
        let (x2, y2) = self.offset(current, dx2, dy2);
        let (x3, y3) = self.offset(current, dx3, dy3);
        self.path.curve_to(x1, y1, x2, y2, x3, y3);
    }

    /// Add a rectangle as a closed sub-path.
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if !self.is_ok() {
            return;
        }
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    /// Close the current sub-path. Without a current point this does nothing.
    pub fn close_path(&mut self) {
        if !self.is_ok() {
            return;
        }
        self.path.close_path();
    }

    /// Arc in the direction of increasing angle.
    pub fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.arc_path(xc, yc, radius, angle1, angle2, false);
    }

    /// Arc in the direction of decreasing angle.
    pub fn arc_negative(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.arc_path(xc, yc, radius, angle1, angle2, true);
    }

    fn arc_path(
        &mut self,
        xc: f64,
        yc: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
        negative: bool,
    ) {
        if !self.is_ok() {
            return;
        }
        log::debug!(
            target: "drawkit",
            "arc ({}, {}) r={} {}..{} negative={}",
            xc,
            yc,
            radius,
            angle1,
            angle2,
            negative
        );
        if radius <= 0.0 {
            self.line_to(xc, yc);
            return;
        }
        let Some(arc) = arc::arc(xc, yc, radius, angle1, angle2, negative) else {
            log::warn!(target: "drawkit", "arc with non-finite arguments ignored");
            return;
        };
        // Connect from any current point to the arc start.
        self.line_to(arc.start.0, arc.start.1);
        let ctm = self.state.ctm;
        for segment in arc.curves {
            self.path.append(segment.transformed(&ctm));
        }
    }

    /// The current path in user space.
    pub fn copy_path(&self) -> Vec<PathSegment> {
        self.path.transformed_segments(&self.state.ctm_inverse)
    }

    /// Append user-space segments to the current path.
    pub fn append_path(&mut self, segments: &[PathSegment]) {
        if !self.is_ok() {
            return;
        }
        let ctm = self.state.ctm;
        for segment in segments {
            self.path.append(segment.transformed(&ctm));
        }
    }

    pub fn has_current_point(&self) -> bool {
        self.path.current_point().is_some()
    }

    /// Current point in user space.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.path
            .current_point()
            .map(|(x, y)| self.device_to_user(x, y))
    }

    /// Bounding box of the current path in user space, as `(x1, y1, x2, y2)`.
    /// An empty path yields zeros.
    pub fn path_extents(&self) -> (f64, f64, f64, f64) {
        self.path
            .bounds(&self.state.ctm_inverse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::context::tests::new_context;
    use crate::path::PathSegment;
    use crate::status;
    use std::f64::consts::PI;

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_current_point_in_user_space() {
        let mut ctx = new_context(100, 100);
        assert!(!ctx.has_current_point());
        ctx.translate(10.0, 10.0);
        ctx.move_to(5.0, 5.0);
        assert_eq!(ctx.current_point(), Some((5.0, 5.0)));

        // The stored point stays put when user space changes.
        ctx.translate(5.0, 0.0);
        assert_eq!(ctx.current_point(), Some((0.0, 5.0)));
    }

    #[test]
    fn test_relative_ops_need_current_point() {
        let mut ctx = new_context(100, 100);
        ctx.rel_line_to(1.0, 1.0);
        assert_eq!(ctx.status(), status::NO_CURRENT_POINT);
        assert!(!ctx.has_current_point());
    }

    #[test]
    fn test_relative_offsets_are_distance_transformed() {
        let mut ctx = new_context(100, 100);
        ctx.scale(2.0, 2.0);
        ctx.move_to(1.0, 1.0);
        ctx.rel_line_to(3.0, 4.0);
        assert_close(ctx.current_point().unwrap(), (4.0, 5.0));
        assert_close(ctx.user_to_device(4.0, 5.0), (8.0, 10.0));
    }

    #[test]
    fn test_rectangle_is_closed_subpath() {
        let mut ctx = new_context(100, 100);
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
        assert_eq!(ctx.current_point(), Some((10.0, 20.0)));
        assert_eq!(ctx.path_extents(), (10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_new_sub_path_keeps_segments() {
        let mut ctx = new_context(100, 100);
        ctx.move_to(0.0, 0.0);
        ctx.line_to(10.0, 0.0);
        ctx.new_sub_path();
        assert!(!ctx.has_current_point());
        assert_eq!(ctx.copy_path().len(), 2);
        ctx.new_path();
        assert!(ctx.copy_path().is_empty());
        assert_eq!(ctx.path_extents(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_arc_connects_from_current_point() {
        let mut ctx = new_context(100, 100);
        ctx.move_to(0.0, 0.0);
        ctx.arc(50.0, 50.0, 10.0, 0.0, PI);
        let path = ctx.copy_path();
        assert_eq!(path[0], PathSegment::MoveTo(0.0, 0.0));
        assert_eq!(path[1], PathSegment::LineTo(60.0, 50.0));
        assert_eq!(path.len(), 4);
        assert_close(ctx.current_point().unwrap(), (40.0, 50.0));
    }

    #[test]
    fn test_arc_without_current_point_starts_subpath() {
        let mut ctx = new_context(100, 100);
        ctx.arc_negative(0.0, 0.0, 1.0, 0.0, -PI / 2.0);
        let path = ctx.copy_path();
        assert_eq!(path[0], PathSegment::MoveTo(1.0, 0.0));
        assert_eq!(path.len(), 2);
        assert_close(ctx.current_point().unwrap(), (0.0, -1.0));
    }

    #[test]
    fn test_zero_radius_arc_is_line_to_center() {
        let mut ctx = new_context(100, 100);
        ctx.move_to(1.0, 1.0);
        ctx.arc(5.0, 5.0, 0.0, 0.0, PI);
        assert_eq!(
            ctx.copy_path(),
            vec![PathSegment::MoveTo(1.0, 1.0), PathSegment::LineTo(5.0, 5.0)]
        );
    }

    #[test]
    fn test_append_path_round_trip() {
        let mut ctx = new_context(100, 100);
        ctx.scale(2.0, 2.0);
        ctx.move_to(1.0, 2.0);
        ctx.curve_to(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
        let copied = ctx.copy_path();
        ctx.new_path();
        ctx.append_path(&copied);
        assert_eq!(ctx.copy_path(), copied);
    }
}
