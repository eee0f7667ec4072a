//! Rendering, clipping and hit testing.

use super::{Context, Extents};

impl Context {
    // --- Rendering ---

    /// Fill the current path with the source, then clear the path.
    pub fn fill(&self) {
        self.write(|ctx| ctx.fill());
    }

    /// Fill the current path, keeping the path and current point.
    pub fn fill_preserve(&self) {
        self.write(|ctx| ctx.fill_preserve());
    }

    /// Stroke the current path with the line style, then clear the path.
    pub fn stroke(&self) {
        self.write(|ctx| ctx.stroke());
    }

    pub fn stroke_preserve(&self) {
        self.write(|ctx| ctx.stroke_preserve());
    }

    /// Paint the source everywhere inside the clip region.
    pub fn paint(&self) {
        self.write(|ctx| ctx.paint());
    }

    pub fn paint_with_alpha(&self, alpha: f64) {
        self.write(|ctx| ctx.paint_with_alpha(alpha));
    }

    // --- Clipping ---

    /// Intersect the clip region with the current path, then clear the path.
    pub fn clip(&self) {
        self.write(|ctx| ctx.clip());
    }

    pub fn clip_preserve(&self) {
        self.write(|ctx| ctx.clip_preserve());
    }

    /// Remove all clipping.
    pub fn reset_clip(&self) {
        self.write(|ctx| ctx.reset_clip());
    }

    /// Bounds of the clip region in user space. An empty region yields
    /// zeros; an unclipped context yields the target extent. Non-rectangular
    /// clips report the intersection of their bounding boxes.
    pub fn clip_extents(&self) -> Extents {
        self.read(Extents::default(), |ctx| ctx.clip_extents())
    }

    pub fn in_clip(&self, x: f64, y: f64) -> bool {
        self.read(false, |ctx| ctx.in_clip(x, y))
    }

    // --- Hit testing and extents ---

    /// Whether user-space `(x, y)` is inside the current path under the
    /// current fill rule. The clip is not considered.
    pub fn in_fill(&self, x: f64, y: f64) -> bool {
        self.read(false, |ctx| ctx.in_fill(x, y))
    }

    /// Whether user-space `(x, y)` is inside the area a stroke would cover.
    pub fn in_stroke(&self, x: f64, y: f64) -> bool {
        self.read(false, |ctx| ctx.in_stroke(x, y))
    }

    /// Bounds of the area a fill would cover, in user space.
    pub fn fill_extents(&self) -> Extents {
        self.read(Extents::default(), |ctx| ctx.fill_extents())
    }

    /// Bounds of the area a stroke would cover, in user space.
    pub fn stroke_extents(&self) -> Extents {
        self.read(Extents::default(), |ctx| ctx.stroke_extents())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::tests::new_context;
    use crate::enums::FillRule;
    use crate::error::Status;

    fn pixel(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn test_fill_clears_path() {
        let (surface, ctx) = new_context(20, 20);
        ctx.set_source_rgb(1.0, 0.0, 0.0);
        ctx.rectangle(5.0, 5.0, 10.0, 10.0);
        ctx.fill();
        assert!(!ctx.has_current_point());
        assert!(ctx.copy_path().is_empty());

        let data = surface.data();
        assert_eq!(pixel(&data, 20, 10, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&data, 20, 1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_preserve_keeps_current_point() {
        let (_surface, ctx) = new_context(20, 20);
        ctx.move_to(2.0, 2.0);
        ctx.line_to(18.0, 2.0);
        ctx.line_to(18.0, 18.0);
        ctx.fill_preserve();
        assert!(ctx.has_current_point());
        ctx.stroke_preserve();
        assert!(ctx.has_current_point());
        ctx.stroke();
        assert!(!ctx.has_current_point());
        assert_eq!(ctx.status(), Status::Success);
    }

    #[test]
    fn test_in_fill_follows_fill_rule() {
        let (_surface, ctx) = new_context(40, 40);
        ctx.rectangle(0.0, 0.0, 30.0, 30.0);
        ctx.rectangle(10.0, 10.0, 10.0, 10.0);
        assert!(ctx.in_fill(15.0, 15.0));
        ctx.set_fill_rule(FillRule::EvenOdd);
        assert!(!ctx.in_fill(15.0, 15.0));
        assert!(ctx.in_fill(5.0, 5.0));
        assert!(!ctx.in_fill(35.0, 35.0));
    }

    #[test]
    fn test_in_stroke_and_extents() {
        let (_surface, ctx) = new_context(40, 40);
        ctx.set_line_width(4.0);
        ctx.move_to(10.0, 20.0);
        ctx.line_to(30.0, 20.0);
        assert!(ctx.in_stroke(20.0, 21.0));
        assert!(!ctx.in_stroke(20.0, 25.0));
        let (x1, y1, x2, y2) = ctx.stroke_extents();
        assert!((x1 - 10.0).abs() < 1e-3 && (y1 - 18.0).abs() < 1e-3);
        assert!((x2 - 30.0).abs() < 1e-3 && (y2 - 22.0).abs() < 1e-3);
        assert_eq!(ctx.fill_extents(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_clip_limits_paint() {
        let (surface, ctx) = new_context(20, 20);
        assert_eq!(ctx.clip_extents(), (0.0, 0.0, 20.0, 20.0));
        ctx.rectangle(0.0, 0.0, 10.0, 20.0);
        ctx.clip();
        assert!(ctx.in_clip(5.0, 5.0));
        assert!(!ctx.in_clip(15.0, 5.0));
        assert_eq!(ctx.clip_extents(), (0.0, 0.0, 10.0, 20.0));

        ctx.set_source_rgb(0.0, 0.0, 1.0);
        ctx.paint();
        let data = surface.data();
        assert_eq!(pixel(&data, 20, 5, 5), [0, 0, 255, 255]);
        assert_eq!(pixel(&data, 20, 15, 5), [0, 0, 0, 0]);

        ctx.reset_clip();
        assert!(ctx.in_clip(15.0, 5.0));
    }

    #[test]
    fn test_clip_extents_of_triangle_is_its_bounding_box() {
        let (_surface, ctx) = new_context(40, 40);
        ctx.move_to(10.0, 10.0);
        ctx.line_to(30.0, 10.0);
        ctx.line_to(10.0, 30.0);
        ctx.close_path();
        ctx.clip();
        assert_eq!(ctx.clip_extents(), (10.0, 10.0, 30.0, 30.0));
        assert!(!ctx.in_clip(28.0, 28.0));
    }

    #[test]
    fn test_paint_with_alpha() {
        let (surface, ctx) = new_context(4, 4);
        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.paint_with_alpha(0.5);
        let alpha = pixel(&surface.data(), 4, 1, 1)[3];
        assert!((127..=128).contains(&alpha));
    }

    #[test]
    fn test_closed_queries() {
        let (_surface, ctx) = new_context(20, 20);
        ctx.rectangle(0.0, 0.0, 10.0, 10.0);
        ctx.close().unwrap();
        ctx.fill();
        assert!(!ctx.in_fill(5.0, 5.0));
        assert!(!ctx.in_clip(5.0, 5.0));
        assert_eq!(ctx.clip_extents(), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(ctx.path_extents(), (0.0, 0.0, 0.0, 0.0));
    }
}
