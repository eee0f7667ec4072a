//! Fill, stroke, paint, clip and hit-testing operations for RawContext.

use super::RawContext;
use crate::abi;
use crate::drawing_state::ClipEntry;
use crate::matrix::RawMatrix;
use crate::status;
use tiny_skia::{FillRule, Mask, Paint, Path, PathStroker, Stroke, Transform};

/// What a render call covers.
enum Shape<'p> {
    /// A device-space path.
    Fill(&'p Path, FillRule),
    /// A user-space path stroked and mapped by the transform.
    Stroke(&'p Path, &'p Stroke, Transform),
    /// The whole target.
    Paint,
}

enum ClipMask {
    Unclipped,
    Empty,
    Mask(Mask),
}

impl RawContext {
    // --- Rendering ---

    /// Fill the current path and clear it.
    pub fn fill(&mut self) {
        if !self.is_ok() {
            return;
        }
        self.fill_preserve();
        self.path.clear();
    }

    /// Fill the current path with the current fill rule, keeping the path.
    pub fn fill_preserve(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "fill rule={}", self.state.fill_rule);
        let Some(path) = self.path.to_skia(&RawMatrix::identity()) else {
            return;
        };
        let rule = abi::skia_fill_rule(self.state.fill_rule);
        self.render(Shape::Fill(&path, rule), 1.0);
    }

    /// Stroke the current path and clear it.
    pub fn stroke(&mut self) {
        if !self.is_ok() {
            return;
        }
        self.stroke_preserve();
        self.path.clear();
    }

    /// Stroke the current path with the current line style, keeping the path.
    pub fn stroke_preserve(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "stroke width={}", self.state.line_width);
        if self.state.line_width <= 0.0 {
            return;
        }
        let Some(path) = self.user_path() else {
            return;
        };
        let stroke = self.state.skia_stroke();
        let transform: Transform = self.state.ctm.into();
        self.render(Shape::Stroke(&path, &stroke, transform), 1.0);
    }

    /// Paint the source everywhere inside the clip.
    pub fn paint(&mut self) {
        self.paint_with_alpha(1.0);
    }

    /// Paint the source everywhere inside the clip, scaled by `alpha`.
    pub fn paint_with_alpha(&mut self, alpha: f64) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "paint alpha={}", alpha);
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        self.render(Shape::Paint, alpha);
    }

    /// Fill device-space segments with the winding rule.
    pub(crate) fn fill_device_path(&mut self, path: &Path) {
        self.render(Shape::Fill(path, FillRule::Winding), 1.0);
    }

    fn render(&mut self, shape: Shape<'_>, alpha: f64) {
        if self.target.is_finished() {
            self.set_error(status::SURFACE_FINISHED);
            return;
        }
        // Copy surface sources out before the target is locked: a surface
        // may be drawn into itself.
        let snapshot = self.state.source.snapshot();
        let Some(shader) =
            self.state
                .source
                .shader(&self.state.source_ctm, alpha, snapshot.as_ref())
        else {
            log::debug!(target: "drawkit", "source paints nothing");
            return;
        };
        let paint = Paint {
            shader,
            blend_mode: abi::blend_mode(self.state.operator)
                .unwrap_or(tiny_skia::BlendMode::SourceOver),
            anti_alias: abi::is_anti_aliased(self.state.antialias),
            ..Default::default()
        };

        let mut pixmap = self.target.lock();
        let mask = match self.clip_mask(pixmap.width(), pixmap.height()) {
            ClipMask::Empty => return,
            ClipMask::Unclipped => None,
            ClipMask::Mask(mask) => Some(mask),
        };

        match shape {
            Shape::Fill(path, rule) => {
                pixmap.fill_path(path, &paint, rule, Transform::identity(), mask.as_ref());
            }
            Shape::Stroke(path, stroke, transform) => {
                pixmap.stroke_path(path, &paint, stroke, transform, mask.as_ref());
            }
            Shape::Paint => {
                let rect = tiny_skia::Rect::from_xywh(
                    0.0,
                    0.0,
                    pixmap.width() as f32,
                    pixmap.height() as f32,
                );
                if let Some(rect) = rect {
                    pixmap.fill_rect(rect, &paint, Transform::identity(), mask.as_ref());
                }
            }
        }
    }

    /// The current path mapped back into current user space.
    fn user_path(&self) -> Option<Path> {
        self.path.to_skia(&self.state.ctm_inverse)
    }

    // --- Clipping ---

    /// Intersect the clip with the current path and clear the path.
    pub fn clip(&mut self) {
        if !self.is_ok() {
            return;
        }
        self.clip_preserve();
        self.path.clear();
    }

    /// Intersect the clip with the current path, keeping the path.
    ///
    /// An empty path empties the clip region.
    pub fn clip_preserve(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "clip rule={}", self.state.fill_rule);
        let path = self.path.to_skia(&RawMatrix::identity());
        self.state.clip.push(ClipEntry {
            path,
            fill_rule: self.state.fill_rule,
        });
    }

    /// Remove all clipping from the current state.
    pub fn reset_clip(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "reset_clip");
        self.state.clip.clear();
    }

    /// Coverage of the clip region, further limited to the extent of a
    /// surface source that is not extended.
    fn clip_mask(&self, width: u32, height: u32) -> ClipMask {
        let extent = self.state.source.extent_path(&self.state.source_ctm);
        let entries = self
            .state
            .clip
            .iter()
            .map(|entry| (entry.path.as_ref(), entry.fill_rule))
            .chain(extent.as_ref().map(|path| (Some(path), abi::fill_rule::WINDING)));

        let mut combined: Option<Mask> = None;
        for (path, rule) in entries {
            let Some(path) = path else {
                return ClipMask::Empty;
            };
            let Some(mut mask) = Mask::new(width, height) else {
                return ClipMask::Empty;
            };
            mask.fill_path(
                path,
                abi::skia_fill_rule(rule),
                abi::is_anti_aliased(self.state.antialias),
                Transform::identity(),
            );
            combined = Some(match combined {
                None => mask,
                Some(mut acc) => {
                    for (a, b) in acc.data_mut().iter_mut().zip(mask.data()) {
                        *a = ((u16::from(*a) * u16::from(*b) + 127) / 255) as u8;
                    }
                    acc
                }
            });
        }
        match combined {
            None => ClipMask::Unclipped,
            Some(mask) => ClipMask::Mask(mask),
        }
    }

    /// Bounding box of the clip region in user space, as `(x1, y1, x2, y2)`.
    ///
    /// Without a clip this is the target extent; an empty region yields zeros.
    /// The result intersects the bounds of each clip path, so non-rectangular
    /// clips may report a larger box than the region they cover.
    pub fn clip_extents(&self) -> (f64, f64, f64, f64) {
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut x2 = f64::from(self.target.width());
        let mut y2 = f64::from(self.target.height());
        for entry in &self.state.clip {
            let Some(path) = &entry.path else {
                return (0.0, 0.0, 0.0, 0.0);
            };
            let bounds = path.bounds();
            x1 = f64::max(x1, f64::from(bounds.left()));
            y1 = f64::max(y1, f64::from(bounds.top()));
            x2 = f64::min(x2, f64::from(bounds.right()));
            y2 = f64::min(y2, f64::from(bounds.bottom()));
        }
        if x2 <= x1 || y2 <= y1 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        self.state.ctm_inverse.transform_bounding_box(x1, y1, x2, y2)
    }

    /// Whether the user-space point is inside the clip region.
    pub fn in_clip(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = self.user_to_device(x, y);
        self.state.clip.iter().all(|entry| {
            entry
                .path
                .as_ref()
                .is_some_and(|path| hit_test(path, abi::skia_fill_rule(entry.fill_rule), dx, dy))
        })
    }

    // --- Hit testing and extents ---

    /// Whether the user-space point would be painted by `fill`. The clip is ignored.
    pub fn in_fill(&self, x: f64, y: f64) -> bool {
        let Some(path) = self.path.to_skia(&RawMatrix::identity()) else {
            return false;
        };
        let (dx, dy) = self.user_to_device(x, y);
        hit_test(&path, abi::skia_fill_rule(self.state.fill_rule), dx, dy)
    }

    /// Whether the user-space point would be painted by `stroke`. The clip is ignored.
    pub fn in_stroke(&self, x: f64, y: f64) -> bool {
        match self.stroked_user_path() {
            Some(outline) => hit_test(&outline, FillRule::Winding, x, y),
            None => false,
        }
    }

    /// User-space bounds of the area `fill` would cover, ignoring the clip.
    pub fn fill_extents(&self) -> (f64, f64, f64, f64) {
        match self.path.bounds(&self.state.ctm_inverse) {
            Some((x1, y1, x2, y2)) if x2 > x1 && y2 > y1 => (x1, y1, x2, y2),
            _ => (0.0, 0.0, 0.0, 0.0),
        }
    }

    /// User-space bounds of the area `stroke` would cover, ignoring the clip.
    pub fn stroke_extents(&self) -> (f64, f64, f64, f64) {
        match self.stroked_user_path() {
            Some(outline) => {
                let b = outline.bounds();
                (
                    f64::from(b.left()),
                    f64::from(b.top()),
                    f64::from(b.right()),
                    f64::from(b.bottom()),
                )
            }
            None => (0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Outline of the stroke of the current path, in user space.
    fn stroked_user_path(&self) -> Option<Path> {
        if self.state.line_width <= 0.0 {
            return None;
        }
        let path = self.user_path()?;
        let transform: Transform = self.state.ctm.into();
        let resolution = PathStroker::compute_resolution_scale(&transform);
        path.stroke(&self.state.skia_stroke(), resolution)
    }
}

/// Whether `path` covers the point, sampled without anti-aliasing.
fn hit_test(path: &Path, rule: FillRule, x: f64, y: f64) -> bool {
    if !x.is_finite() || !y.is_finite() {
        return false;
    }
    let Some(mut mask) = Mask::new(1, 1) else {
        return false;
    };
    // Move the point onto the center of the single mask pixel.
    let transform = Transform::from_translate((0.5 - x) as f32, (0.5 - y) as f32);
    mask.fill_path(path, rule, false, transform);
    mask.data()[0] != 0
}
