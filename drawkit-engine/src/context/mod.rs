//! The drawing context: engine-resident graphics state bound to a target.

mod drawing;
mod path_ops;
mod text;
mod transform;

use crate::abi;
use crate::drawing_state::DrawingState;
use crate::font::{FontLibrary, RawFontFace};
use crate::matrix::RawMatrix;
use crate::path::PathData;
use crate::pattern::{RawColor, RawPattern};
use crate::status;
use crate::surface::RawSurface;
use std::sync::Arc;

/// A drawing context.
///
/// Every operation is infallible at the call site. The first failure is
/// recorded in [`RawContext::status`] and every later operation does
/// nothing; queries keep answering from the state reached before the error.
pub struct RawContext {
    /// Surface this context draws into.
    pub(crate) target: Arc<RawSurface>,
    /// Fonts available to text operations.
    pub(crate) fonts: FontLibrary,
    /// Current graphics state.
    pub(crate) state: DrawingState,
    /// Stack of saved graphics states.
    state_stack: Vec<DrawingState>,
    /// Current path, in device space.
    pub(crate) path: PathData,
    status: i32,
}

impl RawContext {
    /// Create a context for `target` using the default font library.
    ///
    /// Creation never fails outright: check [`RawContext::status`] on the
    /// returned context.
    pub fn create(target: &Arc<RawSurface>) -> Box<RawContext> {
        Self::create_with_fonts(target, &FontLibrary::default_library())
    }

    /// Create a context for `target` drawing text with `fonts`.
    pub fn create_with_fonts(target: &Arc<RawSurface>, fonts: &FontLibrary) -> Box<RawContext> {
        let mut ctx = Box::new(RawContext {
            target: Arc::clone(target),
            fonts: fonts.clone(),
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path: PathData::default(),
            status: status::SUCCESS,
        });
        if target.is_finished() {
            ctx.set_error(status::SURFACE_FINISHED);
        }
        log::debug!(
            target: "drawkit",
            "create context {}x{} status={}",
            target.width(),
            target.height(),
            ctx.status
        );
        ctx
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub(crate) fn is_ok(&self) -> bool {
        self.status == status::SUCCESS
    }

    /// Record `code` unless an earlier error is already recorded.
    pub(crate) fn set_error(&mut self, code: i32) {
        if self.status == status::SUCCESS && code != status::SUCCESS {
            log::warn!(target: "drawkit", "context error: {}", status::to_str(code));
            self.status = code;
        }
    }

    pub fn target(&self) -> Arc<RawSurface> {
        Arc::clone(&self.target)
    }

    /// Number of states currently saved.
    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Save the current graphics state.
    pub fn save(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "save depth={}", self.state_stack.len() + 1);
        self.state_stack.push(self.state.clone());
    }

    /// Restore the most recently saved graphics state.
    pub fn restore(&mut self) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "restore depth={}", self.state_stack.len());
        match self.state_stack.pop() {
            Some(state) => self.state = state,
            None => self.set_error(status::INVALID_RESTORE),
        }
    }

    // --- Line and fill state ---

    /// Set the line width. Negative widths clamp to zero; non-finite widths
    /// are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if !self.is_ok() || !width.is_finite() {
            return;
        }
        self.state.line_width = width.max(0.0);
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    pub fn set_line_cap(&mut self, cap: i32) {
        if !self.is_ok() {
            return;
        }
        if !abi::is_valid_line_cap(cap) {
            self.set_error(status::INVALID_CONTENT);
            return;
        }
        self.state.line_cap = cap;
    }

    pub fn line_cap(&self) -> i32 {
        self.state.line_cap
    }

    pub fn set_line_join(&mut self, join: i32) {
        if !self.is_ok() {
            return;
        }
        if !abi::is_valid_line_join(join) {
            self.set_error(status::INVALID_CONTENT);
            return;
        }
        self.state.line_join = join;
    }

    pub fn line_join(&self) -> i32 {
        self.state.line_join
    }

    /// Set the miter limit. Non-finite values are ignored.
    pub fn set_miter_limit(&mut self, limit: f64) {
        if !self.is_ok() || !limit.is_finite() {
            return;
        }
        self.state.miter_limit = limit;
    }

    pub fn miter_limit(&self) -> f64 {
        self.state.miter_limit
    }

    /// Set the dash pattern. An empty pattern turns dashing off.
    ///
    /// Negative or non-finite entries, a pattern of zeros and a non-finite
    /// offset set `INVALID_DASH`.
    pub fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        if !self.is_ok() {
            return;
        }
        let invalid_entry = dashes.iter().any(|&v| !v.is_finite() || v < 0.0);
        let all_zero = !dashes.is_empty() && dashes.iter().all(|&v| v == 0.0);
        if invalid_entry || all_zero || !offset.is_finite() {
            self.set_error(status::INVALID_DASH);
            return;
        }
        log::debug!(target: "drawkit", "set_dash {:?} offset={}", dashes, offset);
        self.state.dash = dashes.to_vec();
        self.state.dash_offset = if dashes.is_empty() { 0.0 } else { offset };
    }

    pub fn dash(&self) -> (&[f64], f64) {
        (&self.state.dash, self.state.dash_offset)
    }

    pub fn dash_count(&self) -> usize {
        self.state.dash.len()
    }

    pub fn set_fill_rule(&mut self, rule: i32) {
        if !self.is_ok() {
            return;
        }
        if !abi::is_valid_fill_rule(rule) {
            self.set_error(status::INVALID_CONTENT);
            return;
        }
        self.state.fill_rule = rule;
    }

    pub fn fill_rule(&self) -> i32 {
        self.state.fill_rule
    }

    pub fn set_operator(&mut self, op: i32) {
        if !self.is_ok() {
            return;
        }
        if !abi::is_valid_operator(op) {
            self.set_error(status::INVALID_CONTENT);
            return;
        }
        if op == abi::operator::SATURATE {
            log::warn!(target: "drawkit", "SATURATE operator approximated by ADD");
        }
        self.state.operator = op;
    }

    pub fn operator(&self) -> i32 {
        self.state.operator
    }

    pub fn set_antialias(&mut self, mode: i32) {
        if !self.is_ok() {
            return;
        }
        if !abi::is_valid_antialias(mode) {
            self.set_error(status::INVALID_CONTENT);
            return;
        }
        self.state.antialias = mode;
    }

    pub fn antialias(&self) -> i32 {
        self.state.antialias
    }

    // --- Source ---

    pub fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        if !self.is_ok() {
            return;
        }
        self.state.source = RawPattern::solid(RawColor::new(red, green, blue, alpha));
        self.state.source_ctm = self.state.ctm;
    }

    /// Use `pattern` as the source. The pattern is locked to the current CTM.
    pub fn set_source(&mut self, pattern: &Arc<RawPattern>) {
        if !self.is_ok() {
            return;
        }
        let pattern_status = pattern.status();
        if pattern_status != status::SUCCESS {
            self.set_error(pattern_status);
            return;
        }
        self.state.source = Arc::clone(pattern);
        self.state.source_ctm = self.state.ctm;
    }

    /// Use `surface` as the source with its origin at user-space `(x, y)`.
    pub fn set_source_surface(&mut self, surface: &Arc<RawSurface>, x: f64, y: f64) {
        if !self.is_ok() {
            return;
        }
        let pattern = RawPattern::for_surface(Arc::clone(surface));
        pattern.set_matrix(&RawMatrix::translation(-x, -y));
        self.set_source(&pattern);
    }

    /// The current source, as a new reference.
    pub fn source(&self) -> Arc<RawPattern> {
        Arc::clone(&self.state.source)
    }

    // --- Font selection ---

    pub fn select_font_face(&mut self, family: &str, slant: i32, weight: i32) {
        if !self.is_ok() {
            return;
        }
        if !(abi::font_slant::NORMAL..=abi::font_slant::OBLIQUE).contains(&slant) {
            self.set_error(status::INVALID_SLANT);
            return;
        }
        if !(abi::font_weight::NORMAL..=abi::font_weight::BOLD).contains(&weight) {
            self.set_error(status::INVALID_WEIGHT);
            return;
        }
        log::debug!(target: "drawkit", "select_font_face {:?} {} {}", family, slant, weight);
        self.state.font_face = RawFontFace {
            family: family.to_string(),
            slant,
            weight,
        };
    }

    pub fn set_font_face(&mut self, face: &RawFontFace) {
        self.select_font_face(&face.family, face.slant, face.weight);
    }

    pub fn font_face(&self) -> RawFontFace {
        self.state.font_face.clone()
    }

    /// Set the font size in user-space units. Non-finite sizes set `INVALID_MATRIX`.
    pub fn set_font_size(&mut self, size: f64) {
        if !self.is_ok() {
            return;
        }
        if !size.is_finite() {
            self.set_error(status::INVALID_MATRIX);
            return;
        }
        self.state.font_size = size;
    }

    pub fn font_size(&self) -> f64 {
        self.state.font_size
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::abi::{format, line_cap, line_join, operator};

    /// A context without fonts, so tests do not scan the system font directories.
    pub(crate) fn new_context(width: u32, height: u32) -> Box<RawContext> {
        let surface = RawSurface::create(format::ARGB32, width, height).unwrap();
        let fonts = FontLibrary::new(&crate::font::FontConfig {
            load_system_fonts: false,
            ..Default::default()
        });
        RawContext::create_with_fonts(&surface, &fonts)
    }

    #[test]
    fn test_new_context_defaults() {
        let ctx = new_context(200, 150);
        assert_eq!(ctx.status(), status::SUCCESS);
        assert_eq!(ctx.line_width(), 2.0);
        assert_eq!(ctx.miter_limit(), 10.0);
        assert_eq!(ctx.operator(), operator::OVER);
        assert_eq!(ctx.dash_count(), 0);
        assert_eq!(ctx.save_depth(), 0);
        assert_eq!(ctx.font_size(), 10.0);
        assert_eq!(ctx.source().pattern_type(), abi::pattern_type::SOLID);
    }

    #[test]
    fn test_finished_target() {
        let surface = RawSurface::create(format::ARGB32, 10, 10).unwrap();
        surface.finish();
        let ctx = RawContext::create(&surface);
        assert_eq!(ctx.status(), status::SURFACE_FINISHED);
    }

    #[test]
    fn test_line_width_clamps_negative() {
        let mut ctx = new_context(100, 100);
        ctx.set_line_width(5.0);
        assert_eq!(ctx.line_width(), 5.0);

        ctx.set_line_width(-1.0);
        assert_eq!(ctx.line_width(), 0.0);

        // Non-finite values are ignored
        ctx.set_line_width(f64::NAN);
        assert_eq!(ctx.line_width(), 0.0);
        assert_eq!(ctx.status(), status::SUCCESS);
    }

    #[test]
    fn test_line_cap_and_join() {
        let mut ctx = new_context(100, 100);
        ctx.set_line_cap(line_cap::ROUND);
        assert_eq!(ctx.line_cap(), line_cap::ROUND);
        ctx.set_line_join(line_join::BEVEL);
        assert_eq!(ctx.line_join(), line_join::BEVEL);

        ctx.set_line_cap(17);
        assert_eq!(ctx.status(), status::INVALID_CONTENT);
        assert_eq!(ctx.line_cap(), line_cap::ROUND);
    }

    #[test]
    fn test_dash_validation() {
        let mut ctx = new_context(100, 100);
        ctx.set_dash(&[5.0, 10.0, 15.0], 2.0);
        assert_eq!(ctx.dash(), (&[5.0, 10.0, 15.0][..], 2.0));

        ctx.set_dash(&[], 4.0);
        assert_eq!(ctx.dash_count(), 0);
        assert_eq!(ctx.status(), status::SUCCESS);

        ctx.set_dash(&[0.0, 0.0], 0.0);
        assert_eq!(ctx.status(), status::INVALID_DASH);
    }

    #[test]
    fn test_negative_dash_entry() {
        let mut ctx = new_context(100, 100);
        ctx.set_dash(&[4.0, -1.0], 0.0);
        assert_eq!(ctx.status(), status::INVALID_DASH);
        assert_eq!(ctx.dash_count(), 0);
    }

    #[test]
    fn test_save_restore_line_state() {
        let mut ctx = new_context(100, 100);
        ctx.set_line_width(5.0);
        ctx.set_line_cap(line_cap::ROUND);
        ctx.set_dash(&[4.0, 2.0], 1.5);
        ctx.set_operator(operator::XOR);
        ctx.save();

        ctx.set_line_width(10.0);
        ctx.set_line_cap(line_cap::SQUARE);
        ctx.set_dash(&[1.0], 0.0);
        ctx.set_operator(operator::SOURCE);
        ctx.restore();

        assert_eq!(ctx.line_width(), 5.0);
        assert_eq!(ctx.line_cap(), line_cap::ROUND);
        assert_eq!(ctx.dash(), (&[4.0, 2.0][..], 1.5));
        assert_eq!(ctx.operator(), operator::XOR);
        assert_eq!(ctx.status(), status::SUCCESS);
    }

    #[test]
    fn test_restore_without_save_is_sticky() {
        let mut ctx = new_context(10, 10);
        ctx.set_line_width(3.0);
        ctx.restore();
        assert_eq!(ctx.status(), status::INVALID_RESTORE);
        assert_eq!(ctx.line_width(), 3.0);

        // Later operations are ignored
        ctx.set_line_width(7.0);
        ctx.save();
        assert_eq!(ctx.line_width(), 3.0);
        assert_eq!(ctx.save_depth(), 0);
        assert_eq!(ctx.status(), status::INVALID_RESTORE);
    }

    #[test]
    fn test_source_is_shared_reference() {
        let mut ctx = new_context(10, 10);
        let pattern = RawPattern::linear(0.0, 0.0, 10.0, 0.0);
        ctx.set_source(&pattern);
        assert!(Arc::ptr_eq(&ctx.source(), &pattern));
        assert_eq!(Arc::strong_count(&pattern), 2);
        drop(ctx);
        assert_eq!(Arc::strong_count(&pattern), 1);
    }

    #[test]
    fn test_source_in_error_poisons_context() {
        let mut ctx = new_context(10, 10);
        let pattern = RawPattern::solid(RawColor::new(0.0, 0.0, 0.0, 1.0));
        pattern.add_color_stop(0.0, RawColor::new(1.0, 1.0, 1.0, 1.0));
        ctx.set_source(&pattern);
        assert_eq!(ctx.status(), status::PATTERN_TYPE_MISMATCH);
    }

    #[test]
    fn test_font_selection() {
        let mut ctx = new_context(10, 10);
        ctx.select_font_face("serif", abi::font_slant::ITALIC, abi::font_weight::BOLD);
        let face = ctx.font_face();
        assert_eq!(face.family, "serif");
        assert_eq!(face.slant, abi::font_slant::ITALIC);
        ctx.set_font_size(24.0);
        assert_eq!(ctx.font_size(), 24.0);

        ctx.select_font_face("serif", 9, abi::font_weight::BOLD);
        assert_eq!(ctx.status(), status::INVALID_SLANT);
    }
}
