//! Text operations for RawContext.
//!
//! Glyphs are laid out along the baseline starting at the current point
//! (the user-space origin when there is none). Sizes are user-space units.

use super::RawContext;
use crate::font::{self, RawFontExtents, RawTextExtents};
use crate::path::{build_skia_path, PathSegment};

impl RawContext {
    fn text_origin(&self) -> (f64, f64) {
        self.current_point().unwrap_or((0.0, 0.0))
    }

    /// User-space glyph outlines for `text` and the pen position after it.
    fn layout_text(&self, text: &str) -> Option<(Vec<PathSegment>, (f64, f64))> {
        let origin = self.text_origin();
        let size = self.state.font_size;
        self.fonts
            .with_face(&self.state.font_face, |face| {
                font::text_outline(face, size, text, origin)
            })
            .map(|(segments, advance)| (segments, (origin.0 + advance, origin.1)))
    }

    /// Fill the glyphs of `text` and move the current point past them.
    pub fn show_text(&mut self, text: &str) {
        if !self.is_ok() || text.is_empty() {
            return;
        }
        log::debug!(target: "drawkit", "show_text {:?}", text);
        let Some((segments, end)) = self.layout_text(text) else {
            log::debug!(target: "drawkit", "no font for {:?}", self.state.font_face.family);
            return;
        };
        let ctm = self.state.ctm;
        if let Some(path) = build_skia_path(segments.iter().map(|s| s.transformed(&ctm))) {
            self.fill_device_path(&path);
        }
        self.move_to(end.0, end.1);
    }

    /// Append the glyph outlines of `text` to the current path.
    pub fn text_path(&mut self, text: &str) {
        if !self.is_ok() || text.is_empty() {
            return;
        }
        log::debug!(target: "drawkit", "text_path {:?}", text);
        let Some((segments, end)) = self.layout_text(text) else {
            return;
        };
        self.append_path(&segments);
        self.move_to(end.0, end.1);
    }

    /// Extents of `text` set in the current font. Zero without a usable font.
    pub fn text_extents(&self, text: &str) -> RawTextExtents {
        let size = self.state.font_size;
        self.fonts
            .with_face(&self.state.font_face, |face| font::text_extents(face, size, text))
            .unwrap_or_default()
    }

    /// Metrics of the current font. Zero without a usable font.
    pub fn font_extents(&self) -> RawFontExtents {
        let size = self.state.font_size;
        self.fonts
            .font_extents(&self.state.font_face, size)
            .unwrap_or_default()
    }
}
