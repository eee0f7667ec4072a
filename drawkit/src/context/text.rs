//! Text rendering and metrics.
//!
//! Text is set with the selected [`crate::FontFace`] at the current font
//! size, starting at the current point. When the face cannot be resolved in
//! the context's font library nothing is drawn and metrics are zero.

use super::Context;
use crate::font::{FontExtents, TextExtents};

impl Context {
    /// Fill the glyphs of `text` and advance the current point past them.
    pub fn show_text(&self, text: &str) {
        self.write(|ctx| ctx.show_text(text));
    }

    /// Append the glyph outlines of `text` to the current path.
    pub fn text_path(&self, text: &str) {
        self.write(|ctx| ctx.text_path(text));
    }

    pub fn text_extents(&self, text: &str) -> TextExtents {
        self.read(TextExtents::default(), |ctx| ctx.text_extents(text).into())
    }

    pub fn font_extents(&self) -> FontExtents {
        self.read(FontExtents::default(), |ctx| ctx.font_extents().into())
    }
}
