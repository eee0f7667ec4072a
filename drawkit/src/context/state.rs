//! Line, fill, compositing, source and font state.

use super::Context;
use crate::enums::{Antialias, FillRule, FontSlant, FontWeight, LineCap, LineJoin, Operator};
use crate::font::FontFace;
use crate::pattern::Pattern;
use crate::surface::ImageSurface;
use drawkit_engine::abi::defaults;
use drawkit_engine::RawFontFace;

impl Context {
    // --- Line properties ---

    /// Set the stroke width in user-space units. Negative widths become zero.
    pub fn set_line_width(&self, width: f64) {
        self.write(|ctx| ctx.set_line_width(width));
    }

    pub fn line_width(&self) -> f64 {
        self.read(defaults::LINE_WIDTH, |ctx| ctx.line_width())
    }

    pub fn set_line_cap(&self, cap: LineCap) {
        self.write(|ctx| ctx.set_line_cap(cap.into_raw()));
    }

    pub fn line_cap(&self) -> LineCap {
        self.read(LineCap::default(), |ctx| {
            LineCap::from_raw_or_default(ctx.line_cap())
        })
    }

    pub fn set_line_join(&self, join: LineJoin) {
        self.write(|ctx| ctx.set_line_join(join.into_raw()));
    }

    pub fn line_join(&self) -> LineJoin {
        self.read(LineJoin::default(), |ctx| {
            LineJoin::from_raw_or_default(ctx.line_join())
        })
    }

    pub fn set_miter_limit(&self, limit: f64) {
        self.write(|ctx| ctx.set_miter_limit(limit));
    }

    pub fn miter_limit(&self) -> f64 {
        self.read(defaults::MITER_LIMIT, |ctx| ctx.miter_limit())
    }

    /// Set the dash pattern. An empty slice draws solid lines; negative
    /// lengths or an all-zero pattern enter `InvalidDash`.
    pub fn set_dash(&self, dashes: &[f64], offset: f64) {
        self.write(|ctx| ctx.set_dash(dashes, offset));
    }

    /// The dash lengths and offset as set.
    pub fn dash(&self) -> (Vec<f64>, f64) {
        self.read((Vec::new(), 0.0), |ctx| {
            let (dashes, offset) = ctx.dash();
            (dashes.to_vec(), offset)
        })
    }

    pub fn dash_count(&self) -> usize {
        self.read(0, |ctx| ctx.dash_count())
    }

    // --- Fill and compositing ---

    pub fn set_fill_rule(&self, rule: FillRule) {
        self.write(|ctx| ctx.set_fill_rule(rule.into_raw()));
    }

    pub fn fill_rule(&self) -> FillRule {
        self.read(FillRule::default(), |ctx| {
            FillRule::from_raw_or_default(ctx.fill_rule())
        })
    }

    pub fn set_operator(&self, op: Operator) {
        self.write(|ctx| ctx.set_operator(op.into_raw()));
    }

    pub fn operator(&self) -> Operator {
        self.read(Operator::default(), |ctx| {
            Operator::from_raw_or_default(ctx.operator())
        })
    }

    pub fn set_antialias(&self, mode: Antialias) {
        self.write(|ctx| ctx.set_antialias(mode.into_raw()));
    }

    pub fn antialias(&self) -> Antialias {
        self.read(Antialias::default(), |ctx| {
            Antialias::from_raw_or_default(ctx.antialias())
        })
    }

    // --- Source ---

    pub fn set_source_rgb(&self, red: f64, green: f64, blue: f64) {
        self.set_source_rgba(red, green, blue, 1.0);
    }

    pub fn set_source_rgba(&self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.write(|ctx| ctx.set_source_rgba(red, green, blue, alpha));
    }

    /// Paint with `pattern`. The context keeps its own reference, so later
    /// changes to the pattern are seen by the context.
    pub fn set_source(&self, pattern: &Pattern) {
        self.write(|ctx| ctx.set_source(pattern.raw()));
    }

    /// Paint with `surface`, its origin placed at user-space `(x, y)`.
    pub fn set_source_surface(&self, surface: &ImageSurface, x: f64, y: f64) {
        self.write(|ctx| ctx.set_source_surface(surface.raw(), x, y));
    }

    /// The current source as a new reference to the context's pattern.
    ///
    /// The pattern stays valid after the context is closed. A closed context
    /// returns a fresh opaque black pattern.
    pub fn source(&self) -> Pattern {
        self.read(None, |ctx| Some(Pattern::from_raw(ctx.source())))
            .unwrap_or_else(|| Pattern::rgb(0.0, 0.0, 0.0))
    }

    // --- Font selection ---

    /// Select a font by family name, slant and weight.
    pub fn select_font_face(&self, family: &str, slant: FontSlant, weight: FontWeight) {
        self.write(|ctx| ctx.select_font_face(family, slant.into_raw(), weight.into_raw()));
    }

    pub fn set_font_face(&self, face: &FontFace) {
        let raw = RawFontFace::from(face);
        self.write(|ctx| ctx.set_font_face(&raw));
    }

    pub fn font_face(&self) -> FontFace {
        self.read(FontFace::default(), |ctx| ctx.font_face().into())
    }

    /// Set the font size in user-space units.
    pub fn set_font_size(&self, size: f64) {
        self.write(|ctx| ctx.set_font_size(size));
    }

    pub fn font_size(&self) -> f64 {
        self.read(defaults::FONT_SIZE, |ctx| ctx.font_size())
    }
}
