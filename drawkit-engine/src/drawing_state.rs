//! Graphics state that can be saved and restored.

use crate::abi::{antialias, defaults, fill_rule, line_cap, line_join, operator};
use crate::font::RawFontFace;
use crate::matrix::RawMatrix;
use crate::pattern::{RawColor, RawPattern};
use std::sync::Arc;

/// One clip path in device space.
#[derive(Debug, Clone)]
pub(crate) struct ClipEntry {
    /// `None` when the clip path was empty: nothing is inside.
    pub path: Option<tiny_skia::Path>,
    pub fill_rule: i32,
}

/// Graphics state that can be saved and restored.
///
/// The current path is not part of it.
#[derive(Debug, Clone)]
pub(crate) struct DrawingState {
    /// User space to device space.
    pub ctm: RawMatrix,
    /// Device space to user space. The CTM is always invertible.
    pub ctm_inverse: RawMatrix,
    /// Intersected clip paths; empty means unclipped.
    pub clip: Vec<ClipEntry>,
    pub line_width: f64,
    pub line_cap: i32,
    pub line_join: i32,
    pub miter_limit: f64,
    pub dash: Vec<f64>,
    pub dash_offset: f64,
    pub fill_rule: i32,
    pub operator: i32,
    pub antialias: i32,
    pub source: Arc<RawPattern>,
    /// CTM current when the source was set; patterns are locked to it.
    pub source_ctm: RawMatrix,
    pub font_face: RawFontFace,
    pub font_size: f64,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            ctm: RawMatrix::identity(),
            ctm_inverse: RawMatrix::identity(),
            clip: Vec::new(),
            line_width: defaults::LINE_WIDTH,
            line_cap: line_cap::BUTT,
            line_join: line_join::MITER,
            miter_limit: defaults::MITER_LIMIT,
            dash: Vec::new(),
            dash_offset: 0.0,
            fill_rule: fill_rule::WINDING,
            operator: operator::OVER,
            antialias: antialias::DEFAULT,
            source: RawPattern::solid(RawColor::new(0.0, 0.0, 0.0, 1.0)),
            source_ctm: RawMatrix::identity(),
            font_face: RawFontFace::default(),
            font_size: defaults::FONT_SIZE,
        }
    }
}

impl DrawingState {
    /// Replace the CTM; `m` must be invertible.
    pub fn set_ctm(&mut self, m: RawMatrix) -> bool {
        match m.invert() {
            Some(inverse) => {
                self.ctm = m;
                self.ctm_inverse = inverse;
                true
            }
            None => false,
        }
    }

    /// tiny-skia stroke settings for the current line style.
    pub fn skia_stroke(&self) -> tiny_skia::Stroke {
        let dash = if self.dash.is_empty() {
            None
        } else {
            // tiny-skia needs an even number of entries.
            let mut array: Vec<f32> = self.dash.iter().map(|v| *v as f32).collect();
            if array.len() % 2 == 1 {
                array.extend_from_within(..);
            }
            tiny_skia::StrokeDash::new(array, self.dash_offset as f32)
        };
        tiny_skia::Stroke {
            width: self.line_width as f32,
            miter_limit: self.miter_limit as f32,
            line_cap: crate::abi::skia_line_cap(self.line_cap),
            line_join: crate::abi::skia_line_join(self.line_join),
            dash,
        }
    }
}
