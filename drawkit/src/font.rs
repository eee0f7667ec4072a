//! Font selection and text metrics.

use crate::enums::{FontSlant, FontWeight};
use drawkit_engine::{RawFontExtents, RawFontFace, RawTextExtents};

pub use drawkit_engine::{CustomFont, FontConfig, FontLibrary, GenericFamilyMap};

/// A font selection by family name, slant and weight.
///
/// Family names may be CSS generic families (`"serif"`, `"sans-serif"`,
/// `"monospace"`, `"cursive"`, `"fantasy"`), resolved through the context's
/// [`FontLibrary`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFace {
    pub family: String,
    pub slant: FontSlant,
    pub weight: FontWeight,
}

impl FontFace {
    pub fn new(family: impl Into<String>, slant: FontSlant, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            slant,
            weight,
        }
    }
}

impl Default for FontFace {
    fn default() -> Self {
        RawFontFace::default().into()
    }
}

impl From<RawFontFace> for FontFace {
    fn from(raw: RawFontFace) -> Self {
        Self {
            family: raw.family,
            slant: FontSlant::from_raw_or_default(raw.slant),
            weight: FontWeight::from_raw_or_default(raw.weight),
        }
    }
}

impl From<&FontFace> for RawFontFace {
    fn from(face: &FontFace) -> Self {
        Self {
            family: face.family.clone(),
            slant: face.slant.into_raw(),
            weight: face.weight.into_raw(),
        }
    }
}

/// Ink bounds and advance of a string, in user space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

impl From<RawTextExtents> for TextExtents {
    fn from(raw: RawTextExtents) -> Self {
        Self {
            x_bearing: raw.x_bearing,
            y_bearing: raw.y_bearing,
            width: raw.width,
            height: raw.height,
            x_advance: raw.x_advance,
            y_advance: raw.y_advance,
        }
    }
}

/// Vertical metrics of the selected face, in user space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

impl From<RawFontExtents> for FontExtents {
    fn from(raw: RawFontExtents) -> Self {
        Self {
            ascent: raw.ascent,
            descent: raw.descent,
            height: raw.height,
            max_x_advance: raw.max_x_advance,
            max_y_advance: raw.max_y_advance,
        }
    }
}
