//! Font configuration, face selection and glyph metrics.
//!
//! Faces are resolved through a shared `fontdb` database and measured and
//! outlined with `ttf-parser`. Glyph positioning is a simple advance-width
//! layout: no shaping, kerning or fallback between faces.

use crate::abi::{font_slant, font_weight};
use crate::path::PathSegment;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

lazy_static! {
    static ref DEFAULT_LIBRARY: FontLibrary = FontLibrary::new(&FontConfig::default());
}

/// Font configuration for a [`FontLibrary`].
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Custom font data to register.
    pub custom_fonts: Vec<CustomFont>,
    /// Mappings from generic family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Raw font file data (TTF/OTF) to register. Arc-wrapped for cheap cloning.
#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

/// Mappings from generic family names to concrete font family names, in priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    pub serif: Vec<String>,
    pub sans_serif: Vec<String>,
    pub monospace: Vec<String>,
    pub cursive: Vec<String>,
    pub fantasy: Vec<String>,
}

impl GenericFamilyMap {
    pub fn defaults() -> Self {
        Self {
            sans_serif: vec![
                "Arial".into(),
                "Helvetica".into(),
                "Liberation Sans".into(),
                "DejaVu Sans".into(),
            ],
            monospace: vec![
                "Courier New".into(),
                "Courier".into(),
                "Liberation Mono".into(),
                "DejaVu Sans Mono".into(),
            ],
            serif: vec![
                "Times New Roman".into(),
                "Times".into(),
                "Liberation Serif".into(),
                "DejaVu Serif".into(),
            ],
            cursive: vec!["Comic Sans MS".into(), "Apple Chancery".into()],
            fantasy: vec!["Impact".into(), "Papyrus".into()],
        }
    }
}

/// A [`FontConfig`] resolved into a font database.
///
/// Resolution scans the filesystem once; clones share the database and the
/// per-face metrics cache.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    db: Arc<fontdb::Database>,
    /// Widest horizontal advance of each face measured so far, in font units.
    max_advances: Arc<Mutex<HashMap<fontdb::ID, u16>>>,
}

impl FontLibrary {
    pub fn new(config: &FontConfig) -> Self {
        let mut db = fontdb::Database::new();

        if config.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &config.font_dirs {
            db.load_fonts_dir(dir);
        }
        for font in &config.custom_fonts {
            db.load_font_data(Vec::from(font.data.as_slice()));
        }
        apply_generic_families(&mut db, &config.generic_families);

        log::debug!(target: "drawkit", "font library loaded {} faces", db.len());
        Self {
            db: Arc::new(db),
            max_advances: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The process-wide library built from `FontConfig::default()` on first use.
    pub fn default_library() -> FontLibrary {
        DEFAULT_LIBRARY.clone()
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Family names available in the library, sorted and deduplicated.
    pub fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self
            .db
            .faces()
            .flat_map(|face| face.families.iter().map(|(family, _)| family.clone()))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        families.sort();
        families
    }

    fn query(&self, face: &RawFontFace) -> Option<fontdb::ID> {
        let requested = match face.family.to_ascii_lowercase().as_str() {
            "serif" => fontdb::Family::Serif,
            "sans-serif" | "sans" | "" => fontdb::Family::SansSerif,
            "monospace" => fontdb::Family::Monospace,
            "cursive" => fontdb::Family::Cursive,
            "fantasy" => fontdb::Family::Fantasy,
            _ => fontdb::Family::Name(&face.family),
        };
        let style = match face.slant {
            font_slant::ITALIC => fontdb::Style::Italic,
            font_slant::OBLIQUE => fontdb::Style::Oblique,
            _ => fontdb::Style::Normal,
        };
        let weight = match face.weight {
            font_weight::BOLD => fontdb::Weight::BOLD,
            _ => fontdb::Weight::NORMAL,
        };
        let families = [requested, fontdb::Family::SansSerif];
        self.db
            .query(&fontdb::Query {
                families: &families,
                weight,
                stretch: fontdb::Stretch::Normal,
                style,
            })
            .or_else(|| self.db.faces().next().map(|info| info.id))
    }

    /// Run `f` with the parsed face selected by `face`, or return `None`
    /// when the library has no usable face.
    pub(crate) fn with_face<T>(
        &self,
        face: &RawFontFace,
        f: impl FnOnce(&ttf_parser::Face<'_>) -> T,
    ) -> Option<T> {
        let id = self.query(face)?;
        self.with_face_id(id, f)
    }

    fn with_face_id<T>(
        &self,
        id: fontdb::ID,
        f: impl FnOnce(&ttf_parser::Face<'_>) -> T,
    ) -> Option<T> {
        self.db
            .with_face_data(id, |data, index| {
                match ttf_parser::Face::parse(data, index) {
                    Ok(parsed) => Some(f(&parsed)),
                    Err(err) => {
                        log::warn!(target: "drawkit", "failed to parse font face: {}", err);
                        None
                    }
                }
            })
            .flatten()
    }

    /// Vertical metrics of the face selected by `face` at `size`, or `None`
    /// when the library has no usable face.
    pub(crate) fn font_extents(&self, face: &RawFontFace, size: f64) -> Option<RawFontExtents> {
        let id = self.query(face)?;
        self.with_face_id(id, |parsed| {
            let max_advance = self.max_advance(id, parsed);
            font_metrics(parsed, size, max_advance)
        })
    }

    fn max_advance(&self, id: fontdb::ID, face: &ttf_parser::Face<'_>) -> u16 {
        let mut cache = self
            .max_advances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cache.entry(id).or_insert_with(|| {
            log::debug!(target: "drawkit", "measuring advances of {} glyphs", face.number_of_glyphs());
            (0..face.number_of_glyphs())
                .filter_map(|glyph| face.glyph_hor_advance(ttf_parser::GlyphId(glyph)))
                .max()
                .unwrap_or(0)
        })
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::default_library()
    }
}

fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(family, _)| family.clone()))
        .collect();
    let first = |list: &[String]| list.iter().find(|f| available.contains(*f)).cloned();

    if let Some(family) = first(&families.sans_serif) {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = first(&families.monospace) {
        db.set_monospace_family(family);
    }
    if let Some(family) = first(&families.serif) {
        db.set_serif_family(family);
    }
    if let Some(family) = first(&families.cursive) {
        db.set_cursive_family(family);
    }
    if let Some(family) = first(&families.fantasy) {
        db.set_fantasy_family(family);
    }
}

/// A font selection: family name, slant and weight codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFontFace {
    pub family: String,
    pub slant: i32,
    pub weight: i32,
}

impl Default for RawFontFace {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            slant: font_slant::NORMAL,
            weight: font_weight::NORMAL,
        }
    }
}

/// Ink and advance of a string, in user space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawTextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// Vertical metrics of a face at the current size, in user space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawFontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

fn glyph_id(face: &ttf_parser::Face<'_>, ch: char) -> ttf_parser::GlyphId {
    face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0))
}

fn units_scale(face: &ttf_parser::Face<'_>, size: f64) -> f64 {
    size / f64::from(face.units_per_em().max(1))
}

pub(crate) fn text_extents(face: &ttf_parser::Face<'_>, size: f64, text: &str) -> RawTextExtents {
    let scale = units_scale(face, size);
    let mut pen = 0.0;
    let mut ink: Option<(f64, f64, f64, f64)> = None;

    for ch in text.chars() {
        let glyph = glyph_id(face, ch);
        if let Some(rect) = face.glyph_bounding_box(glyph) {
            // Font units are y-up; user space is y-down.
            let x1 = pen + f64::from(rect.x_min) * scale;
            let x2 = pen + f64::from(rect.x_max) * scale;
            let y1 = -f64::from(rect.y_max) * scale;
            let y2 = -f64::from(rect.y_min) * scale;
            ink = Some(match ink {
                None => (x1, y1, x2, y2),
                Some((a, b, c, d)) => (a.min(x1), b.min(y1), c.max(x2), d.max(y2)),
            });
        }
        pen += f64::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
    }

    let (x1, y1, x2, y2) = ink.unwrap_or_default();
    RawTextExtents {
        x_bearing: x1,
        y_bearing: y1,
        width: x2 - x1,
        height: y2 - y1,
        x_advance: pen,
        y_advance: 0.0,
    }
}

/// Vertical metrics of `face` at `size`, given its widest advance in font units.
fn font_metrics(face: &ttf_parser::Face<'_>, size: f64, max_advance: u16) -> RawFontExtents {
    let scale = units_scale(face, size);
    let ascent = f64::from(face.ascender()) * scale;
    let descent = -f64::from(face.descender()) * scale;
    RawFontExtents {
        ascent,
        descent,
        height: ascent + descent + f64::from(face.line_gap()) * scale,
        max_x_advance: f64::from(max_advance) * scale,
        max_y_advance: 0.0,
    }
}

/// Glyph outlines for `text` with the baseline origin at `origin`, in user
/// space, plus the advance of the whole run.
pub(crate) fn text_outline(
    face: &ttf_parser::Face<'_>,
    size: f64,
    text: &str,
    origin: (f64, f64),
) -> (Vec<PathSegment>, f64) {
    let scale = units_scale(face, size);
    let mut builder = OutlineCollector {
        segments: Vec::new(),
        origin,
        scale,
        last: (0.0, 0.0),
    };
    let mut pen = 0.0;

    for ch in text.chars() {
        let glyph = glyph_id(face, ch);
        builder.origin = (origin.0 + pen, origin.1);
        face.outline_glyph(glyph, &mut builder);
        pen += f64::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
    }
    (builder.segments, pen)
}

struct OutlineCollector {
    segments: Vec<PathSegment>,
    origin: (f64, f64),
    scale: f64,
    last: (f64, f64),
}

impl OutlineCollector {
    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        (
            self.origin.0 + f64::from(x) * self.scale,
            self.origin.1 - f64::from(y) * self.scale,
        )
    }
}

impl ttf_parser::OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.segments.push(PathSegment::MoveTo(x, y));
        self.last = (x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.segments.push(PathSegment::LineTo(x, y));
        self.last = (x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        // Elevate the quadratic to a cubic.
        let (qx, qy) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        let (px, py) = self.last;
        self.segments.push(PathSegment::CurveTo(
            px + 2.0 / 3.0 * (qx - px),
            py + 2.0 / 3.0 * (qy - py),
            x + 2.0 / 3.0 * (qx - x),
            y + 2.0 / 3.0 * (qy - y),
            x,
            y,
        ));
        self.last = (x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x, y));
        self.last = (x, y);
    }

    fn close(&mut self) {
        self.segments.push(PathSegment::ClosePath);
    }
}
