//! Pattern sources: solid colors, gradients and surfaces.

use crate::abi::{self, extend, pattern_type};
use crate::matrix::RawMatrix;
use crate::path::{build_skia_path, PathSegment};
use crate::status;
use crate::surface::RawSurface;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tiny_skia::{Pixmap, Shader, Transform};

/// An RGBA color with components in `0.0..=1.0`, not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RawColor {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        // NaN clamps to zero.
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
            alpha: clamp(alpha),
        }
    }

    pub(crate) fn to_skia(self, alpha_scale: f64) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba(
            self.red as f32,
            self.green as f32,
            self.blue as f32,
            (self.alpha * alpha_scale).clamp(0.0, 1.0) as f32,
        )
        .unwrap_or(tiny_skia::Color::BLACK)
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f64,
    /// Color at this stop.
    pub color: RawColor,
}

/// Geometry of a pattern.
#[derive(Debug, Clone)]
pub enum PatternKind {
    Solid(RawColor),
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    Radial {
        cx0: f64,
        cy0: f64,
        r0: f64,
        cx1: f64,
        cy1: f64,
        r1: f64,
    },
    Surface(Arc<RawSurface>),
}

#[derive(Debug)]
struct PatternState {
    stops: Vec<ColorStop>,
    extend: i32,
    matrix: RawMatrix,
    status: i32,
}

/// A reference-counted paint source.
///
/// Patterns are always handled through `Arc<RawPattern>`; a context holding
/// one as its source owns its own reference. Gradient stops, extend mode and
/// matrix may be changed after creation and the change is seen by every
/// holder.
#[derive(Debug)]
pub struct RawPattern {
    kind: PatternKind,
    state: Mutex<PatternState>,
}

impl RawPattern {
    fn with_kind(kind: PatternKind, extend: i32) -> Arc<Self> {
        Arc::new(Self {
            kind,
            state: Mutex::new(PatternState {
                stops: Vec::new(),
                extend,
                matrix: RawMatrix::identity(),
                status: status::SUCCESS,
            }),
        })
    }

    pub fn solid(color: RawColor) -> Arc<Self> {
        Self::with_kind(PatternKind::Solid(color), extend::PAD)
    }

    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Arc<Self> {
        Self::with_kind(PatternKind::Linear { x0, y0, x1, y1 }, extend::PAD)
    }

    pub fn radial(cx0: f64, cy0: f64, r0: f64, cx1: f64, cy1: f64, r1: f64) -> Arc<Self> {
        Self::with_kind(
            PatternKind::Radial {
                cx0,
                cy0,
                r0,
                cx1,
                cy1,
                r1,
            },
            extend::PAD,
        )
    }

    pub fn for_surface(surface: Arc<RawSurface>) -> Arc<Self> {
        Self::with_kind(PatternKind::Surface(surface), extend::NONE)
    }

    fn lock(&self) -> MutexGuard<'_, PatternState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn pattern_type(&self) -> i32 {
        match self.kind {
            PatternKind::Solid(_) => pattern_type::SOLID,
            PatternKind::Surface(_) => pattern_type::SURFACE,
            PatternKind::Linear { .. } => pattern_type::LINEAR,
            PatternKind::Radial { .. } => pattern_type::RADIAL,
        }
    }

    pub fn status(&self) -> i32 {
        self.lock().status
    }

    fn set_error(state: &mut PatternState, code: i32) {
        if state.status == status::SUCCESS {
            log::warn!(target: "drawkit", "pattern error: {}", status::to_str(code));
            state.status = code;
        }
    }

    /// Add a color stop. Only gradients accept stops; other kinds enter
    /// `PATTERN_TYPE_MISMATCH`.
    pub fn add_color_stop(&self, offset: f64, color: RawColor) {
        let mut state = self.lock();
        if state.status != status::SUCCESS {
            return;
        }
        if !matches!(self.kind, PatternKind::Linear { .. } | PatternKind::Radial { .. }) {
            Self::set_error(&mut state, status::PATTERN_TYPE_MISMATCH);
            return;
        }
        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        // Stable insertion keeps equal offsets in the order they were added.
        let index = state.stops.partition_point(|stop| stop.offset <= offset);
        state.stops.insert(index, ColorStop { offset, color });
    }

    pub fn color_stops(&self) -> Vec<ColorStop> {
        self.lock().stops.clone()
    }

    pub fn set_extend(&self, mode: i32) {
        let mut state = self.lock();
        if state.status != status::SUCCESS {
            return;
        }
        if !abi::is_valid_extend(mode) {
            Self::set_error(&mut state, status::INVALID_CONTENT);
            return;
        }
        state.extend = mode;
    }

    pub fn extend(&self) -> i32 {
        self.lock().extend
    }

    /// Set the user-space to pattern-space matrix.
    pub fn set_matrix(&self, matrix: &RawMatrix) {
        let mut state = self.lock();
        if state.status != status::SUCCESS {
            return;
        }
        if !matrix.is_invertible() {
            Self::set_error(&mut state, status::INVALID_MATRIX);
            return;
        }
        state.matrix = *matrix;
    }

    pub fn matrix(&self) -> RawMatrix {
        self.lock().matrix
    }

    /// Pixels needed to build a shader for this pattern, copied out of the
    /// source surface so no surface lock is held while painting.
    pub(crate) fn snapshot(&self) -> Option<Pixmap> {
        match &self.kind {
            PatternKind::Surface(surface) => Some(surface.snapshot()),
            _ => None,
        }
    }

    /// Build a tiny-skia shader.
    ///
    /// `source_ctm` is the CTM that was current when the pattern was set as
    /// the source; `alpha` scales the pattern's opacity. Returns `None` when
    /// the pattern paints nothing (error status, gradient without stops).
    pub(crate) fn shader<'a>(
        &self,
        source_ctm: &RawMatrix,
        alpha: f64,
        snapshot: Option<&'a Pixmap>,
    ) -> Option<Shader<'a>> {
        let state = self.lock();
        if state.status != status::SUCCESS {
            return None;
        }
        // Pattern space -> user space -> device space.
        let to_device: Transform = source_ctm.multiply(&state.matrix.invert()?).into();
        let spread = abi::skia_spread_mode(state.extend);

        match &self.kind {
            PatternKind::Solid(color) => Some(Shader::SolidColor(color.to_skia(alpha))),
            PatternKind::Linear { x0, y0, x1, y1 } => tiny_skia::LinearGradient::new(
                tiny_skia::Point::from_xy(*x0 as f32, *y0 as f32),
                tiny_skia::Point::from_xy(*x1 as f32, *y1 as f32),
                skia_stops(&state.stops, alpha)?,
                spread,
                to_device,
            ),
            PatternKind::Radial {
                cx0,
                cy0,
                r0,
                cx1,
                cy1,
                r1,
            } => {
                if *r0 != 0.0 {
                    log::warn!(
                        target: "drawkit",
                        "radial gradient start radius {} approximated as 0",
                        r0
                    );
                }
                tiny_skia::RadialGradient::new(
                    tiny_skia::Point::from_xy(*cx0 as f32, *cy0 as f32),
                    tiny_skia::Point::from_xy(*cx1 as f32, *cy1 as f32),
                    *r1 as f32,
                    skia_stops(&state.stops, alpha)?,
                    spread,
                    to_device,
                )
            }
            PatternKind::Surface(_) => {
                let pixmap = snapshot?;
                Some(tiny_skia::Pattern::new(
                    pixmap.as_ref(),
                    spread,
                    tiny_skia::FilterQuality::Bilinear,
                    alpha.clamp(0.0, 1.0) as f32,
                    to_device,
                ))
            }
        }
    }

    /// Device-space outline of a surface pattern that is not extended, or
    /// `None` when the pattern covers the whole plane.
    pub(crate) fn extent_path(&self, source_ctm: &RawMatrix) -> Option<tiny_skia::Path> {
        let PatternKind::Surface(surface) = &self.kind else {
            return None;
        };
        let state = self.lock();
        if state.extend != extend::NONE {
            return None;
        }
        let to_device = source_ctm.multiply(&state.matrix.invert()?);
        let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
        let corners = [
            PathSegment::MoveTo(0.0, 0.0),
            PathSegment::LineTo(w, 0.0),
            PathSegment::LineTo(w, h),
            PathSegment::LineTo(0.0, h),
            PathSegment::ClosePath,
        ];
        build_skia_path(corners.iter().map(|s| s.transformed(&to_device)))
    }
}

fn skia_stops(stops: &[ColorStop], alpha: f64) -> Option<Vec<tiny_skia::GradientStop>> {
    if stops.is_empty() {
        return None;
    }
    Some(
        stops
            .iter()
            .map(|stop| tiny_skia::GradientStop::new(stop.offset as f32, stop.color.to_skia(alpha)))
            .collect(),
    )
}
