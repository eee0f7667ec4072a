//! A procedural 2D vector drawing engine built on tiny-skia.
//!
//! This crate keeps the graphics state that tiny-skia does not: a context
//! with a current transformation matrix, a current path and point, a clip
//! stack, line and compositing settings, a paint source and a font
//! selection, all saved and restored as a unit. It uses:
//! - `tiny-skia` for rasterization, stroking and compositing
//! - `fontdb` for font discovery and `ttf-parser` for metrics and outlines
//! - `png` for encoding surfaces
//!
//! Operations never return errors. The first failure is recorded as an
//! integer code (see [`status`]) in the context, which ignores every later
//! operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use drawkit_engine::{abi, RawContext, RawSurface};
//!
//! let surface = RawSurface::create(abi::format::ARGB32, 400, 300)?;
//! let mut ctx = RawContext::create(&surface);
//! ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
//! ctx.rectangle(10.0, 10.0, 100.0, 50.0);
//! ctx.fill();
//! assert_eq!(ctx.status(), drawkit_engine::status::SUCCESS);
//! ```

pub mod abi;
mod arc;
mod context;
mod drawing_state;
mod font;
mod matrix;
mod path;
mod pattern;
pub mod status;
mod surface;

// Re-export public API
pub use context::RawContext;
pub use font::{
    CustomFont, FontConfig, FontLibrary, GenericFamilyMap, RawFontExtents, RawFontFace,
    RawTextExtents,
};
pub use matrix::RawMatrix;
pub use path::PathSegment;
pub use pattern::{ColorStop, PatternKind, RawColor, RawPattern};
pub use surface::{RawSurface, MAX_DIMENSION};
