//! Safe, thread-safe handles over the drawkit 2D drawing engine.
//!
//! [`Context`] owns one engine context bound to an [`ImageSurface`]. All of
//! its methods take `&self` and may be called from any thread: queries share
//! a read lock and everything that changes state takes the write lock.
//! Closing a context (or dropping it) releases the engine context exactly
//! once; afterwards every call is a harmless no-op.
//!
//! Sub-objects handed out by a context are either new references
//! ([`Pattern`], [`ImageSurface`]) that stay valid after the context is
//! closed, or plain values ([`Matrix`], [`FontFace`], extents).
//!
//! Drawing calls never return errors. The first failure is kept as the
//! context's [`Status`] and later operations are ignored. Constructors and
//! I/O return [`Result`].
//!
//! # Example
//!
//! ```rust,no_run
//! use drawkit::{Context, Format, ImageSurface};
//!
//! # fn main() -> drawkit::Result<()> {
//! let surface = ImageSurface::create(Format::Argb32, 200, 100)?;
//! let ctx = Context::new(&surface)?;
//! ctx.set_source_rgb(0.2, 0.4, 0.8);
//! ctx.rectangle(10.0, 10.0, 120.0, 60.0);
//! ctx.fill();
//! ctx.status().to_result()?;
//! ctx.close()?;
//! surface.write_to_png("out.png")?;
//! # Ok(())
//! # }
//! ```

mod context;
mod enums;
mod error;
mod font;
mod matrix;
mod pattern;
mod surface;

// Re-export public API
pub use context::{Context, Extents};
pub use drawkit_engine::PathSegment;
pub use enums::{
    Antialias, Extend, FillRule, FontSlant, FontWeight, Format, LineCap, LineJoin, Operator,
    PatternType,
};
pub use error::{Error, Result, Status};
pub use font::{
    CustomFont, FontConfig, FontExtents, FontFace, FontLibrary, GenericFamilyMap, TextExtents,
};
pub use matrix::Matrix;
pub use pattern::Pattern;
pub use surface::ImageSurface;
