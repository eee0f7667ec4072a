//! The drawing context handle.
//!
//! Operations are grouped by concern:
//! - `state`: line, fill, compositing, source and font state
//! - `path_ops`: path construction and inspection
//! - `drawing`: rendering, clipping and hit testing
//! - `transform`: the current transformation matrix
//! - `text`: text rendering and metrics

mod drawing;
mod path_ops;
mod state;
mod text;
mod transform;

use crate::error::{Result, Status};
use crate::font::FontLibrary;
use crate::surface::ImageSurface;
use drawkit_engine::{status, RawContext};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// Axis-aligned bounds `(x1, y1, x2, y2)` in user space.
pub type Extents = (f64, f64, f64, f64);

/// A drawing context bound to an [`ImageSurface`].
///
/// `Context` owns one engine context. It is `Send + Sync` and every method
/// takes `&self`: queries share a read lock and operations that change the
/// graphics state, the path or the target take the write lock.
///
/// Drawing operations do not return errors. The first failure is recorded
/// and reported by [`Context::status`]; every later operation is ignored.
///
/// [`Context::close`] releases the engine context. Dropping an open context
/// releases it too. After close, operations do nothing, queries return
/// defaults and [`Context::status`] reports [`Status::NullHandle`].
pub struct Context {
    handle: RwLock<Option<Box<RawContext>>>,
    released: AtomicBool,
}

impl Context {
    /// Create a context drawing into `target` with the default font library.
    pub fn new(target: &ImageSurface) -> Result<Context> {
        Self::from_raw(target, RawContext::create(target.raw()))
    }

    /// Create a context drawing into `target`, resolving fonts in `fonts`.
    pub fn with_fonts(target: &ImageSurface, fonts: &FontLibrary) -> Result<Context> {
        Self::from_raw(target, RawContext::create_with_fonts(target.raw(), fonts))
    }

    fn from_raw(target: &ImageSurface, raw: Box<RawContext>) -> Result<Context> {
        match raw.status() {
            status::SUCCESS => {}
            status::SURFACE_FINISHED => return Err(Status::NullHandle.into()),
            code => return Err(Status::from_raw(code).into()),
        }
        log::trace!(
            target: "drawkit",
            "open context on {}x{} surface",
            target.width(),
            target.height()
        );
        Ok(Context {
            handle: RwLock::new(Some(raw)),
            released: AtomicBool::new(false),
        })
    }

    /// Release the engine context.
    ///
    /// Closing is idempotent and always succeeds; concurrent callers
    /// release the context exactly once.
    pub fn close(&self) -> Result<()> {
        let mut handle = self.handle.write().unwrap_or_else(PoisonError::into_inner);
        if !self.released.swap(true, Ordering::AcqRel) {
            log::trace!(target: "drawkit", "close context");
            drop(handle.take());
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// The first failure recorded by this context.
    pub fn status(&self) -> Status {
        self.read(Status::NullHandle, |ctx| Status::from_raw(ctx.status()))
    }

    /// The surface this context draws into.
    ///
    /// Returns `None` once the context is closed.
    pub fn target(&self) -> Option<ImageSurface> {
        self.read(None, |ctx| Some(ImageSurface::from_raw(ctx.target())))
    }

    /// Push a copy of the graphics state.
    pub fn save(&self) {
        self.write(|ctx| ctx.save());
    }

    /// Pop the graphics state pushed by the matching [`Context::save`].
    ///
    /// Without one the context enters [`Status::InvalidRestore`].
    pub fn restore(&self) {
        self.write(|ctx| ctx.restore());
    }

    /// Number of saved graphics states.
    pub fn save_depth(&self) -> usize {
        self.read(0, |ctx| ctx.save_depth())
    }

    /// Run `f` on the engine context under the read lock, or return
    /// `closed` if the context has been released.
    fn read<T>(&self, closed: T, f: impl FnOnce(&RawContext) -> T) -> T {
        let handle = self.handle.read().unwrap_or_else(PoisonError::into_inner);
        match handle.as_deref() {
            Some(ctx) => f(ctx),
            None => closed,
        }
    }

    /// Run `f` on the engine context under the write lock. Does nothing if
    /// the context has been released.
    fn write(&self, f: impl FnOnce(&mut RawContext)) {
        let mut handle = self.handle.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(ctx) = handle.as_deref_mut() {
            f(ctx);
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if !self.released.swap(true, Ordering::AcqRel) {
            log::trace!(target: "drawkit", "finalize unclosed context");
            let handle = self
                .handle
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner);
            drop(handle.take());
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("closed", &self.is_closed())
            .field("status", &self.status())
            .finish()
    }
}
