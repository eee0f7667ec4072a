//! Image surfaces: the raster targets contexts draw into.

use crate::abi::format;
use crate::status;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tiny_skia::Pixmap;

/// Maximum surface dimension.
pub const MAX_DIMENSION: u32 = 32767;

/// An in-memory ARGB32 raster target.
///
/// Surfaces are shared through `Arc`: any number of contexts may draw into
/// the same surface, and pixel access is serialized by the surface mutex.
#[derive(Debug)]
pub struct RawSurface {
    format: i32,
    width: u32,
    height: u32,
    pixmap: Mutex<Pixmap>,
    finished: AtomicBool,
}

impl RawSurface {
    /// Create a surface, or return the status explaining why it could not be created.
    pub fn create(format: i32, width: u32, height: u32) -> Result<Arc<RawSurface>, i32> {
        if format != format::ARGB32 {
            log::warn!(target: "drawkit", "unsupported surface format {}", format);
            return Err(status::INVALID_FORMAT);
        }
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(status::INVALID_SIZE);
        }
        let pixmap = Pixmap::new(width, height).ok_or(status::NO_MEMORY)?;
        log::debug!(target: "drawkit", "surface create {}x{}", width, height);
        Ok(Arc::new(RawSurface {
            format,
            width,
            height,
            pixmap: Mutex::new(pixmap),
            finished: AtomicBool::new(false),
        }))
    }

    pub fn format(&self) -> i32 {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row of pixel data.
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    /// Mark the surface finished. Contexts can no longer be created for it
    /// and drawing into it becomes a no-op.
    pub fn finish(&self) {
        if !self.finished.swap(true, Ordering::AcqRel) {
            log::debug!(target: "drawkit", "surface finish");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    pub fn status(&self) -> i32 {
        if self.is_finished() {
            status::SURFACE_FINISHED
        } else {
            status::SUCCESS
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Pixmap> {
        self.pixmap.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current pixels, premultiplied, for use as a pattern source.
    pub(crate) fn snapshot(&self) -> Pixmap {
        self.lock().clone()
    }

    /// Straight-alpha RGBA copy of the pixel data, row-major, `stride()` bytes per row.
    pub fn data(&self) -> Vec<u8> {
        let pixmap = self.lock();
        let mut data = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Encode the surface as PNG into `writer`. Returns a status code.
    pub fn write_png<W: Write>(&self, writer: W) -> i32 {
        if self.is_finished() {
            return status::SURFACE_FINISHED;
        }
        let data = self.data();

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let result = encoder
            .write_header()
            .and_then(|mut writer| writer.write_image_data(&data));
        match result {
            Ok(()) => status::SUCCESS,
            Err(png::EncodingError::IoError(err)) => {
                log::warn!(target: "drawkit", "PNG write failed: {}", err);
                status::WRITE_ERROR
            }
            Err(err) => {
                log::warn!(target: "drawkit", "PNG encoding failed: {}", err);
                status::PNG_ERROR
            }
        }
    }
}
