//! Image surfaces.

use crate::enums::Format;
use crate::error::{Error, Result, Status};
use drawkit_engine::{status, RawSurface};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// An in-memory raster target.
///
/// Cloning is cheap and yields another handle to the same pixels; any number
/// of contexts may draw into one surface concurrently.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    raw: Arc<RawSurface>,
}

impl ImageSurface {
    /// Create a transparent surface. Only `Format::Argb32` is supported.
    pub fn create(format: Format, width: u32, height: u32) -> Result<ImageSurface> {
        RawSurface::create(format.into_raw(), width, height)
            .map(|raw| ImageSurface { raw })
            .map_err(|code| Error::Status(Status::from_raw(code)))
    }

    pub(crate) fn from_raw(raw: Arc<RawSurface>) -> Self {
        ImageSurface { raw }
    }

    pub(crate) fn raw(&self) -> &Arc<RawSurface> {
        &self.raw
    }

    pub fn width(&self) -> u32 {
        self.raw.width()
    }

    pub fn height(&self) -> u32 {
        self.raw.height()
    }

    pub fn format(&self) -> Format {
        Format::from_raw_or_default(self.raw.format())
    }

    /// Bytes per row of [`ImageSurface::data`].
    pub fn stride(&self) -> u32 {
        self.raw.stride()
    }

    /// Finish the surface: contexts can no longer be created for it and
    /// drawing into it fails with `SurfaceFinished`.
    pub fn finish(&self) {
        self.raw.finish();
    }

    pub fn is_finished(&self) -> bool {
        self.raw.is_finished()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(self.raw.status())
    }

    /// Straight-alpha RGBA copy of the pixels, row-major.
    pub fn data(&self) -> Vec<u8> {
        self.raw.data()
    }

    /// Number of handles (including contexts) sharing this surface.
    pub fn reference_count(&self) -> usize {
        Arc::strong_count(&self.raw)
    }

    /// Encode as PNG into a file at `path`.
    pub fn write_to_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_png_stream(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode as PNG into `writer`.
    pub fn write_to_png_stream<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self.raw.write_png(writer) {
            status::SUCCESS => Ok(()),
            code => Err(Error::Status(Status::from_raw(code))),
        }
    }
}

impl PartialEq for ImageSurface {
    /// Handles are equal when they share the same pixels.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.raw, &other.raw)
    }
}

impl Eq for ImageSurface {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create() {
        let surface = ImageSurface::create(Format::Argb32, 30, 20).unwrap();
        assert_eq!(surface.width(), 30);
        assert_eq!(surface.height(), 20);
        assert_eq!(surface.stride(), 120);
        assert_eq!(surface.format(), Format::Argb32);
        assert_eq!(surface.status(), Status::Success);
        assert_eq!(surface.data().len(), 30 * 20 * 4);
    }

    #[rstest]
    #[case(Format::Argb32, 0, 10, Status::InvalidSize)]
    #[case(Format::Argb32, 10, 40000, Status::InvalidSize)]
    #[case(Format::A8, 10, 10, Status::InvalidFormat)]
    #[case(Format::Invalid, 10, 10, Status::InvalidFormat)]
    fn test_create_failures(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: Status,
    ) {
        let err = ImageSurface::create(format, width, height).unwrap_err();
        assert_eq!(err.status(), Some(expected));
    }

    #[test]
    fn test_clones_share_pixels() {
        let surface = ImageSurface::create(Format::Argb32, 4, 4).unwrap();
        let other = surface.clone();
        assert_eq!(surface, other);
        assert_eq!(surface.reference_count(), 2);
        other.finish();
        assert!(surface.is_finished());
        assert_eq!(surface.status(), Status::SurfaceFinished);
    }

    #[test]
    fn test_png_stream() {
        let surface = ImageSurface::create(Format::Argb32, 4, 4).unwrap();
        let mut buf = Vec::new();
        surface.write_to_png_stream(&mut buf).unwrap();
        assert_eq!(&buf[..8], b"\x89PNG\r\n\x1a\n");

        surface.finish();
        let err = surface.write_to_png_stream(&mut Vec::new()).unwrap_err();
        assert_eq!(err.status(), Some(Status::SurfaceFinished));
    }
}
