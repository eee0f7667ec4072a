//! Error types for drawkit.

use drawkit_engine::status;
use std::fmt;
use thiserror::Error;

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by constructors and I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine reported a failure status.
    #[error("drawing engine error: {0}")]
    Status(Status),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Status(status)
    }
}

impl Error {
    /// The engine status behind this error, if any.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Status(status) => Some(*status),
            Error::Io(_) => None,
        }
    }
}

/// Engine failure categories.
///
/// Discriminants are the engine's status codes. `NullHandle` is also
/// reported by every closed context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    Success = status::SUCCESS,
    NoMemory = status::NO_MEMORY,
    InvalidRestore = status::INVALID_RESTORE,
    InvalidPopGroup = status::INVALID_POP_GROUP,
    NoCurrentPoint = status::NO_CURRENT_POINT,
    InvalidMatrix = status::INVALID_MATRIX,
    InvalidStatus = status::INVALID_STATUS,
    NullHandle = status::NULL_POINTER,
    InvalidString = status::INVALID_STRING,
    InvalidPathData = status::INVALID_PATH_DATA,
    ReadError = status::READ_ERROR,
    WriteError = status::WRITE_ERROR,
    SurfaceFinished = status::SURFACE_FINISHED,
    SurfaceTypeMismatch = status::SURFACE_TYPE_MISMATCH,
    PatternTypeMismatch = status::PATTERN_TYPE_MISMATCH,
    InvalidContent = status::INVALID_CONTENT,
    InvalidFormat = status::INVALID_FORMAT,
    InvalidVisual = status::INVALID_VISUAL,
    FileNotFound = status::FILE_NOT_FOUND,
    InvalidDash = status::INVALID_DASH,
    InvalidDscComment = status::INVALID_DSC_COMMENT,
    InvalidIndex = status::INVALID_INDEX,
    ClipNotRepresentable = status::CLIP_NOT_REPRESENTABLE,
    TempFileError = status::TEMP_FILE_ERROR,
    InvalidStride = status::INVALID_STRIDE,
    FontTypeMismatch = status::FONT_TYPE_MISMATCH,
    UserFontImmutable = status::USER_FONT_IMMUTABLE,
    UserFontError = status::USER_FONT_ERROR,
    NegativeCount = status::NEGATIVE_COUNT,
    InvalidClusters = status::INVALID_CLUSTERS,
    InvalidSlant = status::INVALID_SLANT,
    InvalidWeight = status::INVALID_WEIGHT,
    InvalidSize = status::INVALID_SIZE,
    UserFontNotImplemented = status::USER_FONT_NOT_IMPLEMENTED,
    DeviceTypeMismatch = status::DEVICE_TYPE_MISMATCH,
    DeviceError = status::DEVICE_ERROR,
    InvalidMeshConstruction = status::INVALID_MESH_CONSTRUCTION,
    DeviceFinished = status::DEVICE_FINISHED,
    Jbig2GlobalMissing = status::JBIG2_GLOBAL_MISSING,
    PngError = status::PNG_ERROR,
}

impl Status {
    const ALL: [Status; 40] = [
        Status::Success,
        Status::NoMemory,
        Status::InvalidRestore,
        Status::InvalidPopGroup,
        Status::NoCurrentPoint,
        Status::InvalidMatrix,
        Status::InvalidStatus,
        Status::NullHandle,
        Status::InvalidString,
        Status::InvalidPathData,
        Status::ReadError,
        Status::WriteError,
        Status::SurfaceFinished,
        Status::SurfaceTypeMismatch,
        Status::PatternTypeMismatch,
        Status::InvalidContent,
        Status::InvalidFormat,
        Status::InvalidVisual,
        Status::FileNotFound,
        Status::InvalidDash,
        Status::InvalidDscComment,
        Status::InvalidIndex,
        Status::ClipNotRepresentable,
        Status::TempFileError,
        Status::InvalidStride,
        Status::FontTypeMismatch,
        Status::UserFontImmutable,
        Status::UserFontError,
        Status::NegativeCount,
        Status::InvalidClusters,
        Status::InvalidSlant,
        Status::InvalidWeight,
        Status::InvalidSize,
        Status::UserFontNotImplemented,
        Status::DeviceTypeMismatch,
        Status::DeviceError,
        Status::InvalidMeshConstruction,
        Status::DeviceFinished,
        Status::Jbig2GlobalMissing,
        Status::PngError,
    ];

    /// Map an engine status code. Unknown codes become `InvalidStatus`.
    pub fn from_raw(code: i32) -> Status {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Status::InvalidStatus)
    }

    pub fn into_raw(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// `Ok(())` for `Success`, otherwise this status as an error.
    pub fn to_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Status(self))
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(status::to_str(self.into_raw()))
    }
}
