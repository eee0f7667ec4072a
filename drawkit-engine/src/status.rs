//! Engine status codes.
//!
//! Every context, surface and pattern carries one of these codes. The values
//! are part of the engine's stable ABI and never change meaning.

pub const SUCCESS: i32 = 0;
pub const NO_MEMORY: i32 = 1;
pub const INVALID_RESTORE: i32 = 2;
pub const INVALID_POP_GROUP: i32 = 3;
pub const NO_CURRENT_POINT: i32 = 4;
pub const INVALID_MATRIX: i32 = 5;
pub const INVALID_STATUS: i32 = 6;
pub const NULL_POINTER: i32 = 7;
pub const INVALID_STRING: i32 = 8;
pub const INVALID_PATH_DATA: i32 = 9;
pub const READ_ERROR: i32 = 10;
pub const WRITE_ERROR: i32 = 11;
pub const SURFACE_FINISHED: i32 = 12;
pub const SURFACE_TYPE_MISMATCH: i32 = 13;
pub const PATTERN_TYPE_MISMATCH: i32 = 14;
pub const INVALID_CONTENT: i32 = 15;
pub const INVALID_FORMAT: i32 = 16;
pub const INVALID_VISUAL: i32 = 17;
pub const FILE_NOT_FOUND: i32 = 18;
pub const INVALID_DASH: i32 = 19;
pub const INVALID_DSC_COMMENT: i32 = 20;
pub const INVALID_INDEX: i32 = 21;
pub const CLIP_NOT_REPRESENTABLE: i32 = 22;
pub const TEMP_FILE_ERROR: i32 = 23;
pub const INVALID_STRIDE: i32 = 24;
pub const FONT_TYPE_MISMATCH: i32 = 25;
pub const USER_FONT_IMMUTABLE: i32 = 26;
pub const USER_FONT_ERROR: i32 = 27;
pub const NEGATIVE_COUNT: i32 = 28;
pub const INVALID_CLUSTERS: i32 = 29;
pub const INVALID_SLANT: i32 = 30;
pub const INVALID_WEIGHT: i32 = 31;
pub const INVALID_SIZE: i32 = 32;
pub const USER_FONT_NOT_IMPLEMENTED: i32 = 33;
pub const DEVICE_TYPE_MISMATCH: i32 = 34;
pub const DEVICE_ERROR: i32 = 35;
pub const INVALID_MESH_CONSTRUCTION: i32 = 36;
pub const DEVICE_FINISHED: i32 = 37;
pub const JBIG2_GLOBAL_MISSING: i32 = 38;
pub const PNG_ERROR: i32 = 39;

/// Human readable description of a status code.
pub fn to_str(status: i32) -> &'static str {
    match status {
        SUCCESS => "no error has occurred",
        NO_MEMORY => "out of memory",
        INVALID_RESTORE => "restore() without matching save()",
        INVALID_POP_GROUP => "no saved group to pop",
        NO_CURRENT_POINT => "no current point defined",
        INVALID_MATRIX => "invalid matrix (not invertible)",
        INVALID_STATUS => "invalid value for an input status",
        NULL_POINTER => "NULL pointer",
        INVALID_STRING => "input string not valid UTF-8",
        INVALID_PATH_DATA => "input path data not valid",
        READ_ERROR => "error while reading from input stream",
        WRITE_ERROR => "error while writing to output stream",
        SURFACE_FINISHED => "the target surface has been finished",
        SURFACE_TYPE_MISMATCH => "the surface type is not appropriate for the operation",
        PATTERN_TYPE_MISMATCH => "the pattern type is not appropriate for the operation",
        INVALID_CONTENT => "invalid value for an input content",
        INVALID_FORMAT => "invalid value for an input format",
        INVALID_VISUAL => "invalid value for an input visual",
        FILE_NOT_FOUND => "file not found",
        INVALID_DASH => "invalid value for a dash setting",
        INVALID_DSC_COMMENT => "invalid value for a DSC comment",
        INVALID_INDEX => "invalid index passed to getter",
        CLIP_NOT_REPRESENTABLE => "clip region not representable in desired format",
        TEMP_FILE_ERROR => "error creating or writing to a temporary file",
        INVALID_STRIDE => "invalid value for stride",
        FONT_TYPE_MISMATCH => "the font type is not appropriate for the operation",
        USER_FONT_IMMUTABLE => "the user-font is immutable",
        USER_FONT_ERROR => "error occurred in a user-font callback function",
        NEGATIVE_COUNT => "negative number used where it is not allowed",
        INVALID_CLUSTERS => "input clusters do not represent the accompanying text",
        INVALID_SLANT => "invalid value for an input font slant",
        INVALID_WEIGHT => "invalid value for an input font weight",
        INVALID_SIZE => "invalid value (typically too big) for the size of the input",
        USER_FONT_NOT_IMPLEMENTED => "user-font method not implemented",
        DEVICE_TYPE_MISMATCH => "the device type is not appropriate for the operation",
        DEVICE_ERROR => "an operation to the device caused an unspecified error",
        INVALID_MESH_CONSTRUCTION => "invalid operation during mesh pattern construction",
        DEVICE_FINISHED => "the target device has been finished",
        JBIG2_GLOBAL_MISSING => "a JBIG2 global segment is missing",
        PNG_ERROR => "error occurred in libpng while reading from or writing to a PNG file",
        _ => "<unknown error status>",
    }
}

/// Whether `status` is one of the codes defined above.
pub fn is_known(status: i32) -> bool {
    (SUCCESS..=PNG_ERROR).contains(&status)
}
