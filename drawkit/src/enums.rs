//! Typed enumerations over the engine's numeric codes.

use drawkit_engine::abi;

macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $raw:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $raw,
            )+
        }

        impl $name {
            /// Map an engine code; codes outside the table yield `None`.
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $(x if x == $raw => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Map an engine code, falling back to the engine default.
            pub(crate) fn from_raw_or_default(raw: i32) -> Self {
                Self::from_raw(raw).unwrap_or_default()
            }

            pub fn into_raw(self) -> i32 {
                self as i32
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.into_raw()
            }
        }
    };
}

raw_enum! {
    /// Compositing operators.
    Operator {
        Clear = abi::operator::CLEAR,
        Source = abi::operator::SOURCE,
        #[default]
        Over = abi::operator::OVER,
        In = abi::operator::IN,
        Out = abi::operator::OUT,
        Atop = abi::operator::ATOP,
        Dest = abi::operator::DEST,
        DestOver = abi::operator::DEST_OVER,
        DestIn = abi::operator::DEST_IN,
        DestOut = abi::operator::DEST_OUT,
        DestAtop = abi::operator::DEST_ATOP,
        Xor = abi::operator::XOR,
        Add = abi::operator::ADD,
        Saturate = abi::operator::SATURATE,
        Multiply = abi::operator::MULTIPLY,
        Screen = abi::operator::SCREEN,
        Overlay = abi::operator::OVERLAY,
        Darken = abi::operator::DARKEN,
        Lighten = abi::operator::LIGHTEN,
        ColorDodge = abi::operator::COLOR_DODGE,
        ColorBurn = abi::operator::COLOR_BURN,
        HardLight = abi::operator::HARD_LIGHT,
        SoftLight = abi::operator::SOFT_LIGHT,
        Difference = abi::operator::DIFFERENCE,
        Exclusion = abi::operator::EXCLUSION,
        HslHue = abi::operator::HSL_HUE,
        HslSaturation = abi::operator::HSL_SATURATION,
        HslColor = abi::operator::HSL_COLOR,
        HslLuminosity = abi::operator::HSL_LUMINOSITY,
    }
}

raw_enum! {
    /// How the inside of a path is determined.
    FillRule {
        #[default]
        Winding = abi::fill_rule::WINDING,
        EvenOdd = abi::fill_rule::EVEN_ODD,
    }
}

raw_enum! {
    LineCap {
        #[default]
        Butt = abi::line_cap::BUTT,
        Round = abi::line_cap::ROUND,
        Square = abi::line_cap::SQUARE,
    }
}

raw_enum! {
    LineJoin {
        #[default]
        Miter = abi::line_join::MITER,
        Round = abi::line_join::ROUND,
        Bevel = abi::line_join::BEVEL,
    }
}

raw_enum! {
    /// Antialiasing modes. Every mode other than `None` renders with
    /// coverage antialiasing.
    Antialias {
        #[default]
        Default = abi::antialias::DEFAULT,
        None = abi::antialias::NONE,
        Gray = abi::antialias::GRAY,
        Subpixel = abi::antialias::SUBPIXEL,
        Fast = abi::antialias::FAST,
        Good = abi::antialias::GOOD,
        Best = abi::antialias::BEST,
    }
}

raw_enum! {
    FontSlant {
        #[default]
        Normal = abi::font_slant::NORMAL,
        Italic = abi::font_slant::ITALIC,
        Oblique = abi::font_slant::OBLIQUE,
    }
}

raw_enum! {
    FontWeight {
        #[default]
        Normal = abi::font_weight::NORMAL,
        Bold = abi::font_weight::BOLD,
    }
}

raw_enum! {
    /// How a pattern is extended outside its natural area.
    Extend {
        None = abi::extend::NONE,
        Repeat = abi::extend::REPEAT,
        Reflect = abi::extend::REFLECT,
        #[default]
        Pad = abi::extend::PAD,
    }
}

raw_enum! {
    /// Pixel formats. Only `Argb32` surfaces can be created.
    Format {
        Invalid = abi::format::INVALID,
        #[default]
        Argb32 = abi::format::ARGB32,
        Rgb24 = abi::format::RGB24,
        A8 = abi::format::A8,
        A1 = abi::format::A1,
        #[allow(non_camel_case_types)]
        Rgb16_565 = abi::format::RGB16_565,
        Rgb30 = abi::format::RGB30,
    }
}

raw_enum! {
    /// What a pattern paints.
    PatternType {
        #[default]
        Solid = abi::pattern_type::SOLID,
        Surface = abi::pattern_type::SURFACE,
        Linear = abi::pattern_type::LINEAR,
        Radial = abi::pattern_type::RADIAL,
    }
}
