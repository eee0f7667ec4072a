//! Numeric encodings of the engine's enumerations.
//!
//! Callers pass these integers verbatim. The tables below are the single
//! place where they are translated into rasterizer types, and their values
//! must stay stable.

/// Compositing operators.
pub mod operator {
    pub const CLEAR: i32 = 0;
    pub const SOURCE: i32 = 1;
    pub const OVER: i32 = 2;
    pub const IN: i32 = 3;
    pub const OUT: i32 = 4;
    pub const ATOP: i32 = 5;
    pub const DEST: i32 = 6;
    pub const DEST_OVER: i32 = 7;
    pub const DEST_IN: i32 = 8;
    pub const DEST_OUT: i32 = 9;
    pub const DEST_ATOP: i32 = 10;
    pub const XOR: i32 = 11;
    pub const ADD: i32 = 12;
    pub const SATURATE: i32 = 13;
    pub const MULTIPLY: i32 = 14;
    pub const SCREEN: i32 = 15;
    pub const OVERLAY: i32 = 16;
    pub const DARKEN: i32 = 17;
    pub const LIGHTEN: i32 = 18;
    pub const COLOR_DODGE: i32 = 19;
    pub const COLOR_BURN: i32 = 20;
    pub const HARD_LIGHT: i32 = 21;
    pub const SOFT_LIGHT: i32 = 22;
    pub const DIFFERENCE: i32 = 23;
    pub const EXCLUSION: i32 = 24;
    pub const HSL_HUE: i32 = 25;
    pub const HSL_SATURATION: i32 = 26;
    pub const HSL_COLOR: i32 = 27;
    pub const HSL_LUMINOSITY: i32 = 28;
}

pub mod fill_rule {
    pub const WINDING: i32 = 0;
    pub const EVEN_ODD: i32 = 1;
}

pub mod line_cap {
    pub const BUTT: i32 = 0;
    pub const ROUND: i32 = 1;
    pub const SQUARE: i32 = 2;
}

pub mod line_join {
    pub const MITER: i32 = 0;
    pub const ROUND: i32 = 1;
    pub const BEVEL: i32 = 2;
}

pub mod antialias {
    pub const DEFAULT: i32 = 0;
    pub const NONE: i32 = 1;
    pub const GRAY: i32 = 2;
    pub const SUBPIXEL: i32 = 3;
    pub const FAST: i32 = 4;
    pub const GOOD: i32 = 5;
    pub const BEST: i32 = 6;
}

pub mod font_slant {
    pub const NORMAL: i32 = 0;
    pub const ITALIC: i32 = 1;
    pub const OBLIQUE: i32 = 2;
}

pub mod font_weight {
    pub const NORMAL: i32 = 0;
    pub const BOLD: i32 = 1;
}

/// How a pattern is extended outside its natural area.
pub mod extend {
    pub const NONE: i32 = 0;
    pub const REPEAT: i32 = 1;
    pub const REFLECT: i32 = 2;
    pub const PAD: i32 = 3;
}

pub mod format {
    pub const INVALID: i32 = -1;
    pub const ARGB32: i32 = 0;
    pub const RGB24: i32 = 1;
    pub const A8: i32 = 2;
    pub const A1: i32 = 3;
    pub const RGB16_565: i32 = 4;
    pub const RGB30: i32 = 5;
}

/// Pattern kinds reported by [`crate::RawPattern::pattern_type`].
pub mod pattern_type {
    pub const SOLID: i32 = 0;
    pub const SURFACE: i32 = 1;
    pub const LINEAR: i32 = 2;
    pub const RADIAL: i32 = 3;
}

/// Initial values of the numeric graphics state.
pub mod defaults {
    pub const LINE_WIDTH: f64 = 2.0;
    pub const MITER_LIMIT: f64 = 10.0;
    pub const FONT_SIZE: f64 = 10.0;
}

/// Translate an operator code into a tiny-skia blend mode.
///
/// Returns `None` for codes outside the table.
pub fn blend_mode(op: i32) -> Option<tiny_skia::BlendMode> {
    use tiny_skia::BlendMode;

    let mode = match op {
        operator::CLEAR => BlendMode::Clear,
        operator::SOURCE => BlendMode::Source,
        operator::OVER => BlendMode::SourceOver,
        operator::IN => BlendMode::SourceIn,
        operator::OUT => BlendMode::SourceOut,
        operator::ATOP => BlendMode::SourceAtop,
        operator::DEST => BlendMode::Destination,
        operator::DEST_OVER => BlendMode::DestinationOver,
        operator::DEST_IN => BlendMode::DestinationIn,
        operator::DEST_OUT => BlendMode::DestinationOut,
        operator::DEST_ATOP => BlendMode::DestinationAtop,
        operator::XOR => BlendMode::Xor,
        operator::ADD => BlendMode::Plus,
        // tiny-skia has no saturating add; plus is the closest match.
        operator::SATURATE => BlendMode::Plus,
        operator::MULTIPLY => BlendMode::Multiply,
        operator::SCREEN => BlendMode::Screen,
        operator::OVERLAY => BlendMode::Overlay,
        operator::DARKEN => BlendMode::Darken,
        operator::LIGHTEN => BlendMode::Lighten,
        operator::COLOR_DODGE => BlendMode::ColorDodge,
        operator::COLOR_BURN => BlendMode::ColorBurn,
        operator::HARD_LIGHT => BlendMode::HardLight,
        operator::SOFT_LIGHT => BlendMode::SoftLight,
        operator::DIFFERENCE => BlendMode::Difference,
        operator::EXCLUSION => BlendMode::Exclusion,
        operator::HSL_HUE => BlendMode::Hue,
        operator::HSL_SATURATION => BlendMode::Saturation,
        operator::HSL_COLOR => BlendMode::Color,
        operator::HSL_LUMINOSITY => BlendMode::Luminosity,
        _ => return None,
    };
    Some(mode)
}

pub fn skia_fill_rule(rule: i32) -> tiny_skia::FillRule {
    match rule {
        fill_rule::EVEN_ODD => tiny_skia::FillRule::EvenOdd,
        _ => tiny_skia::FillRule::Winding,
    }
}

pub fn skia_line_cap(cap: i32) -> tiny_skia::LineCap {
    match cap {
        line_cap::ROUND => tiny_skia::LineCap::Round,
        line_cap::SQUARE => tiny_skia::LineCap::Square,
        _ => tiny_skia::LineCap::Butt,
    }
}

pub fn skia_line_join(join: i32) -> tiny_skia::LineJoin {
    match join {
        line_join::ROUND => tiny_skia::LineJoin::Round,
        line_join::BEVEL => tiny_skia::LineJoin::Bevel,
        _ => tiny_skia::LineJoin::Miter,
    }
}

/// Gradients and surface patterns cannot leave their area transparent in
/// tiny-skia, so `NONE` falls back to padding.
pub fn skia_spread_mode(mode: i32) -> tiny_skia::SpreadMode {
    match mode {
        extend::REPEAT => tiny_skia::SpreadMode::Repeat,
        extend::REFLECT => tiny_skia::SpreadMode::Reflect,
        _ => tiny_skia::SpreadMode::Pad,
    }
}

pub fn is_anti_aliased(mode: i32) -> bool {
    mode != antialias::NONE
}

pub(crate) fn is_valid_operator(op: i32) -> bool {
    (operator::CLEAR..=operator::HSL_LUMINOSITY).contains(&op)
}

pub(crate) fn is_valid_fill_rule(rule: i32) -> bool {
    matches!(rule, fill_rule::WINDING | fill_rule::EVEN_ODD)
}

pub(crate) fn is_valid_line_cap(cap: i32) -> bool {
    (line_cap::BUTT..=line_cap::SQUARE).contains(&cap)
}

pub(crate) fn is_valid_line_join(join: i32) -> bool {
    (line_join::MITER..=line_join::BEVEL).contains(&join)
}

pub(crate) fn is_valid_antialias(mode: i32) -> bool {
    (antialias::DEFAULT..=antialias::BEST).contains(&mode)
}

pub(crate) fn is_valid_extend(mode: i32) -> bool {
    (extend::NONE..=extend::PAD).contains(&mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tiny_skia::BlendMode;

    #[rstest]
    #[case(operator::CLEAR, BlendMode::Clear)]
    #[case(operator::SOURCE, BlendMode::Source)]
    #[case(operator::OVER, BlendMode::SourceOver)]
    #[case(operator::DEST_OUT, BlendMode::DestinationOut)]
    #[case(operator::XOR, BlendMode::Xor)]
    #[case(operator::ADD, BlendMode::Plus)]
    #[case(operator::MULTIPLY, BlendMode::Multiply)]
    #[case(operator::HSL_LUMINOSITY, BlendMode::Luminosity)]
    fn test_blend_mode_table(#[case] op: i32, #[case] expected: BlendMode) {
        assert_eq!(blend_mode(op), Some(expected));
    }

    #[test]
    fn test_every_operator_code_maps() {
        for op in operator::CLEAR..=operator::HSL_LUMINOSITY {
            assert!(blend_mode(op).is_some(), "operator {}", op);
            assert!(is_valid_operator(op));
        }
        assert_eq!(blend_mode(-1), None);
        assert_eq!(blend_mode(operator::HSL_LUMINOSITY + 1), None);
    }

    #[test]
    fn test_fill_rule_and_stroke_tables() {
        assert_eq!(skia_fill_rule(fill_rule::WINDING), tiny_skia::FillRule::Winding);
        assert_eq!(skia_fill_rule(fill_rule::EVEN_ODD), tiny_skia::FillRule::EvenOdd);
        assert_eq!(skia_line_cap(line_cap::SQUARE), tiny_skia::LineCap::Square);
        assert_eq!(skia_line_join(line_join::BEVEL), tiny_skia::LineJoin::Bevel);
        assert!(!is_anti_aliased(antialias::NONE));
        assert!(is_anti_aliased(antialias::BEST));
    }
}
