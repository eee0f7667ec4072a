//! Integration tests for drawkit-engine.

use drawkit_engine::{
    abi, status, FontConfig, FontLibrary, RawColor, RawContext, RawPattern, RawSurface,
};
use std::sync::Arc;

fn no_fonts() -> FontLibrary {
    FontLibrary::new(&FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    })
}

fn context(width: u32, height: u32) -> (Arc<RawSurface>, Box<RawContext>) {
    let surface = RawSurface::create(abi::format::ARGB32, width, height).unwrap();
    let ctx = RawContext::create_with_fonts(&surface, &no_fonts());
    (surface, ctx)
}

fn pixel(surface: &RawSurface, x: u32, y: u32) -> [u8; 4] {
    let data = surface.data();
    let idx = ((y * surface.width() + x) * 4) as usize;
    [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
}

/// Test drawing a rectangle into a surface.
#[test]
fn test_draw_rectangle() {
    let (surface, mut ctx) = context(200, 200);

    ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
    ctx.rectangle(10.0, 10.0, 100.0, 100.0);
    ctx.fill();

    assert_eq!(pixel(&surface, 50, 50), [255, 0, 0, 255]);
    assert_eq!(pixel(&surface, 150, 150), [0, 0, 0, 0]);
    assert_eq!(ctx.status(), status::SUCCESS);
}

/// Test a path drawn through a rotated and scaled user space.
#[test]
fn test_transformed_path() {
    let (surface, mut ctx) = context(100, 100);

    ctx.set_source_rgba(0.0, 1.0, 0.0, 1.0);
    ctx.translate(-5.0, -5.0);
    ctx.scale(2.0, 2.0);
    // User (5, 5)..(25, 25) lands on device (0, 0)..(40, 40).
    ctx.rectangle(5.0, 5.0, 20.0, 20.0);
    ctx.fill();

    assert_eq!(pixel(&surface, 20, 20), [0, 255, 0, 255]);
    assert_eq!(pixel(&surface, 45, 45)[3], 0);
}

/// Test that a gradient source paints both ends of its ramp.
#[test]
fn test_linear_gradient_source() {
    let (surface, mut ctx) = context(100, 10);

    let gradient = RawPattern::linear(0.0, 0.0, 100.0, 0.0);
    gradient.add_color_stop(0.0, RawColor::new(1.0, 0.0, 0.0, 1.0));
    gradient.add_color_stop(1.0, RawColor::new(0.0, 0.0, 1.0, 1.0));
    ctx.set_source(&gradient);
    ctx.paint();

    let left = pixel(&surface, 1, 5);
    let right = pixel(&surface, 98, 5);
    assert!(left[0] > 200 && left[2] < 50);
    assert!(right[2] > 200 && right[0] < 50);
}

/// Test painting one surface into another at an offset.
#[test]
fn test_surface_source() {
    let (source, mut src_ctx) = context(10, 10);
    src_ctx.set_source_rgba(0.0, 0.0, 1.0, 1.0);
    src_ctx.paint();

    let (surface, mut ctx) = context(40, 40);
    ctx.set_source_surface(&source, 20.0, 20.0);
    ctx.rectangle(20.0, 20.0, 10.0, 10.0);
    ctx.fill();

    assert_eq!(pixel(&surface, 25, 25), [0, 0, 255, 255]);
    assert_eq!(pixel(&surface, 5, 5)[3], 0);
}

/// Test that a surface source paints only its own area unless extended.
#[test]
fn test_surface_source_extend() {
    let (source, mut src_ctx) = context(4, 4);
    src_ctx.set_source_rgba(0.0, 1.0, 0.0, 1.0);
    src_ctx.paint();

    let (surface, mut ctx) = context(20, 20);
    ctx.set_source_surface(&source, 8.0, 8.0);
    ctx.paint();
    assert_eq!(pixel(&surface, 9, 9), [0, 255, 0, 255]);
    assert_eq!(pixel(&surface, 2, 2)[3], 0);
    assert_eq!(pixel(&surface, 15, 15)[3], 0);

    ctx.source().set_extend(abi::extend::PAD);
    ctx.paint();
    assert_eq!(pixel(&surface, 2, 2), [0, 255, 0, 255]);
    assert_eq!(pixel(&surface, 15, 15), [0, 255, 0, 255]);
}

/// Test that a surface can be used as the source for drawing into itself.
#[test]
fn test_surface_drawn_into_itself() {
    let (surface, mut ctx) = context(20, 10);
    ctx.rectangle(0.0, 0.0, 10.0, 10.0);
    ctx.fill();

    ctx.set_source_surface(&surface, 10.0, 0.0);
    ctx.rectangle(10.0, 0.0, 10.0, 10.0);
    ctx.fill();

    assert_eq!(pixel(&surface, 15, 5), [0, 0, 0, 255]);
    assert_eq!(ctx.status(), status::SUCCESS);
}

/// Test several contexts drawing into one shared surface.
#[test]
fn test_contexts_share_target() {
    let surface = RawSurface::create(abi::format::ARGB32, 20, 20).unwrap();
    let fonts = no_fonts();
    let mut left = RawContext::create_with_fonts(&surface, &fonts);
    let mut right = RawContext::create_with_fonts(&surface, &fonts);

    left.rectangle(0.0, 0.0, 10.0, 20.0);
    left.fill();
    right.set_source_rgba(1.0, 1.0, 1.0, 1.0);
    right.rectangle(10.0, 0.0, 10.0, 20.0);
    right.fill();

    assert_eq!(pixel(&surface, 5, 5), [0, 0, 0, 255]);
    assert_eq!(pixel(&surface, 15, 5), [255, 255, 255, 255]);
    assert_eq!(Arc::strong_count(&surface), 3);
    drop(left);
    drop(right);
    assert_eq!(Arc::strong_count(&surface), 1);
}

/// Test PNG output of a drawn surface.
#[test]
fn test_png_output() {
    let (surface, mut ctx) = context(16, 16);
    ctx.arc(8.0, 8.0, 6.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.fill();

    let mut png_data = Vec::new();
    assert_eq!(surface.write_png(&mut png_data), status::SUCCESS);
    assert_eq!(&png_data[..4], b"\x89PNG");
}
