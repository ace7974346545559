use super::*;
use crate::test_support::{assert_close, pixel, solid, tricolor};

#[test]
fn surface_rejects_oversized_canvas() {
    let canvas = Canvas::new(70_000, 10).unwrap();
    assert!(CpuSurface::new(canvas).is_err());
}

#[test]
fn empty_surface_reads_back_transparent() {
    let surface = CpuSurface::new(Canvas::new(3, 2).unwrap()).unwrap();
    let frame = surface.finish();
    assert_eq!((frame.width, frame.height), (3, 2));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 3 * 2 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn draw_image_places_and_scales_into_dst() {
    let mut surface = CpuSurface::new(Canvas::new(16, 16).unwrap()).unwrap();
    let red = solid(4, 4, [255, 0, 0, 255]);
    surface
        .draw_image(
            &red,
            Rect::new(0.0, 0.0, 4.0, 4.0),
            Rect::new(4.0, 4.0, 12.0, 12.0),
        )
        .unwrap();
    let frame = surface.finish();

    assert_close(pixel(&frame.data, 16, 8, 8), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame.data, 16, 1, 1), [0, 0, 0, 0]);
    assert_eq!(pixel(&frame.data, 16, 14, 14), [0, 0, 0, 0]);
}

#[test]
fn draw_image_honours_source_crop() {
    let mut surface = CpuSurface::new(Canvas::new(8, 8).unwrap()).unwrap();
    let bands = tricolor(30, 10);
    surface
        .draw_image(
            &bands,
            Rect::new(10.0, 0.0, 20.0, 10.0),
            Rect::new(0.0, 0.0, 8.0, 8.0),
        )
        .unwrap();
    let frame = surface.finish();

    assert_close(pixel(&frame.data, 8, 4, 4), [0, 255, 0, 255]);
}

#[test]
fn later_draws_cover_earlier_ones() {
    let mut surface = CpuSurface::new(Canvas::new(8, 8).unwrap()).unwrap();
    let full = Rect::new(0.0, 0.0, 8.0, 8.0);
    surface
        .draw_image(&solid(2, 2, [255, 0, 0, 255]), Rect::new(0.0, 0.0, 2.0, 2.0), full)
        .unwrap();
    surface
        .draw_image(&solid(2, 2, [0, 0, 255, 255]), Rect::new(0.0, 0.0, 2.0, 2.0), full)
        .unwrap();
    let frame = surface.finish();
    assert_close(pixel(&frame.data, 8, 4, 4), [0, 0, 255, 255]);
}

#[test]
fn draw_image_rejects_empty_rects() {
    let mut surface = CpuSurface::new(Canvas::new(4, 4).unwrap()).unwrap();
    let img = solid(2, 2, [1, 2, 3, 255]);
    let ok = Rect::new(0.0, 0.0, 2.0, 2.0);
    let empty = Rect::new(1.0, 1.0, 1.0, 3.0);
    assert!(surface.draw_image(&img, empty, ok).is_err());
    assert!(surface.draw_image(&img, ok, empty).is_err());
}
