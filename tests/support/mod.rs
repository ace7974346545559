#![allow(dead_code)]

use std::{io::Cursor, path::Path};

const HOST_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn host_font_bytes() -> Option<Vec<u8>> {
    let bytes = HOST_FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .and_then(|p| std::fs::read(p).ok());
    if bytes.is_none() {
        eprintln!("skipping text rendering checks: no TrueType font found on this host");
    }
    bytes
}

pub fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    let dyn_img = image::DynamicImage::ImageRgba8(img);
    let dyn_img = if format == image::ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(dyn_img.to_rgb8())
    } else {
        dyn_img
    };
    dyn_img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

/// Writes a JPEG background, a ring-shaped PNG frame and a PNG avatar into `dir`.
pub fn write_fixture_assets(dir: &Path, bg_size: (u32, u32)) {
    std::fs::create_dir_all(dir).unwrap();

    let bg = image::RgbaImage::from_pixel(bg_size.0, bg_size.1, image::Rgba([20, 30, 60, 255]));
    std::fs::write(dir.join("bg.jpg"), encode(bg, image::ImageFormat::Jpeg)).unwrap();

    let frame = image::RgbaImage::from_fn(100, 100, |x, y| {
        let edge = x < 10 || y < 10 || x >= 90 || y >= 90;
        if edge {
            image::Rgba([230, 180, 40, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    std::fs::write(dir.join("frame.png"), encode(frame, image::ImageFormat::Png)).unwrap();

    let avatar = image::RgbaImage::from_pixel(320, 180, image::Rgba([200, 40, 40, 255]));
    std::fs::write(dir.join("avatar.png"), encode(avatar, image::ImageFormat::Png)).unwrap();
}
