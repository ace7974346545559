use super::*;

fn stock() -> (LayoutConfig, TextStyle) {
    (LayoutConfig::default(), TextStyle::default())
}

#[test]
fn anchors_for_1000x1600_background() {
    let (cfg, _) = stock();
    let layout = LobbyLayout::compute(Canvas::new(1000, 1600).unwrap(), &cfg);

    assert_eq!(layout.frame.x0, 353.5);
    assert_eq!(layout.frame.y0, 371.5);
    assert_eq!(layout.frame.width(), 293.0);
    assert_eq!(layout.frame.height(), 293.0);

    assert_eq!(layout.avatar.x0, 397.5);
    assert_eq!(layout.avatar.y0, 412.5);
    assert_eq!(layout.avatar.width(), 205.0);
    assert_eq!(layout.avatar.height(), 205.0);

    assert_eq!(layout.label_anchor, Point::new(513.0, 679.5));
}

#[test]
fn frame_may_start_above_the_canvas() {
    let (cfg, _) = stock();
    let layout = LobbyLayout::compute(Canvas::new(400, 600).unwrap(), &cfg);
    // (600 - 293) / 2 - 282
    assert_eq!(layout.frame.y0, -128.5);
    assert_eq!(layout.avatar.y0, -128.5 + 44.0 - 3.0);
}

#[test]
fn avatar_is_horizontally_centered_in_frame() {
    let (cfg, _) = stock();
    let layout = LobbyLayout::compute(Canvas::new(720, 1280).unwrap(), &cfg);
    let left = layout.avatar.x0 - layout.frame.x0;
    let right = layout.frame.x1 - layout.avatar.x1;
    assert_eq!(left, right);
    let top = layout.avatar.y0 - layout.frame.y0;
    let bottom = layout.frame.y1 - layout.avatar.y1;
    assert_eq!(bottom - top, 6.0);
}

#[test]
fn crop_is_centered_square_for_wide_and_tall_images() {
    let wide = centered_square_crop(300, 100);
    assert_eq!(wide, Rect::new(100.0, 0.0, 200.0, 100.0));
    assert_eq!(wide.x0, 300.0 - wide.x1);

    let tall = centered_square_crop(120, 401);
    assert_eq!(tall.width(), 120.0);
    assert_eq!(tall.height(), 120.0);
    assert_eq!(tall.y0, 140.5);
    assert_eq!(tall.y0, 401.0 - tall.y1);

    assert_eq!(centered_square_crop(64, 64), Rect::new(0.0, 0.0, 64.0, 64.0));
}

#[test]
fn short_names_use_max_size() {
    let (_, style) = stock();
    for name in ["", "A", "ML Player", "ElevenChars"] {
        assert!(name.chars().count() <= 11);
        assert_eq!(font_size_for(name, &style), 36.0);
    }
}

#[test]
fn long_names_shrink_then_clamp() {
    let (_, style) = stock();
    assert_eq!(font_size_for("TwelveChars!", &style), 34.0);
    assert_eq!(font_size_for(&"x".repeat(16), &style), 26.0);
    assert_eq!(font_size_for(&"x".repeat(17), &style), 24.0);
    assert_eq!(font_size_for(&"x".repeat(30), &style), 24.0);
}

#[test]
fn font_size_counts_characters_not_bytes() {
    let (_, style) = stock();
    let name = "ÅÆØåæøÅÆØåæ";
    assert_eq!(name.chars().count(), 11);
    assert!(name.len() > 11);
    assert_eq!(font_size_for(name, &style), 36.0);
}

#[test]
fn blank_names_fall_back_to_default() {
    let (_, style) = stock();
    assert_eq!(resolve_display_name("", &style), "ML Player");
    assert_eq!(resolve_display_name("   \t\n", &style), "ML Player");
    assert_eq!(resolve_display_name("  Ling  ", &style), "Ling");
}

#[test]
fn font_size_counts_utf16_units() {
    let (_, style) = stock();
    let flames = "🔥".repeat(6);
    assert_eq!(flames.chars().count(), 6);
    assert_eq!(font_size_for(&flames, &style), 34.0);
    assert_eq!(font_size_for("Ling🔥🔥🔥🔥", &style), 34.0);
    assert_eq!(font_size_for("Ling🔥🔥🔥", &style), 36.0);
}

#[test]
fn byte_order_mark_counts_as_blank() {
    let (_, style) = stock();
    assert_eq!(resolve_display_name("\u{feff}", &style), "ML Player");
    assert_eq!(resolve_display_name(" \u{feff}Ling\u{feff} ", &style), "Ling");
}
