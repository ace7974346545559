use crate::{
    assets::{
        decode::PreparedImage,
        store::TemplateAssets,
        text::{TextBrushRgba8, TextLayoutEngine},
    },
    compose::layout::{LobbyLayout, centered_square_crop, font_size_for, resolve_display_name},
    foundation::{
        core::{Point, Rect},
        error::{LobbyError, LobbyResult},
    },
    render::{FrameRGBA, cpu::CpuSurface},
    template::TextStyle,
    upload::handler::AvatarImage,
};

/// One generation's inputs, built when the user presses generate.
#[derive(Clone, Debug)]
pub struct LobbyRequest {
    /// Trimmed name, already defaulted when blank.
    pub display_name: String,
    pub avatar: AvatarImage,
}

impl LobbyRequest {
    pub fn new(raw_name: &str, avatar: AvatarImage, style: &TextStyle) -> Self {
        Self {
            display_name: resolve_display_name(raw_name, style),
            avatar,
        }
    }
}

/// Composite the lobby screenshot: background, cropped avatar, frame overlay, then the name.
///
/// Output size is always the background's native size.
#[tracing::instrument(skip_all, fields(name = %request.display_name))]
pub fn compose(assets: &TemplateAssets, request: &LobbyRequest) -> LobbyResult<FrameRGBA> {
    let canvas = assets
        .background
        .canvas()
        .map_err(|e| LobbyError::generation(format!("background: {}", e.detail())))?;
    let layout = LobbyLayout::compute(canvas, &assets.template.layout);

    let mut surface = CpuSurface::new(canvas)?;
    draw_layers(
        &mut surface,
        &assets.background,
        &assets.frame,
        &request.avatar.image,
        &layout,
    )?;

    let style = &assets.template.text;
    let size_px = font_size_for(&request.display_name, style);
    let mut engine = TextLayoutEngine::new();
    let text = engine
        .layout_line(
            &request.display_name,
            &assets.font,
            size_px,
            TextBrushRgba8::from(style.color_rgba8),
        )
        .map_err(|e| LobbyError::generation(format!("lay out display name: {}", e.detail())))?;
    let origin = centered_baseline_origin(&text, layout.label_anchor);
    surface.fill_text(&text, &assets.font, origin);

    tracing::debug!(size_px, width = canvas.width, height = canvas.height, "lobby composed");
    Ok(surface.finish())
}

/// Image layers only, in stacking order.
pub(crate) fn draw_layers(
    surface: &mut CpuSurface,
    background: &PreparedImage,
    frame: &PreparedImage,
    avatar: &PreparedImage,
    layout: &LobbyLayout,
) -> LobbyResult<()> {
    for (what, img) in [("background", background), ("frame", frame), ("avatar", avatar)] {
        if img.width == 0 || img.height == 0 {
            return Err(LobbyError::generation(format!("{what} image is empty")));
        }
    }

    let canvas = layout.canvas;
    surface.draw_image(
        background,
        full_rect(background),
        Rect::new(0.0, 0.0, canvas.width_f64(), canvas.height_f64()),
    )?;
    surface.draw_image(
        avatar,
        centered_square_crop(avatar.width, avatar.height),
        layout.avatar,
    )?;
    surface.draw_image(frame, full_rect(frame), layout.frame)?;
    Ok(())
}

/// Top-left origin that centers `text` horizontally on `anchor.x` and puts its first baseline
/// on `anchor.y`.
fn centered_baseline_origin(
    text: &parley::Layout<TextBrushRgba8>,
    anchor: Point,
) -> Point {
    let baseline = text
        .lines()
        .next()
        .map(|line| line.metrics().baseline)
        .unwrap_or(0.0);
    Point::new(
        anchor.x - f64::from(text.width()) / 2.0,
        anchor.y - f64::from(baseline),
    )
}

fn full_rect(img: &PreparedImage) -> Rect {
    Rect::new(0.0, 0.0, f64::from(img.width), f64::from(img.height))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
