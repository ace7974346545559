use std::sync::Arc;

use crate::{
    assets::{
        decode::PreparedImage,
        text::{LobbyFont, TextBrushRgba8},
    },
    foundation::{
        core::{Affine, Canvas, Point, Rect},
        error::{LobbyError, LobbyResult},
    },
    render::FrameRGBA,
};

/// Immediate-mode CPU surface. Draw calls land in painter's order; [`CpuSurface::finish`]
/// rasterizes them and reads the pixels back.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> LobbyResult<Self> {
        let (width, height) = canvas.to_u16()?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Draw the `src` region of `image` scaled into `dst`, like a 9-argument `drawImage`.
    pub fn draw_image(&mut self, image: &PreparedImage, src: Rect, dst: Rect) -> LobbyResult<()> {
        if src.width() <= 0.0 || src.height() <= 0.0 {
            return Err(LobbyError::generation("image source rect is empty"));
        }
        if dst.width() <= 0.0 || dst.height() <= 0.0 {
            return Err(LobbyError::generation("image destination rect is empty"));
        }

        let paint = image_paint(image)?;
        let transform = Affine::translate((dst.x0, dst.y0))
            * Affine::scale_non_uniform(dst.width() / src.width(), dst.height() / src.height())
            * Affine::translate((-src.x0, -src.y0));

        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(src));
        Ok(())
    }

    /// Fill every glyph run of `layout`, with the layout's top-left corner at `origin`.
    pub fn fill_text(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &LobbyFont,
        origin: Point,
    ) {
        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            0,
        );

        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    pub fn finish(mut self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_paint(image: &PreparedImage) -> LobbyResult<vello_cpu::Image> {
    let pixmap = image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> LobbyResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LobbyError::generation("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LobbyError::generation("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(LobbyError::generation(
            "prepared image byte length mismatch",
        ));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
