//! Rasterization of a [`LayoutPlan`] onto an RGB canvas.

use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::point;

use crate::{
    error::{QuotecardError, QuotecardResult},
    layout::{LayoutPlan, PlacedBlock, Rect, TextStyle},
};

/// Flat background for the text area (`#f5f5f5`).
pub const BACKGROUND: Rgb<u8> = Rgb([0xf5, 0xf5, 0xf5]);
/// Dark gray body text.
pub const TEXT_COLOR: Rgb<u8> = Rgb([50, 50, 50]);
/// Gray blockquote bar.
pub const BAR_COLOR: Rgb<u8> = Rgb([100, 100, 100]);

/// Render the full page: background, cover on the right third, blockquote
/// bar, then quote/title/author text.
pub fn render_page(
    plan: &LayoutPlan,
    cover: &RgbImage,
    quote_style: &TextStyle<'_>,
    title_style: &TextStyle<'_>,
    author_style: &TextStyle<'_>,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(plan.canvas_width, plan.canvas_height, BACKGROUND);

    // Cover is pasted unmodified at the right third.
    image::imageops::replace(&mut canvas, cover, i64::from(plan.cover_x), 0);

    fill_rect(&mut canvas, plan.bar, BAR_COLOR);

    draw_block(&mut canvas, &plan.quote, quote_style, TEXT_COLOR);
    draw_block(&mut canvas, &plan.title, title_style, TEXT_COLOR);
    draw_block(&mut canvas, &plan.author, author_style, TEXT_COLOR);

    canvas
}

/// Fill a rectangle, clipping against the canvas. The bar may start above
/// the canvas when the text block overflows.
pub fn fill_rect(img: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = rect.x.saturating_add_unsigned(rect.width).max(0) as u32;
    let y1 = rect.y.saturating_add_unsigned(rect.height).max(0) as u32;
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

fn draw_block(img: &mut RgbImage, block: &PlacedBlock, style: &TextStyle<'_>, color: Rgb<u8>) {
    for line in &block.lines {
        draw_line(img, style, line.x, line.y, color, &line.text);
    }
}

/// Rasterize one line of text with its top-left corner at (x, y), blending
/// glyph coverage over the existing pixels. Out-of-bounds pixels are clipped.
pub fn draw_line(
    img: &mut RgbImage,
    style: &TextStyle<'_>,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let baseline = y as f32 + style.ascent();
    for glyph in style.font.layout(text, style.scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= img.width() || py >= img.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = img.get_pixel_mut(px, py);
            let inv = 1.0 - coverage;
            for c in 0..3 {
                dst.0[c] = (color.0[c] as f32 * coverage + dst.0[c] as f32 * inv) as u8;
            }
        });
    }
}

pub fn save_jpeg(img: &RgbImage, path: &Path) -> QuotecardResult<()> {
    img.save_with_format(path, image::ImageFormat::Jpeg)
        .map_err(|e| QuotecardError::encode(format!("write jpeg '{}': {e}", path.display())))
}
