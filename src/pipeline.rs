//! The one-shot compose pipeline: parse the cover filename, read the quote,
//! load cover and font, lay out the page, rasterize, save.

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::{
    assets::{self, FontSource},
    attribution::Attribution,
    error::QuotecardResult,
    layout::{self, Metrics, TextStyle},
    render,
};

/// A rendered page that has not been written to disk yet.
#[derive(Debug)]
pub struct Composed {
    pub image: RgbImage,
    pub file_name: String,
}

/// Compose the page in memory. The cover filename is validated before any
/// file is read, so a malformed name fails without touching the quote file.
pub fn compose_image(
    quote_path: &Path,
    cover_path: &Path,
    font_path: &Path,
) -> QuotecardResult<Composed> {
    let attribution = Attribution::from_cover_path(cover_path)?;
    let quote = assets::read_quote(quote_path)?;
    let cover = assets::load_cover(cover_path)?;
    let (cover_width, cover_height) = cover.dimensions();

    let loaded = assets::load_font(font_path)?;
    if loaded.source == FontSource::Builtin {
        info!("rendering with the built-in font");
    }

    let metrics = Metrics::for_cover(cover_width, cover_height);
    let quote_style = TextStyle::new(&loaded.font, metrics.quote_px);
    let title_style = TextStyle::new(&loaded.font, metrics.title_px);
    let author_style = TextStyle::new(&loaded.font, metrics.author_px);

    let plan = layout::layout_page(
        cover_width,
        cover_height,
        &quote_style,
        &title_style,
        &author_style,
        &quote,
        &attribution.title,
        &attribution.author,
    );
    let image = render::render_page(&plan, &cover, &quote_style, &title_style, &author_style);

    Ok(Composed {
        image,
        file_name: attribution.output_file_name(),
    })
}

/// Compose and save the JPEG into `out_dir`, returning the written path.
/// Nothing is written when any earlier stage fails.
pub fn compose(
    quote_path: &Path,
    cover_path: &Path,
    font_path: &Path,
    out_dir: &Path,
) -> QuotecardResult<PathBuf> {
    let composed = compose_image(quote_path, cover_path, font_path)?;
    let out_path = out_dir.join(&composed.file_name);
    render::save_jpeg(&composed.image, &out_path)?;
    Ok(out_path)
}
