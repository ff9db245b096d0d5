use std::path::{Path, PathBuf};

use image::RgbImage;
use rusttype::Font;
use tracing::warn;

use crate::error::{QuotecardError, QuotecardResult};

/// Font file looked up in the working directory by default.
pub const DEFAULT_FONT_FILE: &str = "OpenSans-Regular.ttf";

/// Bundled fallback face, used when the font file cannot be loaded.
const BUILTIN_FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Read the quote file as UTF-8 and trim surrounding whitespace.
pub fn read_quote(path: &Path) -> QuotecardResult<String> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|_| QuotecardError::QuoteRead(path.to_path_buf()))
}

/// Decode the cover image. Alpha is flattened; the canvas is opaque RGB.
pub fn load_cover(path: &Path) -> QuotecardResult<RgbImage> {
    let img = image::open(path).map_err(|_| QuotecardError::CoverRead(path.to_path_buf()))?;
    Ok(img.to_rgb8())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

pub struct LoadedFont {
    pub font: Font<'static>,
    pub source: FontSource,
}

/// Load a TrueType font from `path`, falling back to the bundled face when
/// the file is missing or unparsable. The fallback is a recovered value,
/// never a fatal error.
pub fn load_font(path: &Path) -> QuotecardResult<LoadedFont> {
    match std::fs::read(path) {
        Ok(bytes) => match Font::try_from_vec(bytes) {
            Some(font) => {
                return Ok(LoadedFont {
                    font,
                    source: FontSource::File(path.to_path_buf()),
                });
            }
            None => warn!(
                path = %path.display(),
                "font file is not a usable TrueType font, using built-in font"
            ),
        },
        Err(err) => warn!(
            path = %path.display(),
            %err,
            "font file not found, using built-in font"
        ),
    }

    Ok(LoadedFont {
        font: builtin_font()?,
        source: FontSource::Builtin,
    })
}

pub fn builtin_font() -> QuotecardResult<Font<'static>> {
    Font::try_from_bytes(BUILTIN_FONT_BYTES)
        .ok_or_else(|| QuotecardError::font("bundled font failed to parse"))
}
