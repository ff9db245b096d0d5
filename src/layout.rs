//! Text measurement and page layout.
//!
//! All sizes are derived from the cover: the canvas is three covers wide and
//! one cover tall, the left two thirds hold the text. Everything here is
//! plain arithmetic over measured pixel widths; no drawing happens in this
//! module.

use rusttype::{Font, Scale, point};
use tracing::debug;

/// Pixel sizes derived from the cover dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// Left/right text margin, 5% of cover width.
    pub margin: u32,
    /// Gap between consecutive lines, 2% of cover height.
    pub spacing: u32,
    /// Width of the blockquote bar, 1% of cover width.
    pub bar_width: u32,
    /// Quote font size, 5% of cover height.
    pub quote_px: u32,
    /// Title font size, 4% of cover height.
    pub title_px: u32,
    /// Author font size, 3.5% of cover height.
    pub author_px: u32,
}

impl Metrics {
    pub fn for_cover(width: u32, height: u32) -> Self {
        Self {
            margin: (width as f32 * 0.05) as u32,
            spacing: (height as f32 * 0.02) as u32,
            bar_width: (width as f32 * 0.01) as u32,
            // Tiny covers would truncate to a zero-height face.
            quote_px: ((height as f32 * 0.05) as u32).max(1),
            title_px: ((height as f32 * 0.04) as u32).max(1),
            author_px: ((height as f32 * 0.035) as u32).max(1),
        }
    }

    /// Width available to title/author lines on the left two thirds.
    pub fn text_area_width(&self, cover_width: u32) -> u32 {
        (2 * cover_width).saturating_sub(2 * self.margin)
    }

    /// Quote lines are narrower: they leave room for the blockquote bar.
    pub fn quote_area_width(&self, cover_width: u32) -> u32 {
        self.text_area_width(cover_width).saturating_sub(self.margin)
    }
}

/// A font at a fixed pixel size, with the measurements layout needs.
pub struct TextStyle<'f> {
    pub font: &'f Font<'static>,
    pub scale: Scale,
}

impl<'f> TextStyle<'f> {
    pub fn new(font: &'f Font<'static>, size_px: u32) -> Self {
        Self {
            font,
            scale: Scale::uniform(size_px as f32),
        }
    }

    /// Rendered pixel width of a single line (kerned advance width).
    pub fn line_width(&self, text: &str) -> u32 {
        let end = self
            .font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        end.ceil() as u32
    }

    /// Vertical extent of a line (ascent to descent).
    pub fn line_height(&self) -> u32 {
        let vm = self.font.v_metrics(self.scale);
        (vm.ascent - vm.descent).ceil() as u32
    }

    /// Distance from the top of a line to its baseline.
    pub fn ascent(&self) -> f32 {
        self.font.v_metrics(self.scale).ascent
    }
}

/// Greedy word wrap against a rendered pixel width.
pub fn wrap_text(style: &TextStyle<'_>, text: &str, max_width: u32) -> Vec<String> {
    wrap_words(text.split_whitespace(), |line| style.line_width(line), max_width)
}

/// The wrap itself, generic over the measurement so the arithmetic can be
/// tested without a font. Words accumulate into a line while the candidate
/// still fits; the overflowing word starts the next line. A word wider than
/// `max_width` is emitted alone, over-wide.
pub fn wrap_words<'w, I, M>(words: I, mut measure: M, max_width: u32) -> Vec<String>
where
    I: IntoIterator<Item = &'w str>,
    M: FnMut(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Wrapped lines of one text, placed on the canvas. All lines of a block
/// share one style; which one is decided by the block's position in the plan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacedBlock {
    pub lines: Vec<PlacedLine>,
}

/// Fully positioned page: canvas size, blockquote bar, and the three text
/// blocks in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cover_x: u32,
    pub bar: Rect,
    pub quote: PlacedBlock,
    pub title: PlacedBlock,
    pub author: PlacedBlock,
}

/// Compute the whole page layout.
///
/// The combined block (quote, a double spacing gap, title, author) is
/// centered vertically on the cover height. The starting y is not clamped;
/// an overflowing block starts above the canvas and is clipped at draw time.
#[allow(clippy::too_many_arguments)]
pub fn layout_page(
    cover_width: u32,
    cover_height: u32,
    quote_style: &TextStyle<'_>,
    title_style: &TextStyle<'_>,
    author_style: &TextStyle<'_>,
    quote: &str,
    title: &str,
    author: &str,
) -> LayoutPlan {
    let metrics = Metrics::for_cover(cover_width, cover_height);
    let spacing = metrics.spacing;

    let quote_lines = wrap_text(quote_style, quote, metrics.quote_area_width(cover_width));
    let title_lines = wrap_text(title_style, title, metrics.text_area_width(cover_width));
    let author_lines = wrap_text(author_style, author, metrics.text_area_width(cover_width));

    let quote_span = quote_lines.len() as u32 * (quote_style.line_height() + spacing);
    let title_span = title_lines.len() as u32 * (title_style.line_height() + spacing);
    let author_span = author_lines.len() as u32 * (author_style.line_height() + spacing);
    let total_height = quote_span + 2 * spacing + title_span + author_span;

    let mut y = (cover_height as i32 - total_height as i32) / 2;

    debug!(
        quote_lines = quote_lines.len(),
        title_lines = title_lines.len(),
        author_lines = author_lines.len(),
        total_height,
        start_y = y,
        "layout computed"
    );

    let bar = Rect {
        x: metrics.margin as i32,
        y,
        width: metrics.bar_width,
        height: quote_span,
    };

    // Quote lines sit past the bar by half a margin.
    let quote_x = (metrics.margin + metrics.bar_width + metrics.margin / 2) as i32;
    let quote = place_block(quote_lines, quote_x, &mut y, quote_style.line_height(), spacing);

    // One extra gap between quote and attribution.
    y += spacing as i32;

    let margin_x = metrics.margin as i32;
    let title = place_block(title_lines, margin_x, &mut y, title_style.line_height(), spacing);
    let author = place_block(author_lines, margin_x, &mut y, author_style.line_height(), spacing);

    LayoutPlan {
        canvas_width: 3 * cover_width,
        canvas_height: cover_height,
        cover_x: 2 * cover_width,
        bar,
        quote,
        title,
        author,
    }
}

fn place_block(
    lines: Vec<String>,
    x: i32,
    y: &mut i32,
    line_height: u32,
    spacing: u32,
) -> PlacedBlock {
    let mut placed = Vec::with_capacity(lines.len());
    for text in lines {
        placed.push(PlacedLine { text, x, y: *y });
        *y += (line_height + spacing) as i32;
    }
    PlacedBlock { lines: placed }
}
