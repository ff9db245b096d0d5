use std::path::Path;

use crate::error::{QuotecardError, QuotecardResult};

/// Delimiter between title and author in a cover filename.
const SEPARATOR: &str = " - ";

/// Who wrote what, derived from a cover filename of the form
/// `"<Title> - <Author>.<ext>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribution {
    pub title: String,
    pub author: String,
}

impl Attribution {
    /// Parse the base filename (sans extension) of `cover_path`.
    ///
    /// Exactly one `" - "` separator and two non-empty segments are
    /// required; anything else is a hard error.
    pub fn from_cover_path(cover_path: &Path) -> QuotecardResult<Self> {
        let stem = cover_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                QuotecardError::cover_name(format!(
                    "cover path '{}' has no usable file name",
                    cover_path.display()
                ))
            })?;

        let mut parts = stem.split(SEPARATOR);
        let (Some(title), Some(author), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(QuotecardError::cover_name(format!(
                "cover file must be named 'Book Title - Author.ext', got '{stem}'"
            )));
        };
        if title.is_empty() || author.is_empty() {
            return Err(QuotecardError::cover_name(format!(
                "cover file must be named 'Book Title - Author.ext', got '{stem}'"
            )));
        }

        // Strip the "data/" prefix some cover exports carry in their title.
        let title = title.replace("data/", "");

        Ok(Self {
            title,
            author: author.to_string(),
        })
    }

    /// Name of the composed output image.
    pub fn output_file_name(&self) -> String {
        format!("{} - Quote.jpg", self.title)
    }
}
