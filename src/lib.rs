#![forbid(unsafe_code)]

pub mod assets;
pub mod attribution;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod render;

pub use assets::{DEFAULT_FONT_FILE, FontSource, LoadedFont, load_cover, load_font, read_quote};
pub use attribution::Attribution;
pub use error::{QuotecardError, QuotecardResult};
pub use layout::{LayoutPlan, Metrics, TextStyle, layout_page, wrap_text, wrap_words};
pub use pipeline::{Composed, compose, compose_image};
