use std::path::{Path, PathBuf};

use clap::Parser;
use quotecard::QuotecardError;

#[derive(Parser, Debug)]
#[command(name = "quotecard", version, about = "Compose a book-quote image")]
struct Cli {
    /// Path to a UTF-8 text file containing the quote.
    quote_file: PathBuf,

    /// Path to the cover image, named "<Title> - <Author>.<ext>".
    cover: PathBuf,

    /// TrueType font for all text. Falls back to a built-in font when the
    /// file cannot be loaded.
    #[arg(long, default_value = quotecard::DEFAULT_FONT_FILE)]
    font: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match quotecard::compose(&cli.quote_file, &cli.cover, &cli.font, Path::new(".")) {
        Ok(out) => {
            println!("Image saved as {}", out.display());
            Ok(())
        }
        // Unreadable inputs are reported plainly, without a backtrace.
        Err(err @ (QuotecardError::QuoteRead(_) | QuotecardError::CoverRead(_))) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
