use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use quotecard::{QuotecardError, compose, compose_image};

fn checker_cover(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([200, 30, 40])
        } else {
            Rgb([10, 120, 220])
        }
    })
}

fn write_fixtures(dir: &Path, cover_name: &str, w: u32, h: u32) -> (PathBuf, PathBuf) {
    let quote_path = dir.join("quote.txt");
    std::fs::write(
        &quote_path,
        "Be yourself; everyone else is already taken.\n",
    )
    .unwrap();

    let cover_path = dir.join(cover_name);
    checker_cover(w, h).save(&cover_path).unwrap();
    (quote_path, cover_path)
}

#[test]
fn composed_canvas_has_cover_on_the_right_third() {
    let dir = tempfile::tempdir().unwrap();
    let (quote_path, cover_path) =
        write_fixtures(dir.path(), "Becoming - Michelle Obama.png", 400, 600);

    let composed = compose_image(&quote_path, &cover_path, Path::new("missing.ttf")).unwrap();

    assert_eq!(composed.file_name, "Becoming - Quote.jpg");
    assert_eq!(composed.image.dimensions(), (1200, 600));

    let cover = checker_cover(400, 600);
    for (x, y) in [(0u32, 0u32), (123, 456), (399, 599)] {
        assert_eq!(composed.image.get_pixel(800 + x, y), cover.get_pixel(x, y));
    }
}

#[test]
fn composed_canvas_contains_text_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let (quote_path, cover_path) =
        write_fixtures(dir.path(), "Becoming - Michelle Obama.png", 400, 600);

    let composed = compose_image(&quote_path, &cover_path, Path::new("missing.ttf")).unwrap();

    // Something darker than the flat background must appear on the left side.
    let mut dark = 0usize;
    for y in 0..600 {
        for x in 0..800 {
            if composed.image.get_pixel(x, y).0[0] < 150 {
                dark += 1;
            }
        }
    }
    assert!(dark > 100, "expected rendered text/bar pixels, found {dark}");
}

#[test]
fn compose_writes_a_decodable_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let (quote_path, cover_path) =
        write_fixtures(dir.path(), "Becoming - Michelle Obama.png", 120, 180);

    let out = compose(&quote_path, &cover_path, Path::new("missing.ttf"), dir.path()).unwrap();

    assert_eq!(out.file_name().unwrap(), "Becoming - Quote.jpg");
    let decoded = image::open(&out).unwrap();
    assert_eq!(decoded.width(), 360);
    assert_eq!(decoded.height(), 180);
}

#[test]
fn missing_quote_file_is_a_quote_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let cover_path = dir.path().join("Becoming - Michelle Obama.png");
    checker_cover(40, 60).save(&cover_path).unwrap();

    let err = compose_image(
        &dir.path().join("no_quote.txt"),
        &cover_path,
        Path::new("missing.ttf"),
    )
    .unwrap_err();
    assert!(matches!(err, QuotecardError::QuoteRead(_)));
}

#[test]
fn malformed_cover_name_fails_before_any_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    // Neither the quote nor the cover exists; the name check must fire first.
    let err = compose_image(
        &dir.path().join("no_quote.txt"),
        &dir.path().join("cover.jpg"),
        Path::new("missing.ttf"),
    )
    .unwrap_err();
    assert!(matches!(err, QuotecardError::CoverName(_)));
}

#[test]
fn unreadable_cover_is_a_cover_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let quote_path = dir.path().join("quote.txt");
    std::fs::write(&quote_path, "q").unwrap();
    let cover_path = dir.path().join("Becoming - Michelle Obama.jpg");
    std::fs::write(&cover_path, b"not an image").unwrap();

    let err = compose_image(&quote_path, &cover_path, Path::new("missing.ttf")).unwrap_err();
    assert!(matches!(err, QuotecardError::CoverRead(_)));
}
