//! Colors used to fill and stroke shapes.

use core::str::FromStr;
use std::string::String;

use thiserror::Error;

/// An opaque 8-bit sRGB color.
pub type Color = palette::Srgb<u8>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorError {
    pub input: String,
    pub reason: String,
}

/// Parses a CSS hex color (`#rgb`, `#rrggbb`, with or without the `#`).
pub fn parse_hex(src: &str) -> Result<Color, ColorError> {
    let trimmed = src.trim();
    Color::from_str(trimmed).map_err(|e| ColorError {
        input: src.into(),
        reason: format!("{}", e),
    })
}

/// Formats a color as a lower-case `#rrggbb` string.
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[test]
fn parse_colors() {
    assert_eq!(parse_hex("#ff8000"), Ok(Color::new(255, 128, 0)));
    assert_eq!(parse_hex("0a0b0c"), Ok(Color::new(10, 11, 12)));
    assert_eq!(parse_hex(" #fff "), Ok(Color::new(255, 255, 255)));
}

#[test]
fn reject_malformed_colors() {
    assert!(parse_hex("#12").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("").is_err());
}

#[test]
fn hex_round_trip() {
    let c = Color::new(1, 2, 255);
    assert_eq!(to_hex(c), "#0102ff");
    assert_eq!(parse_hex(&to_hex(c)), Ok(c));
}
