//! The textual color grammars: hex, `rgb()`/`rgba()` and `hsl()`/`hsla()`.
//!
//! Parsing is strict: anything that does not match a grammar exactly is
//! rejected with a [`ParseColorError`] describing what went wrong. A parse
//! builds a complete value before anything is assigned, so a failed parse
//! never leaves a half-written color behind.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, Hsl};
use crate::convert;
use crate::error::ParseColorError;

/// `rgb(...)` / `rgba(...)` with 3 or 4 comma-separated components, each a
/// 1-3 digit number with optional decimals and optional `%`; the alpha
/// component also accepts bare fractions like `.5`.
static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\((\d{1,3}(?:\.\d+)?%?),\s*(\d{1,3}(?:\.\d+)?%?),\s*(\d{1,3}(?:\.\d+)?%?)(?:,\s*(0?\.?\d+%?))?\)$",
    )
    .expect("rgb pattern is valid")
});

/// `hsl(...)` / `hsla(...)`: hue as number or percentage, saturation and
/// lightness with a mandatory `%`, optional alpha as number or percentage.
static HSLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*(\d{1,3}(?:\.\d+)?%?)\s*,\s*(\d{1,3}(?:\.\d+)?%)\s*,\s*(\d{1,3}(?:\.\d+)?%)(?:,\s*(0?\.?\d+%?))?\)$",
    )
    .expect("hsl pattern is valid")
});

/// Parses any supported textual color form into a fresh [`Color`].
///
/// The input is trimmed and lowercased, then dispatched on its prefix:
/// `#` for hex, `rgb` and `hsl` for the CSS function forms.
pub(crate) fn parse(input: &str) -> Result<Color, ParseColorError> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseColorError::EmptyInput);
    }
    if let Some(hex) = normalized.strip_prefix('#') {
        parse_hex(hex)
    } else if normalized.starts_with("rgb") {
        parse_rgb_function(&normalized)
    } else if normalized.starts_with("hsl") {
        parse_hsl_function(&normalized)
    } else {
        Err(ParseColorError::UnrecognizedFormat(normalized))
    }
}

/// Validates a hex color body (without the leading `#`).
///
/// Accepts lengths 3, 6 and 8; every character must be a hex digit. The
/// error carries the offending length or character position.
pub fn check_hex(value: &str) -> Result<(), ParseColorError> {
    hex_digits(value).map(|_| ())
}

fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

fn hex_digits(value: &str) -> Result<Vec<u8>, ParseColorError> {
    let length = value.chars().count();
    if !matches!(length, 3 | 6 | 8) {
        return Err(ParseColorError::InvalidHexLength(length));
    }
    value
        .chars()
        .enumerate()
        .map(|(position, c)| {
            nibble(c).ok_or_else(|| ParseColorError::InvalidHexDigit {
                value: value.to_string(),
                position,
            })
        })
        .collect()
}

fn parse_hex(value: &str) -> Result<Color, ParseColorError> {
    let digits = hex_digits(value)?;
    let mut color = Color::default();
    if digits.len() == 3 {
        // each nibble doubles: "f" reads as "ff"
        color.set_red(f64::from(digits[0] * 17));
        color.set_green(f64::from(digits[1] * 17));
        color.set_blue(f64::from(digits[2] * 17));
    } else {
        color.set_red(f64::from((digits[0] << 4) | digits[1]));
        color.set_green(f64::from((digits[2] << 4) | digits[3]));
        color.set_blue(f64::from((digits[4] << 4) | digits[5]));
        if digits.len() == 8 {
            let byte = (digits[6] << 4) | digits[7];
            // alpha byte maps into 0-1 at three decimals
            color.set_alpha((f64::from(byte) / 255.0 * 1000.0).round() / 1000.0);
        }
    }
    Ok(color)
}

fn parse_rgb_function(input: &str) -> Result<Color, ParseColorError> {
    let captures = RGBA_PATTERN
        .captures(input)
        .ok_or(ParseColorError::InvalidRgb { parts: 0 })?;
    let parts = captures.iter().flatten().count();
    if !(4..=5).contains(&parts) {
        return Err(ParseColorError::InvalidRgb { parts });
    }
    let mut color = Color::default();
    color.set_red(convert::number_or_percentage(&captures[1], 255.0, true));
    color.set_green(convert::number_or_percentage(&captures[2], 255.0, true));
    color.set_blue(convert::number_or_percentage(&captures[3], 255.0, true));
    if let Some(alpha) = captures.get(4) {
        color.set_alpha(convert::number_or_percentage(alpha.as_str(), 1.0, false));
    }
    Ok(color)
}

fn parse_hsl_function(input: &str) -> Result<Color, ParseColorError> {
    let captures = HSLA_PATTERN
        .captures(input)
        .ok_or(ParseColorError::InvalidHsl { parts: 0 })?;
    let parts = captures.iter().flatten().count();
    if !(4..=5).contains(&parts) {
        return Err(ParseColorError::InvalidHsl { parts });
    }
    let rgb = convert::hsl_to_rgb(Hsl {
        h: convert::number_or_percentage(&captures[1], 360.0, true),
        s: percent_value(&captures[2]),
        l: percent_value(&captures[3]),
    });
    let mut color = Color::default();
    color.set_rgb(rgb);
    if let Some(alpha) = captures.get(4) {
        color.set_alpha(convert::number_or_percentage(alpha.as_str(), 1.0, false));
    }
    Ok(color)
}

/// Reads the numeric part of a `%`-suffixed token as a float.
fn percent_value(value: &str) -> f64 {
    value.trim_end_matches('%').parse().unwrap_or(f64::NAN)
}
