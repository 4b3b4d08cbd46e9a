//! Mutable sRGB color value and its structural views.
//!
//! [`Color`] keeps red, green and blue as integers 0 to 255 and alpha as a
//! float 0 to 1. Every write goes through a sanitizing setter, so a stored
//! value is always in range; every other representation is computed from
//! this canonical store on demand.
//!
//! # Examples
//!
//! ```
//! use pigment::Color;
//!
//! let mut color = Color::parse("rgb(60,200,60)").unwrap();
//! assert_eq!(color.to_hsl_string(), "hsl(120,56%,51%)");
//!
//! color.set_hue(150.0);
//! assert_eq!(color.to_rgb_string(), "rgb(60,200,130)");
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::ParseColorError;
use crate::parse;

/// An RGB triple with `f64` components, nominally 0-255 per channel.
///
/// The fields are deliberately unconstrained: fractional or out-of-range
/// values are sanitized when assigned into a [`Color`], per field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

/// An RGBA structure with `f64` components: channels nominally 0-255,
/// alpha nominally 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel (0 = transparent, 1 = opaque).
    pub a: f64,
}

/// An HSL structure: hue in degrees 0-360, saturation and lightness as
/// percentages 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

/// An HSLA structure: [`Hsl`] plus an alpha channel 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
    /// Alpha channel (0 = transparent, 1 = opaque).
    pub a: f64,
}

impl From<Hsla> for Hsl {
    fn from(value: Hsla) -> Self {
        Self {
            h: value.h,
            s: value.s,
            l: value.l,
        }
    }
}

/// A mutable sRGB color with an alpha channel.
///
/// Red, green and blue are stored as integers 0-255; alpha as a float 0-1.
/// The fields are private: every write passes through a sanitizing setter
/// that rounds, clamps and defaults invalid input, so a `Color` can never
/// hold an out-of-range value.
///
/// HSL views are recomputed from the stored RGB channels on every access;
/// nothing is cached. A `Color` is a plain value: concurrent reads of a
/// shared instance are safe, concurrent writers need external
/// synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Rgba", into = "Rgba"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates an opaque color from red, green and blue values.
    ///
    /// Channels are rounded and clamped to 0-255; NaN becomes 0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from red, green, blue and alpha values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let color = Color::rgba(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!((color.red(), color.green(), color.blue()), (1, 2, 3));
    /// assert_eq!(color.alpha(), 1.0); // clamped
    /// ```
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let mut color = Self::default();
        color.set_rgba(Rgba { r, g, b, a });
        color
    }

    /// Creates an opaque color from hue (degrees), saturation and lightness
    /// (percentages 0-100).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Creates a color from hue, saturation, lightness and alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let purple = Color::from_hsla(300.0, 100.0, 25.0, 0.5);
    /// assert_eq!((purple.red(), purple.green(), purple.blue()), (128, 0, 128));
    /// assert_eq!(purple.alpha(), 0.5);
    /// ```
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let rgb = convert::hsl_to_rgb(Hsl { h, s, l });
        Self::rgba(rgb.r, rgb.g, rgb.b, a)
    }

    /// Parses a color from any of the supported textual forms.
    ///
    /// - hex: `#rgb`, `#rrggbb`, `#rrggbbaa`
    /// - CSS functions: `rgb()`, `rgba()`, `hsl()`, `hsla()`
    ///
    /// Matching is case-insensitive and surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let white = Color::parse("#FFF").unwrap();
    /// assert_eq!((white.red(), white.green(), white.blue()), (255, 255, 255));
    ///
    /// let c = Color::parse("rgba(25%,50%,100%,50%)").unwrap();
    /// assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (64, 128, 255, 0.5));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        parse::parse(input)
    }

    /// Re-parses `input` into this instance.
    ///
    /// On failure the previous value is left untouched.
    pub fn reparse(&mut self, input: &str) -> Result<(), ParseColorError> {
        *self = Self::parse(input)?;
        Ok(())
    }
}

// ============================================================================
// Channel accessors
// ============================================================================

impl Color {
    /// The red channel, 0-255.
    pub fn red(&self) -> u8 {
        self.r
    }

    /// Sets the red channel: rounded to the nearest integer and clamped to
    /// 0-255; NaN stores 0.
    pub fn set_red(&mut self, value: f64) {
        self.r = sanitize_channel(value);
    }

    /// The green channel, 0-255.
    pub fn green(&self) -> u8 {
        self.g
    }

    /// Sets the green channel: rounded to the nearest integer and clamped
    /// to 0-255; NaN stores 0.
    pub fn set_green(&mut self, value: f64) {
        self.g = sanitize_channel(value);
    }

    /// The blue channel, 0-255.
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Sets the blue channel: rounded to the nearest integer and clamped to
    /// 0-255; NaN stores 0.
    pub fn set_blue(&mut self, value: f64) {
        self.b = sanitize_channel(value);
    }

    /// The alpha channel, 0-1.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Sets the alpha channel, clamped to 0-1 and kept at float precision.
    ///
    /// NaN stores 1 (fully opaque), unlike the RGB channels which default
    /// to 0.
    pub fn set_alpha(&mut self, value: f64) {
        self.a = sanitize_alpha(value);
    }
}

fn sanitize_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

fn sanitize_alpha(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(0.0, 1.0)
}

// ============================================================================
// Structural views
// ============================================================================

impl Color {
    /// The color as an [`Rgb`] triple.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
        }
    }

    /// Assigns red, green and blue through the channel setters, in that
    /// order. Alpha is unchanged.
    pub fn set_rgb(&mut self, value: Rgb) {
        self.set_red(value.r);
        self.set_green(value.g);
        self.set_blue(value.b);
    }

    /// The color as an [`Rgba`] structure.
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: self.a,
        }
    }

    /// Assigns all four channels through the sanitizing setters, in order
    /// red, green, blue, alpha.
    pub fn set_rgba(&mut self, value: Rgba) {
        self.set_red(value.r);
        self.set_green(value.g);
        self.set_blue(value.b);
        self.set_alpha(value.a);
    }

    /// The color as an [`Rgba`] structure with alpha scaled to the 0-255
    /// byte range (not rounded, not stored).
    pub fn to_rgba_byte(&self) -> Rgba {
        Rgba {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: self.a * 255.0,
        }
    }
}

// ============================================================================
// HSL views
// ============================================================================

impl Color {
    /// The hue in degrees, 0-360.
    ///
    /// Recomputed through a full RGB-to-HSL conversion on every call.
    pub fn hue(&self) -> f64 {
        self.to_hsla().h
    }

    /// Rotates the color to the given hue, keeping the current saturation,
    /// lightness and alpha.
    ///
    /// Saturation and lightness are re-derived from the stored RGB
    /// channels, so a set-then-read round trip may drift by a rounding
    /// step.
    pub fn set_hue(&mut self, value: f64) {
        let mut hsla = self.to_hsla();
        hsla.h = value;
        self.set_hsla(hsla);
    }

    /// The color as an [`Hsl`] structure.
    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(self.to_rgb())
    }

    /// The color as an [`Hsla`] structure.
    pub fn to_hsla(&self) -> Hsla {
        let hsl = self.to_hsl();
        Hsla {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
            a: self.a,
        }
    }

    /// Assigns the RGB channels from the hue, saturation and lightness of
    /// `value`. The structure's alpha is ignored and the stored alpha is
    /// kept.
    pub fn set_hsla(&mut self, value: Hsla) {
        self.set_rgb(convert::hsl_to_rgb(Hsl::from(value)));
    }
}

// ============================================================================
// String rendering
// ============================================================================

impl Color {
    /// The color as a lowercase hex string.
    ///
    /// Opaque colors render as `#rrggbb`; anything with alpha below 1 gets
    /// a fourth byte: `#rrggbbaa`.
    pub fn to_hex_string(&self) -> String {
        let mut hex = format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        if self.a < 1.0 {
            let alpha_byte = (self.a * 255.0).round() as u8;
            hex.push_str(&format!("{alpha_byte:02x}"));
        }
        hex
    }

    /// The color as a CSS `rgb()` string.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// The color as a CSS `rgba()` string.
    ///
    /// Alpha prints in shortest float form: `1`, `0.5`, `0.502`, ...
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// The color as a CSS `hsl()` string: hue at whole degrees, saturation
    /// and lightness at two significant digits.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_hsl();
        format!(
            "hsl({:.0},{}%,{}%)",
            hsl.h,
            convert::to_precision(hsl.s, 2),
            convert::to_precision(hsl.l, 2)
        )
    }

    /// The color as a CSS `hsla()` string.
    pub fn to_hsla_string(&self) -> String {
        let hsl = self.to_hsl();
        format!(
            "hsla({:.0},{}%,{}%,{})",
            hsl.h,
            convert::to_precision(hsl.s, 2),
            convert::to_precision(hsl.l, 2),
            self.a
        )
    }

    /// An identity key for the color: the `rgba()` string form.
    ///
    /// Colors with equal channels produce the same key. This is an equality
    /// key, not a cryptographic hash.
    pub fn hash_code(&self) -> String {
        self.to_rgba_string()
    }
}

// ============================================================================
// Distance
// ============================================================================

impl Color {
    /// Weighted Euclidean distance between two RGB triples, using the
    /// redmean approximation.
    ///
    /// The red and blue squared deltas are weighted by the mean red level
    /// and truncated with an integer shift by 8 (a truncating division by
    /// 256). With `normalize` the result is divided by the largest possible
    /// distance, mapping black-to-white onto exactly 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pigment::{Color, Rgb};
    ///
    /// let black = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    /// let white = Rgb { r: 255.0, g: 255.0, b: 255.0 };
    /// assert_eq!(Color::distance(black, white, true), 1.0);
    /// ```
    pub fn distance(a: Rgb, b: Rgb, normalize: bool) -> f64 {
        const MAX_DISTANCE: f64 = 764.833_315_173_966_5;
        let rmean = (a.r + b.r) / 2.0;
        let dr = a.r - b.r;
        let dg = a.g - b.g;
        let db = a.b - b.b;
        let red_term = ((((512.0 + rmean) * dr * dr) as i64) >> 8) as f64;
        let blue_term = ((((767.0 - rmean) * db * db) as i64) >> 8) as f64;
        let result = (red_term + 4.0 * dg * dg + blue_term).sqrt();
        if normalize {
            result / MAX_DISTANCE
        } else {
            result
        }
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl fmt::Display for Color {
    /// Formats as the hex string form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::rgb(value.r, value.g, value.b)
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Self::rgba(value.r, value.g, value.b, value.a)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::from_hsl(value.h, value.s, value.l)
    }
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Self::from_hsla(value.h, value.s, value.l, value.a)
    }
}

impl From<Color> for Rgba {
    fn from(value: Color) -> Self {
        value.to_rgba()
    }
}
