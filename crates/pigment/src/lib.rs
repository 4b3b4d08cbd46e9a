//! Mutable sRGB color value with parsing and formatting for the CSS color
//! grammars.
//!
//! This crate provides the [`Color`] type: red, green and blue stored as
//! integers 0 to 255, alpha stored as a float 0 to 1. Every other
//! representation (hex strings, the `rgb()`/`rgba()` and `hsl()`/`hsla()`
//! function forms, HSL structures) is a view computed from that canonical
//! store.
//!
//! - [`color`]: the [`Color`] type, its structural views and string output
//! - [`convert`]: pure RGB/HSL conversion math and numeric helpers
//! - [`parse`]: the three textual color grammars
//! - [`error`]: the parse error type
//!
//! # Examples
//!
//! ## Parsing and formatting
//!
//! ```
//! use pigment::Color;
//!
//! let mut color = Color::parse("#f0e0d0").unwrap();
//! assert_eq!(color.red(), 240);
//!
//! color.set_alpha(0.5);
//! assert_eq!(color.to_rgba_string(), "rgba(240,224,208,0.5)");
//!
//! let sky = Color::parse("hsl(195, 100%, 50%)").unwrap();
//! assert_eq!(sky.to_hex_string(), "#00bfff");
//! ```
//!
//! ## Mutation
//!
//! Setters sanitize instead of failing: out-of-range channels clamp, and
//! invalid numbers fall back to defined defaults. Parsing, by contrast, is
//! strict and reports exactly what was wrong with the input.
//!
//! ```
//! use pigment::Color;
//!
//! let mut color = Color::default();
//! color.set_red(300.0);
//! color.set_alpha(-2.0);
//! assert_eq!((color.red(), color.alpha()), (255, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color;
pub mod convert;
pub mod error;
pub mod parse;

pub use color::{Color, Hsl, Hsla, Rgb, Rgba};
pub use error::ParseColorError;
