//! Pure conversion math between the RGB and HSL color models.
//!
//! These are free functions with no access to [`Color`](crate::Color)
//! internals; the color type routes every HSL view and every `hsl()` parse
//! through them.

use crate::color::{Hsl, Rgb};

/// Converts an RGB triple (0-255 per channel) to HSL.
///
/// Channels are normalized to 0-1 (clamping anything out of range first).
/// Hue is rounded to whole degrees; saturation and lightness are returned
/// as percentages rounded to three decimals.
///
/// # Examples
///
/// ```
/// use pigment::convert::rgb_to_hsl;
/// use pigment::Rgb;
///
/// let hsl = rgb_to_hsl(Rgb { r: 123.0, g: 12.0, b: 1.0 });
/// assert_eq!((hsl.h, hsl.s, hsl.l), (5.0, 98.387, 24.314));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = (rgb.r / 255.0).clamp(0.0, 1.0);
    let g = (rgb.g / 255.0).clamp(0.0, 1.0);
    let b = (rgb.b / 255.0).clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: (h * 360.0).round(),
        s: (s * 100_000.0).round() / 1000.0,
        l: (l * 100_000.0).round() / 1000.0,
    }
}

/// Converts an HSL value (hue in degrees, saturation and lightness as
/// percentages 0-100) to an RGB triple.
///
/// Hue is reduced modulo 360 and clamped into 0-360; saturation and
/// lightness are clamped into range. Each output channel is rounded to the
/// nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = (hsl.h % 360.0).clamp(0.0, 360.0) / 60.0;
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let t2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    Rgb {
        r: (hue_to_channel(t1, t2, h + 2.0) * 255.0).round(),
        g: (hue_to_channel(t1, t2, h) * 255.0).round(),
        b: (hue_to_channel(t1, t2, h - 2.0) * 255.0).round(),
    }
}

/// Maps one channel offset of a sector-relative hue onto 0-1.
fn hue_to_channel(t1: f64, t2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 6.0
    } else if hue >= 6.0 {
        hue - 6.0
    } else {
        hue
    };
    if hue < 1.0 {
        (t2 - t1) * hue + t1
    } else if hue < 3.0 {
        t2
    } else if hue < 4.0 {
        (t2 - t1) * (4.0 - hue) + t1
    } else {
        t1
    }
}

/// Parses a numeric token that may carry a `%` suffix.
///
/// Percentages are scaled into `range` (and rounded when `integral` is
/// set); plain numbers are truncated to their integer part when `integral`,
/// parsed as floats otherwise. Unparseable input yields NaN, which the
/// [`Color`](crate::Color) setters then collapse to their defaults.
///
/// # Examples
///
/// ```
/// use pigment::convert::number_or_percentage;
///
/// assert_eq!(number_or_percentage("25%", 255.0, true), 64.0);
/// assert_eq!(number_or_percentage("123", 255.0, true), 123.0);
/// assert_eq!(number_or_percentage("50%", 1.0, false), 0.5);
/// ```
pub fn number_or_percentage(value: &str, range: f64, integral: bool) -> f64 {
    let (number, is_percentage) = match value.strip_suffix('%') {
        Some(stripped) => (stripped, true),
        None => (value, false),
    };
    let mut result = if integral && !is_percentage {
        integer_prefix(number)
    } else {
        number.parse().unwrap_or(f64::NAN)
    };
    if is_percentage {
        result = result / 100.0 * range;
        if integral {
            result = result.round();
        }
    }
    result
}

/// Truncating integer parse: reads the digits before any decimal point.
fn integer_prefix(value: &str) -> f64 {
    let digits = value.split_once('.').map_or(value, |(head, _)| head);
    digits.parse().unwrap_or(f64::NAN)
}

/// Formats `value` with the given number of significant digits.
///
/// Fixed notation below `10^digits`, exponential (`1.0e+2`) at or above it,
/// ties rounded away from zero. Only meaningful for non-negative input; the
/// HSL string renderers feed it saturation and lightness percentages.
pub(crate) fn to_precision(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return format!("{:.*}", (digits - 1) as usize, 0.0);
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut scale = 10f64.powi(exponent - digits + 1);
    let mut scaled = (value / scale).round();
    if scaled >= 10f64.powi(digits) {
        // rounding carried into the next decade
        scaled /= 10.0;
        scale *= 10.0;
        exponent += 1;
    }
    if exponent >= digits || exponent < -6 {
        let mantissa = scaled / 10f64.powi(digits - 1);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{:.*}e{}{}", (digits - 1) as usize, mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, scaled * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rgb_to_hsl_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn black_is_achromatic_zero() {
            let hsl = rgb_to_hsl(Rgb { r: 0.0, g: 0.0, b: 0.0 });
            assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 0.0, 0.0));
        }

        #[test]
        fn converts_reference_values_exactly() {
            let hsl = rgb_to_hsl(Rgb { r: 123.0, g: 12.0, b: 1.0 });
            assert_eq!((hsl.h, hsl.s, hsl.l), (5.0, 98.387, 24.314));

            let hsl = rgb_to_hsl(Rgb { r: 15.0, g: 15.0, b: 240.0 });
            assert_eq!((hsl.h, hsl.s, hsl.l), (240.0, 88.235, 50.0));
        }

        #[test]
        fn greys_have_zero_saturation() {
            let hsl = rgb_to_hsl(Rgb { r: 128.0, g: 128.0, b: 128.0 });
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert_eq!(hsl.l, 50.196);
        }

        #[test]
        fn out_of_range_channels_are_clamped() {
            let hsl = rgb_to_hsl(Rgb { r: 300.0, g: -20.0, b: 0.0 });
            let reference = rgb_to_hsl(Rgb { r: 255.0, g: 0.0, b: 0.0 });
            assert_eq!(hsl, reference);
        }
    }

    mod hsl_to_rgb_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn converts_reference_values() {
            let rgb = hsl_to_rgb(Hsl { h: 195.0, s: 100.0, l: 50.0 });
            assert_eq!((rgb.r, rgb.g, rgb.b), (0.0, 191.0, 255.0));

            let rgb = hsl_to_rgb(Hsl { h: 300.0, s: 100.0, l: 25.0 });
            assert_eq!((rgb.r, rgb.g, rgb.b), (128.0, 0.0, 128.0));
        }

        #[test]
        fn zero_saturation_yields_grey() {
            let rgb = hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 50.0 });
            assert_eq!((rgb.r, rgb.g, rgb.b), (128.0, 128.0, 128.0));
        }

        #[test]
        fn hue_wraps_and_clamps() {
            // 480 reduces to 120; negative remainders clamp to 0
            let wrapped = hsl_to_rgb(Hsl { h: 480.0, s: 100.0, l: 50.0 });
            let green = hsl_to_rgb(Hsl { h: 120.0, s: 100.0, l: 50.0 });
            assert_eq!(wrapped, green);

            let negative = hsl_to_rgb(Hsl { h: -30.0, s: 100.0, l: 50.0 });
            let red = hsl_to_rgb(Hsl { h: 0.0, s: 100.0, l: 50.0 });
            assert_eq!(negative, red);
        }

        #[test]
        fn round_trip_stays_within_one_step_per_channel() {
            for r in (0..=255).step_by(51) {
                for g in (0..=255).step_by(51) {
                    for b in (0..=255).step_by(51) {
                        let rgb = Rgb {
                            r: f64::from(r),
                            g: f64::from(g),
                            b: f64::from(b),
                        };
                        let back = hsl_to_rgb(rgb_to_hsl(rgb));
                        assert!(
                            (back.r - rgb.r).abs() <= 1.0
                                && (back.g - rgb.g).abs() <= 1.0
                                && (back.b - rgb.b).abs() <= 1.0,
                            "({r},{g},{b}) round-tripped to ({},{},{})",
                            back.r,
                            back.g,
                            back.b
                        );
                    }
                }
            }
        }
    }

    mod number_or_percentage_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn scales_percentages_into_range() {
            assert_eq!(number_or_percentage("25%", 255.0, true), 64.0);
            assert_eq!(number_or_percentage("100%", 255.0, true), 255.0);
            assert_eq!(number_or_percentage("50%", 1.0, false), 0.5);
            assert_eq!(number_or_percentage("83.3333%", 360.0, true), 300.0);
        }

        #[test]
        fn truncates_integral_numbers() {
            assert_eq!(number_or_percentage("123", 255.0, true), 123.0);
            assert_eq!(number_or_percentage("123.9", 255.0, true), 123.0);
        }

        #[test]
        fn parses_plain_floats() {
            assert_eq!(number_or_percentage(".5", 1.0, false), 0.5);
            assert_eq!(number_or_percentage("0.502", 1.0, false), 0.502);
        }

        #[test]
        fn unparseable_input_yields_nan() {
            assert!(number_or_percentage("abc", 255.0, true).is_nan());
            assert!(number_or_percentage("", 1.0, false).is_nan());
        }
    }

    mod to_precision_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn keeps_two_digit_integers() {
            assert_eq!(to_precision(56.0, 2), "56");
            assert_eq!(to_precision(50.98, 2), "51");
        }

        #[test]
        fn pads_single_digits_to_two_significant() {
            assert_eq!(to_precision(5.9, 2), "5.9");
            assert_eq!(to_precision(5.0, 2), "5.0");
            assert_eq!(to_precision(0.5, 2), "0.50");
        }

        #[test]
        fn zero_renders_with_one_decimal() {
            assert_eq!(to_precision(0.0, 2), "0.0");
        }

        #[test]
        fn three_digit_values_go_exponential() {
            assert_eq!(to_precision(100.0, 2), "1.0e+2");
            assert_eq!(to_precision(99.5, 2), "1.0e+2");
        }
    }
}
