//! RGBA color values and hex decoding

use crate::error::EngineError;

/// RGBA color on the 8-bit channel scale.
///
/// `r`, `g`, `b` are floats in 0–255 and `a` is in 0–1. Channels stay
/// un-rounded through interpolation; rounding happens only when formatting
/// with [`Rgba::to_css_string`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a 3- or 6-digit hex color, with or without a leading `#`.
    ///
    /// The 3-digit form expands each digit by duplication (`f` → `ff`).
    /// Alpha is always 1; the stop model carries no per-stop alpha.
    pub fn from_hex(hex: &str) -> Result<Self, EngineError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EngineError::InvalidColorFormat(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32)
                .map_err(|_| EngineError::InvalidColorFormat(hex.to_string()))
        };

        match digits.len() {
            3 => {
                let r = channel(&digits[0..1].repeat(2))?;
                let g = channel(&digits[1..2].repeat(2))?;
                let b = channel(&digits[2..3].repeat(2))?;
                Ok(Self::rgb(r, g, b))
            }
            6 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(EngineError::InvalidColorFormat(hex.to_string())),
        }
    }

    /// Format as a CSS `rgba()` value.
    ///
    /// Channels are rounded to the nearest integer here and nowhere earlier;
    /// alpha is printed with exactly 3 decimal places.
    pub fn to_css_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            self.a
        )
    }

    /// Linear interpolation between two colors, per channel.
    ///
    /// Alpha is interpolated like any other channel.
    pub fn lerp(a: &Rgba, b: &Rgba, t: f32) -> Rgba {
        Rgba {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}
