//! Legible foreground and border colours for a colour swatch.
//!
//! The swatch shows the chosen grid colour as its background, so its label
//! has to flip between black and white depending on how bright that colour
//! is. Brightness is the Y (luma) channel of the YIQ colour model.
//!
//! # Example
//!
//! ```
//! use grid_paper::contrast::{contrast, Foreground};
//!
//! let swatch = contrast("#ffcc00").unwrap();
//! assert_eq!(swatch.foreground, Foreground::Black);
//!
//! let swatch = contrast("1e3a5f").unwrap();
//! assert_eq!(swatch.foreground, Foreground::White);
//! ```

use crate::colour::{colours, Colour};
use crate::error::GridError;
use derive_more::Display;

/// Luminance above which the swatch label is drawn in black
pub const LUMINANCE_THRESHOLD: f64 = 180.0;

// YIQ luma weights, in thousandths
const LUMA_WEIGHTS: (u32, u32, u32) = (299, 587, 114);

/// A colour as 8-bit red, green and blue components
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `RRGGBB` or `#RRGGBB`, case-insensitive
    pub fn from_hex(hex: &str) -> Result<Rgb, GridError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GridError::InvalidColorFormat(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GridError::InvalidColorFormat(hex.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Perceived brightness in the range 0–255 (the Y of YIQ)
    pub fn luminance(self) -> f64 {
        self.luminance_milli() as f64 / 1000.0
    }

    /// Luminance scaled by 1000, exact in integers
    fn luminance_milli(self) -> u32 {
        let (wr, wg, wb) = LUMA_WEIGHTS;
        wr * self.0 as u32 + wg * self.1 as u32 + wb * self.2 as u32
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Colour::new_rgb_bytes(rgb.0, rgb.1, rgb.2)
    }
}

/// Label colour that stays readable on top of a swatch
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Foreground {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl From<Foreground> for Colour {
    fn from(foreground: Foreground) -> Self {
        match foreground {
            Foreground::Black => colours::BLACK,
            Foreground::White => colours::WHITE,
        }
    }
}

/// Presentation colours derived from a swatch colour
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Swatch {
    pub rgb: Rgb,
    pub foreground: Foreground,
    /// The swatch colour darkened by a sixth of its luminance. Not clamped:
    /// components can go below zero, and it's up to the renderer to clamp.
    pub border: (f64, f64, f64),
}

impl Swatch {
    /// The border as a CSS `rgb()` colour, unclamped
    pub fn border_css(&self) -> String {
        let (r, g, b) = self.border;
        format!("rgb({r}, {g}, {b})")
    }

    /// The border with each component clamped to 0–255
    pub fn clamped_border(&self) -> Rgb {
        let clamp = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        let (r, g, b) = self.border;
        Rgb(clamp(r), clamp(g), clamp(b))
    }
}

/// Derive the swatch presentation colours for a hex colour string
pub fn contrast(hex: &str) -> Result<Swatch, GridError> {
    let rgb = Rgb::from_hex(hex)?;
    let y = rgb.luminance();

    // exact: both sides in thousandths
    let foreground = if rgb.luminance_milli() > (LUMINANCE_THRESHOLD * 1000.0) as u32 {
        Foreground::Black
    } else {
        Foreground::White
    };
    let shade = y / 6.0;
    let border = (
        rgb.0 as f64 - shade,
        rgb.1 as f64 - shade,
        rgb.2 as f64 - shade,
    );

    Ok(Swatch {
        rgb,
        foreground,
        border,
    })
}
