//! Pre-defined paper sizes for the supported paper presets.
//!
//! All sizes are given as (width, height) in inches, in landscape orientation
//! (width ≥ height), matching what the paper selector offers.
//!
//! # Available Sizes
//!
//! ## ISO A-Series
//! `A4`, `A3`
//!
//! ## North American
//! `LETTER`, `TABLOID`
//!
//! # Example
//!
//! ```
//! use grid_paper::pagesize::{Preset, LETTER};
//! use grid_paper::In;
//!
//! assert_eq!(Preset::Letter.dimensions(), Some(LETTER));
//! assert_eq!(LETTER, (In(11.0), In(8.5)));
//! assert_eq!(Preset::Custom.dimensions(), None);
//! ```

use crate::error::GridError;
use crate::units::*;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Paper dimensions as (width, height) in inches.
pub type PaperSize = (In, In);

// iso a-series, rounded to the hundredth of an inch
pub const A4: PaperSize = (In(11.7), In(8.27));
pub const A3: PaperSize = (In(16.5), In(11.7));

// north american sizes
pub const LETTER: PaperSize = (In(11.0), In(8.5));
pub const TABLOID: PaperSize = (In(17.0), In(11.0));

/// A named paper format, or `Custom` for user-entered dimensions
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    A4,
    A3,
    Letter,
    Tabloid,
    Custom,
}

impl Preset {
    /// Every preset, in the order a paper selector lists them
    pub const ALL: [Preset; 5] = [
        Preset::A4,
        Preset::A3,
        Preset::Letter,
        Preset::Tabloid,
        Preset::Custom,
    ];

    /// The fixed dimensions of the preset, or [None] for [Preset::Custom]
    pub fn dimensions(self) -> Option<PaperSize> {
        match self {
            Preset::A4 => Some(A4),
            Preset::A3 => Some(A3),
            Preset::Letter => Some(LETTER),
            Preset::Tabloid => Some(TABLOID),
            Preset::Custom => None,
        }
    }
}

impl FromStr for Preset {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.to_string() == s)
            .ok_or_else(|| GridError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_round_trip_through_the_selector() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(matches!(
            "B5".parse::<Preset>(),
            Err(GridError::UnknownPreset(name)) if name == "B5"
        ));
    }
}
