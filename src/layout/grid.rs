use crate::error::GridError;
use crate::pagesize::{PaperSize, Preset};
use crate::units::In;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tolerance added before flooring a point count, so that spacings which
/// divide the usable length "exactly" in decimal don't lose a point to
/// binary rounding
pub const COUNT_EPSILON: f64 = 0.02;

/// Number of decimal places a spacing is rounded to when it is derived
/// from a point count
pub const SPACING_DECIMALS: i32 = 5;

/// The physical paper the grid is printed on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaperSpec {
    pub preset: Preset,
    pub width: In,
    pub height: In,
    /// When set, `width` and `height` come from the preset table and
    /// shouldn't be edited directly. The form layer greys the fields out.
    pub dimensions_locked: bool,
}

impl PaperSpec {
    /// Paper for one of the preset formats. Custom paper starts out as A4
    /// sized, with its dimensions unlocked.
    pub fn preset(preset: Preset) -> PaperSpec {
        match preset.dimensions() {
            Some(size) => PaperSpec::locked(preset, size),
            None => {
                let (width, height) = crate::pagesize::A4;
                PaperSpec::custom(width, height)
            }
        }
    }

    /// Paper with user-chosen dimensions
    pub fn custom(width: In, height: In) -> PaperSpec {
        PaperSpec {
            preset: Preset::Custom,
            width,
            height,
            dimensions_locked: false,
        }
    }

    fn locked(preset: Preset, (width, height): PaperSize) -> PaperSpec {
        PaperSpec {
            preset,
            width,
            height,
            dimensions_locked: true,
        }
    }
}

impl Default for PaperSpec {
    fn default() -> Self {
        PaperSpec::preset(Preset::default())
    }
}

/// The regular lattice of points printed within the margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Blank border kept on every side of the page
    pub margin: In,
    /// Distance between adjacent points / lines
    pub spacing: In,
    /// Number of spacings across the page. Negative when the margins
    /// don't leave any room, which renders as an empty page.
    pub count_x: i32,
    /// Number of spacings down the page
    pub count_y: i32,
}

/// The fields of the layout that can be edited
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum FieldId {
    #[display("paper")]
    Paper,
    #[display("width")]
    Width,
    #[display("height")]
    Height,
    #[display("margin")]
    Margin,
    #[display("d")]
    Spacing,
    #[display("num_x")]
    CountX,
    #[display("num_y")]
    CountY,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::Paper,
        FieldId::Width,
        FieldId::Height,
        FieldId::Margin,
        FieldId::Spacing,
        FieldId::CountX,
        FieldId::CountY,
    ];
}

/// Parses the form field names (`paper`, `width`, `height`, `margin`, `d`,
/// `num_x`, `num_y`)
impl FromStr for FieldId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.to_string() == s)
            .ok_or_else(|| GridError::UnknownField(s.to_string()))
    }
}

/// A snapshot of the paper and grid, as passed to and returned from [resolve]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub paper: PaperSpec,
    pub grid: GridSpec,
}

/// Re-derive the dependent fields of `layout` after the user edited `edited`.
///
/// Edits to the paper size, margin or spacing recompute both point counts
/// from the spacing. Edits to a point count recompute the spacing from that
/// axis (rounded to [SPACING_DECIMALS] places) and then recompute both counts
/// from the rounded spacing, so the edited count may drift from what was
/// typed by the rounding error.
///
/// Selecting a preset overwrites the paper dimensions from the preset table
/// and locks them; selecting [Preset::Custom] unlocks them as they are.
///
/// ```
/// use grid_paper::layout::{resolve, FieldId, GridSpec, Layout, PaperSpec};
/// use grid_paper::In;
///
/// let layout = Layout {
///     paper: PaperSpec::custom(In(8.5), In(11.0)),
///     grid: GridSpec { margin: In(0.5), spacing: In(0.5), count_x: 0, count_y: 0 },
/// };
/// let layout = resolve(FieldId::Spacing, layout).unwrap();
/// assert_eq!((layout.grid.count_x, layout.grid.count_y), (15, 20));
/// ```
pub fn resolve(edited: FieldId, layout: Layout) -> Result<Layout, GridError> {
    let Layout { mut paper, mut grid } = layout;

    if edited == FieldId::Paper {
        paper = match paper.preset.dimensions() {
            Some(size) => PaperSpec::locked(paper.preset, size),
            None => PaperSpec {
                dimensions_locked: false,
                ..paper
            },
        };
    }

    check_length("width", paper.width, false)?;
    check_length("height", paper.height, false)?;
    check_length("margin", grid.margin, true)?;

    match edited {
        FieldId::CountX => {
            grid.spacing = reverse_spacing(paper.width, grid.margin, grid.count_x)?;
        }
        FieldId::CountY => {
            grid.spacing = reverse_spacing(paper.height, grid.margin, grid.count_y)?;
        }
        _ => {}
    }

    grid.count_x = forward_count(paper.width, grid.margin, grid.spacing)?;
    grid.count_y = forward_count(paper.height, grid.margin, grid.spacing)?;

    tracing::debug!(
        field = %edited,
        width = %paper.width,
        height = %paper.height,
        margin = %grid.margin,
        spacing = %grid.spacing,
        count_x = grid.count_x,
        count_y = grid.count_y,
        "resolved layout"
    );

    Ok(Layout { paper, grid })
}

/// Number of whole spacings that fit in `dimension` once both margins are
/// taken off: `floor((dimension - 2·margin) / spacing + ε)`
pub fn forward_count(dimension: In, margin: In, spacing: In) -> Result<i32, GridError> {
    if !(spacing.is_finite() && spacing.0 > 0.0) {
        return Err(GridError::InvalidSpacing);
    }
    let usable = dimension - margin * 2.0;
    let count = (usable / spacing + COUNT_EPSILON).floor();
    if !(i32::MIN as f64..=i32::MAX as f64).contains(&count) {
        return Err(GridError::InvalidSpacing);
    }
    Ok(count as i32)
}

/// Spacing that fits `count` spacings in `dimension` once both margins are
/// taken off, rounded to [SPACING_DECIMALS] places
pub fn reverse_spacing(dimension: In, margin: In, count: i32) -> Result<In, GridError> {
    if count == 0 {
        return Err(GridError::InvalidSpacing);
    }
    let usable = dimension - margin * 2.0;
    let spacing = round_to_decimals(usable.0 / count as f64, SPACING_DECIMALS);
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(GridError::InvalidSpacing);
    }
    Ok(In(spacing))
}

/// Round the exact decimal expansion of `value`, halves away from zero.
/// Scaling first would round `0.123455` (stored as `0.1234549999…`) up.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    const GUARD_DIGITS: usize = 20;
    if !value.is_finite() {
        return value;
    }
    let places = decimals.max(0) as usize;
    let expanded = format!("{:.*}", places + GUARD_DIGITS, value.abs());
    let (kept, rest) = expanded.split_at(expanded.len() - GUARD_DIGITS);
    let Ok(mut scaled) = kept.replace('.', "").parse::<f64>() else {
        return value;
    };
    if rest.as_bytes().first().is_some_and(|&d| d >= b'5') {
        scaled += 1.0;
    }
    (scaled / 10f64.powi(places as i32)).copysign(value)
}

fn check_length(field: &'static str, value: In, allow_zero: bool) -> Result<(), GridError> {
    let in_range = if allow_zero {
        value.0 >= 0.0
    } else {
        value.0 > 0.0
    };
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(GridError::InvalidNumericInput(field))
    }
}
