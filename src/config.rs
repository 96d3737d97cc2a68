//! The current grid configuration, as edited one field at a time.
//!
//! [Configuration] holds every value the paper form shows. Each [Edit] is
//! applied to a copy first and only committed once the layout resolves, so a
//! rejected edit leaves the configuration exactly as it was.
//!
//! # Example
//!
//! ```
//! use grid_paper::config::{Configuration, Edit};
//! use grid_paper::pagesize::Preset;
//! use grid_paper::In;
//!
//! let mut config = Configuration::default();
//! config.apply(Edit::Paper(Preset::Letter)).unwrap();
//! config.apply(Edit::Margin(In(0.5))).unwrap();
//! config.apply(Edit::Spacing(In(0.5))).unwrap();
//! assert_eq!((config.layout.grid.count_x, config.layout.grid.count_y), (20, 15));
//!
//! // letter paper has fixed dimensions
//! assert!(config.apply(Edit::Width(In(9.0))).is_err());
//! ```

use crate::contrast::{contrast, Rgb, Swatch};
use crate::error::GridError;
use crate::layout::{forward_count, resolve, FieldId, GridSpec, Layout, PaperSpec};
use crate::pagesize::Preset;
use crate::request::{assemble, DocumentRequest, Pattern};
use crate::units::In;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOUR: &str = "#646464";
pub const DEFAULT_MARGIN: In = In(0.2);
pub const DEFAULT_SPACING: In = In(0.2);
pub const DEFAULT_PAGE_COUNT: u32 = 2;

/// A single change made to the configuration
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Paper(Preset),
    Width(In),
    Height(In),
    Margin(In),
    Spacing(In),
    CountX(i32),
    CountY(i32),
    Colour(String),
    Pattern(Pattern),
    PageCount(u32),
}

impl Edit {
    /// The layout field this edit changes, if any
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Edit::Paper(_) => Some(FieldId::Paper),
            Edit::Width(_) => Some(FieldId::Width),
            Edit::Height(_) => Some(FieldId::Height),
            Edit::Margin(_) => Some(FieldId::Margin),
            Edit::Spacing(_) => Some(FieldId::Spacing),
            Edit::CountX(_) => Some(FieldId::CountX),
            Edit::CountY(_) => Some(FieldId::CountY),
            Edit::Colour(_) | Edit::Pattern(_) | Edit::PageCount(_) => None,
        }
    }

    /// Build an edit from a form field name and its raw text value
    pub fn parse(name: &str, value: &str) -> Result<Edit, GridError> {
        let value = value.trim();
        let length = |field: &'static str| {
            value
                .parse::<f64>()
                .map(In)
                .map_err(|_| GridError::InvalidNumericInput(field))
        };
        let count = |field: &'static str| {
            value
                .parse::<i32>()
                .map_err(|_| GridError::InvalidNumericInput(field))
        };

        match name {
            "paper" => Ok(Edit::Paper(value.parse()?)),
            "width" => Ok(Edit::Width(length("width")?)),
            "height" => Ok(Edit::Height(length("height")?)),
            "margin" => Ok(Edit::Margin(length("margin")?)),
            "d" => Ok(Edit::Spacing(length("d")?)),
            "num_x" => Ok(Edit::CountX(count("num_x")?)),
            "num_y" => Ok(Edit::CountY(count("num_y")?)),
            "color" => Ok(Edit::Colour(value.to_string())),
            "type" => Ok(Edit::Pattern(value.parse()?)),
            "num_pages" => value
                .parse::<u32>()
                .map(Edit::PageCount)
                .map_err(|_| GridError::InvalidNumericInput("num_pages")),
            _ => Err(GridError::UnknownField(name.to_string())),
        }
    }
}

/// Everything needed to produce a grid document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub layout: Layout,
    /// Hex colour, `#rrggbb`
    pub colour: String,
    pub pattern: Pattern,
    pub page_count: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        let paper = PaperSpec::preset(Preset::A4);
        // 11.7 × 8.27 with a 0.2 margin and spacing gives a 56 × 39 grid
        let count = |dimension: In| {
            forward_count(dimension, DEFAULT_MARGIN, DEFAULT_SPACING).unwrap_or_default()
        };

        Configuration {
            layout: Layout {
                paper,
                grid: GridSpec {
                    margin: DEFAULT_MARGIN,
                    spacing: DEFAULT_SPACING,
                    count_x: count(paper.width),
                    count_y: count(paper.height),
                },
            },
            colour: DEFAULT_COLOUR.to_string(),
            pattern: Pattern::default(),
            page_count: DEFAULT_PAGE_COUNT,
        }
    }
}

impl Configuration {
    /// Apply a single edit, re-resolving the layout. On error nothing changes.
    pub fn apply(&mut self, edit: Edit) -> Result<(), GridError> {
        let mut next = self.clone();
        let Layout { paper, grid } = &mut next.layout;

        match &edit {
            Edit::Paper(preset) => paper.preset = *preset,
            Edit::Width(_) | Edit::Height(_) if paper.dimensions_locked => {
                tracing::warn!(?edit, preset = %paper.preset, "refused edit of locked dimension");
                return Err(GridError::DimensionsLocked);
            }
            Edit::Width(width) => paper.width = *width,
            Edit::Height(height) => paper.height = *height,
            Edit::Margin(margin) => grid.margin = *margin,
            Edit::Spacing(spacing) => grid.spacing = *spacing,
            Edit::CountX(count) => grid.count_x = *count,
            Edit::CountY(count) => grid.count_y = *count,
            Edit::Colour(hex) => {
                next.colour = Rgb::from_hex(hex)?.to_hex();
            }
            Edit::Pattern(pattern) => next.pattern = *pattern,
            Edit::PageCount(count) => {
                if *count < 1 {
                    return Err(GridError::InvalidPageCount(*count));
                }
                next.page_count = *count;
            }
        }

        if let Some(field) = edit.field() {
            next.layout = resolve(field, next.layout).inspect_err(|err| {
                tracing::warn!(?edit, %err, "refused edit");
            })?;
        }

        *self = next;
        Ok(())
    }

    /// Apply an edit given as a form field name and its raw text value
    pub fn apply_field(&mut self, name: &str, value: &str) -> Result<(), GridError> {
        self.apply(Edit::parse(name, value)?)
    }

    /// Presentation colours for the colour swatch
    pub fn swatch(&self) -> Result<Swatch, GridError> {
        contrast(&self.colour)
    }

    /// Assemble a document request from the current configuration
    pub fn request(&self) -> Result<DocumentRequest, GridError> {
        let rgb = Rgb::from_hex(&self.colour)?;
        assemble(
            self.pattern,
            &self.layout.paper,
            &self.layout.grid,
            rgb,
            self.page_count,
        )
    }

    /// Load a configuration saved with [Configuration::to_json]. The layout
    /// is re-resolved from its spacing, so stale counts are corrected.
    pub fn from_json(json: &str) -> Result<Configuration, GridError> {
        let mut config: Configuration = serde_json::from_str(json)?;
        Rgb::from_hex(&config.colour)?;
        if config.page_count < 1 {
            return Err(GridError::InvalidPageCount(config.page_count));
        }
        config.layout = resolve(FieldId::Paper, config.layout)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
