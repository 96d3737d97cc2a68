use crate::contrast::Rgb;
use crate::draw::{self, DrawParams};
use crate::error::GridError;
use crate::layout::{GridSpec, PaperSpec};
use crate::units::In;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// File name offered when a rendered document is saved
pub const DOCUMENT_FILENAME: &str = "grid.pdf";

/// The primitive repeated across the page
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Pattern {
    /// Ruled lines in both directions
    #[default]
    Grid,
    /// A dot at every lattice point
    Dot,
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grid" => Ok(Pattern::Grid),
            "Dot" => Ok(Pattern::Dot),
            _ => Err(GridError::UnknownPattern(s.to_string())),
        }
    }
}

/// A validated, immutable request for a grid document. Rendering consumes it.
#[derive(Debug, PartialEq)]
pub struct DocumentRequest {
    pattern: Pattern,
    width: In,
    height: In,
    margin: In,
    rgb: Rgb,
    count_x: i32,
    count_y: i32,
    spacing: In,
    page_count: usize,
}

/// Package a resolved layout into a [DocumentRequest].
///
/// The layout is expected to have come out of
/// [`resolve`](crate::layout::resolve), but every length is checked again
/// here since a request with a NaN in it would render garbage.
///
/// ```
/// use grid_paper::{assemble, Pattern, Rgb};
/// use grid_paper::layout::{GridSpec, PaperSpec};
/// use grid_paper::pagesize::Preset;
/// use grid_paper::In;
///
/// let paper = PaperSpec::preset(Preset::Letter);
/// let grid = GridSpec { margin: In(0.5), spacing: In(0.5), count_x: 20, count_y: 15 };
///
/// let request = assemble(Pattern::Dot, &paper, &grid, Rgb(0, 0, 255), 3).unwrap();
/// assert_eq!(request.page_count(), 3);
/// assert!(assemble(Pattern::Dot, &paper, &grid, Rgb(0, 0, 255), 0).is_err());
/// ```
pub fn assemble(
    pattern: Pattern,
    paper: &PaperSpec,
    grid: &GridSpec,
    rgb: Rgb,
    page_count: u32,
) -> Result<DocumentRequest, GridError> {
    if page_count < 1 {
        return Err(GridError::InvalidPageCount(page_count));
    }
    for (field, value) in [
        ("width", paper.width),
        ("height", paper.height),
        ("margin", grid.margin),
        ("d", grid.spacing),
    ] {
        if !value.is_finite() {
            return Err(GridError::InvalidNumericInput(field));
        }
    }

    let request = DocumentRequest {
        pattern,
        width: paper.width,
        height: paper.height,
        margin: grid.margin,
        rgb,
        count_x: grid.count_x,
        count_y: grid.count_y,
        spacing: grid.spacing,
        page_count: page_count as usize,
    };
    tracing::debug!(?request, "assembled document request");
    Ok(request)
}

impl DocumentRequest {
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn width(&self) -> In {
        self.width
    }

    pub fn height(&self) -> In {
        self.height
    }

    pub fn margin(&self) -> In {
        self.margin
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn count_x(&self) -> i32 {
        self.count_x
    }

    pub fn count_y(&self) -> i32 {
        self.count_y
    }

    pub fn spacing(&self) -> In {
        self.spacing
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether the margins leave room for at least one row and column
    pub fn has_content(&self) -> bool {
        self.count_x >= 0 && self.count_y >= 0
    }

    /// Draw the requested pattern and write the PDF to `w`
    pub fn write<W: Write>(self, w: W) -> Result<(), GridError> {
        let pattern = self.pattern;
        let params = DrawParams::from(self);
        match pattern {
            Pattern::Grid => draw::grid(w, &params),
            Pattern::Dot => draw::dot(w, &params),
        }
    }

    /// Draw the requested pattern into an in-memory PDF
    pub fn render(self) -> Result<Vec<u8>, GridError> {
        let mut pdf = Vec::new();
        self.write(&mut pdf)?;
        Ok(pdf)
    }
}

impl From<DocumentRequest> for DrawParams {
    fn from(request: DocumentRequest) -> Self {
        DrawParams {
            width: request.width,
            height: request.height,
            margin: request.margin,
            colour: request.rgb.into(),
            count_x: request.count_x,
            count_y: request.count_y,
            spacing: request.spacing,
            page_count: request.page_count,
            created: None,
        }
    }
}
