//! Drawing of the grid and dot patterns.
//!
//! Both patterns are a pure function of their [DrawParams]: the pattern is
//! drawn once into a [FormXObject] which is then placed on every page.
//! Nothing time-dependent is embedded unless [DrawParams::created] is set,
//! so equal parameters produce identical bytes.
//!
//! # Example
//!
//! ```
//! use grid_paper::draw::{grid, DrawParams};
//! use grid_paper::{Colour, In};
//!
//! let params = DrawParams {
//!     width: In(11.0),
//!     height: In(8.5),
//!     margin: In(0.25),
//!     colour: Colour::new_rgb_bytes(100, 100, 100),
//!     count_x: 42,
//!     count_y: 32,
//!     spacing: In(0.25),
//!     page_count: 2,
//!     created: None,
//! };
//!
//! let mut pdf = Vec::new();
//! grid(&mut pdf, &params).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

use crate::colour::Colour;
use crate::document::Document;
use crate::form_xobject::{FormXObject, FormXObjectLayout};
use crate::info::Info;
use crate::layout::Margins;
use crate::page::Page;
use crate::transform::Transform;
use crate::units::*;
use crate::GridError;
use chrono::{DateTime, FixedOffset};
use pdf_writer::Content;
use std::io::Write;

/// Bézier control point distance for a quarter circle of radius 1, see
/// <http://spencermortensen.com/articles/bezier-circle/>
#[allow(clippy::excessive_precision)]
const CIRCLE_KAPPA: f32 = 0.551_915_024_494;

/// Dot radius as a fraction of the spacing
const DOT_RADIUS_RATIO: f32 = 0.1;

/// Everything the drawing routines need to know. Lengths are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    pub width: In,
    pub height: In,
    pub margin: In,
    pub colour: Colour,
    /// Spacings across the page; the pattern has `count_x + 1` columns.
    /// A negative count leaves the pages blank.
    pub count_x: i32,
    /// Spacings down the page; the pattern has `count_y + 1` rows
    pub count_y: i32,
    pub spacing: In,
    /// Number of identical pages in the document
    pub page_count: usize,
    /// Stamped into the document info when set. Leave unset for
    /// reproducible output.
    pub created: Option<DateTime<FixedOffset>>,
}

impl DrawParams {
    fn page_size(&self) -> (Pt, Pt) {
        (self.width.into(), self.height.into())
    }

    /// Positions of the columns and rows, in points from the page origin.
    /// Empty when there's nothing to draw.
    fn positions(&self) -> (Vec<Pt>, Vec<Pt>) {
        if self.count_x < 0 || self.count_y < 0 {
            return (Vec::new(), Vec::new());
        }
        let margin: Pt = self.margin.into();
        let spacing: Pt = self.spacing.into();
        let steps = |count: i32| {
            (0..=count)
                .map(|i| margin + spacing * i as f32)
                .collect::<Vec<Pt>>()
        };
        (steps(self.count_x), steps(self.count_y))
    }
}

/// Draw a grid of lines, `spacing` apart, starting at the bottom-left margin
pub fn grid<W: Write>(output: W, params: &DrawParams) -> Result<(), GridError> {
    let (xs, ys) = params.positions();
    let mut content = Content::new();

    if let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) =
        (xs.first(), xs.last(), ys.first(), ys.last())
    {
        params.colour.set_stroke(&mut content);
        for &x in xs.iter() {
            content.move_to(x.into(), y0.into());
            content.line_to(x.into(), y1.into());
        }
        for &y in ys.iter() {
            content.move_to(x0.into(), y.into());
            content.line_to(x1.into(), y.into());
        }
        content.stroke();
    }

    tracing::trace!(columns = xs.len(), rows = ys.len(), "drew line grid");
    write_document(output, params, "Grid paper", content)
}

/// Draw a lattice of filled dots, `spacing` apart, starting at the
/// bottom-left margin. Each dot has a radius of a tenth of the spacing.
pub fn dot<W: Write>(output: W, params: &DrawParams) -> Result<(), GridError> {
    let (xs, ys) = params.positions();
    let mut content = Content::new();

    if !xs.is_empty() && !ys.is_empty() {
        let spacing: Pt = params.spacing.into();
        let radius = spacing * DOT_RADIUS_RATIO;
        params.colour.set_fill(&mut content);
        for &x in xs.iter() {
            for &y in ys.iter() {
                circle(&mut content, x, y, radius);
            }
        }
        content.fill_nonzero();
    }

    tracing::trace!(columns = xs.len(), rows = ys.len(), "drew dot grid");
    write_document(output, params, "Dot paper", content)
}

/// Add a circle approximated by four cubic Bézier curves to the current path
fn circle(content: &mut Content, x: Pt, y: Pt, r: Pt) {
    let (x, y, r) = (x.0, y.0, r.0);
    let dist = r * CIRCLE_KAPPA;
    let (top, bottom, left, right) = (y - r, y + r, x - r, x + r);

    content.move_to(x, top);
    content.cubic_to(x - dist, top, left, y - dist, left, y);
    content.cubic_to(left, y + dist, x - dist, bottom, x, bottom);
    content.cubic_to(x + dist, bottom, right, y + dist, right, y);
    content.cubic_to(right, y - dist, x + dist, top, x, top);
    content.close_path();
}

fn write_document<W: Write>(
    output: W,
    params: &DrawParams,
    title: &str,
    content: Content,
) -> Result<(), GridError> {
    let size = params.page_size();
    let mut doc = Document::default();

    let mut info = Info::new();
    info.title(title).subject(format!(
        "{} × {} spacings of {} on {} × {} paper",
        params.count_x, params.count_y, params.spacing, params.width, params.height
    ));
    if let Some(created) = params.created {
        info.creation_date(created);
    }
    doc.set_info(info);

    let mut form = FormXObject::new(size.0, size.1);
    form.add_content(content);
    let form_id = doc.add_form_xobject(form);

    for _ in 0..params.page_count {
        let mut page = Page::new(size, Some(Margins::all(params.margin)));
        page.add_form_xobject(FormXObjectLayout {
            xobj_id: form_id,
            transform: Transform::identity(),
        });
        doc.add_page(page);
    }

    doc.write(output)
}
