//! Layout resolution for grid paper.
//!
//! A grid is described by the paper it's printed on ([PaperSpec]) and the
//! lattice drawn inside the margins ([GridSpec]). The two are tied together
//! by the identity
//!
//! ```text
//! count = floor((dimension - 2·margin) / spacing + 0.02)
//! ```
//!
//! which holds on both axes after every call to [resolve]. Editing a count
//! runs the identity backwards to find a new spacing instead.
//!
//! # Example
//!
//! ```
//! use grid_paper::layout::{resolve, FieldId, GridSpec, Layout, PaperSpec};
//! use grid_paper::In;
//!
//! let mut layout = Layout {
//!     paper: PaperSpec::custom(In(8.5), In(11.0)),
//!     grid: GridSpec { margin: In(0.5), spacing: In(0.5), count_x: 15, count_y: 20 },
//! };
//!
//! // ask for 30 columns instead of 15; the spacing halves to match
//! layout.grid.count_x = 30;
//! let layout = resolve(FieldId::CountX, layout).unwrap();
//! assert_eq!(layout.grid.spacing, In(0.25));
//! assert_eq!(layout.grid.count_y, 40);
//! ```

mod grid;
mod margins;

pub use grid::*;
pub use margins::*;
