//! Printable dot and line grid paper.
//!
//! The crate resolves a grid layout (paper size, margin, spacing and the
//! number of rows and columns, kept consistent whichever one was edited
//! last), picks legible swatch colours for the grid colour, and renders the
//! result as a PDF of identical pages.
//!
//! ```
//! use grid_paper::config::{Configuration, Edit};
//! use grid_paper::In;
//!
//! let mut config = Configuration::default();
//! config.apply(Edit::CountX(28)).unwrap();
//! assert_eq!(config.layout.grid.spacing, In(0.40357));
//!
//! let pdf = config.request().unwrap().render().unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod colour;
pub use colour::*;

/// The current configuration and the edits that change it
pub mod config;

/// Swatch colour contrast
pub mod contrast;
pub use contrast::{contrast, Foreground, Rgb, Swatch};

/// Holding rendered documents until they're downloaded
pub mod delivery;

mod document;
pub use document::*;

/// The grid and dot drawing routines
pub mod draw;

mod form_xobject;
pub use form_xobject::*;

mod info;
pub use info::*;

/// Resolution of grid layouts against the paper they're printed on
pub mod layout;

mod page;
pub use page::*;

/// Standard paper formats
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod request;
pub use request::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod content;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
