//! Form XObjects for reusable PDF content.
//!
//! A Form XObject is a self-contained content container that is written
//! once and then referenced from as many pages as needed. A multi-page grid
//! document draws its pattern into a single form and places that form on
//! every page, so the file grows by a few bytes per extra page rather than
//! by a full copy of the pattern.
//!
//! # Coordinate system
//!
//! Form XObjects use PDF's coordinate system where (0, 0) is at the bottom-left.
//! When placed on a page, the form's origin aligns with the page origin unless
//! a transformation is applied.

use crate::content::{compress, render_contents};
use crate::page::PageContents;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::transform::Transform;
use crate::units::*;
use crate::GridError;
use id_arena::Id;
use pdf_writer::{Content, Filter, Pdf};

/// A reusable content container (Form XObject) that can be placed on pages
/// with transformations.
///
/// # Usage
///
/// 1. Create a `FormXObject` with a bounding box
/// 2. Add content with [`FormXObject::add_content`]
/// 3. Register it with the document via [`Document::add_form_xobject`](crate::Document::add_form_xobject)
/// 4. Place it on pages using [`Page::add_form_xobject`](crate::Page::add_form_xobject)
///    with a [`FormXObjectLayout`]
///
/// # Example
///
/// ```
/// use grid_paper::{Document, Page, FormXObject, FormXObjectLayout, Transform, Pt};
///
/// let mut doc = Document::default();
///
/// let form = FormXObject::new(Pt(144.0), Pt(144.0));
/// let form_id = doc.add_form_xobject(form);
///
/// for _ in 0..3 {
///     let mut page = Page::new((Pt(144.0), Pt(144.0)), None);
///     page.add_form_xobject(FormXObjectLayout {
///         xobj_id: form_id,
///         transform: Transform::identity(),
///     });
///     doc.add_page(page);
/// }
///
/// let mut out = Vec::new();
/// doc.write(&mut out).unwrap();
/// assert!(out.starts_with(b"%PDF"));
/// ```
#[derive(Debug)]
pub struct FormXObject {
    /// Bounding box of the form content; anything outside is clipped
    pub bbox: Rect,
    /// Content to render
    pub contents: Vec<PageContents>,
}

impl FormXObject {
    /// Create a new Form XObject with the given dimensions
    pub fn new(width: Pt, height: Pt) -> Self {
        FormXObject {
            bbox: Rect::from_size(width, height),
            contents: Vec::new(),
        }
    }

    /// Add arbitrary pdf_writer::Content to the form
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::RawContent(content.finish()));
    }

    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_contents(&self.contents)
    }

    /// Write this Form XObject to the PDF using a pre-generated ref.
    /// The ref must be generated before calling this method.
    pub(crate) fn write_with_ref(
        &self,
        refs: &ObjectReferences,
        xobj_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), GridError> {
        let xobj_ref = refs
            .get(RefType::FormXObject(xobj_index))
            .ok_or(GridError::MissingObject)?;

        let compressed = compress(&self.render()?);

        let mut xobj = writer.form_xobject(xobj_ref, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.bbox(self.bbox.into());

        Ok(())
    }
}

/// Specifies how to place a Form XObject on a page.
#[derive(Debug)]
pub struct FormXObjectLayout {
    /// The Form XObject to place (obtained from [`Document::add_form_xobject`](crate::Document::add_form_xobject))
    pub xobj_id: Id<FormXObject>,
    /// Transformation matrix applied when rendering this placement
    pub transform: Transform,
}
