use crate::content::{compress, render_contents};
use crate::form_xobject::{FormXObject, FormXObjectLayout};
use crate::layout::Margins;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::GridError;
use id_arena::Arena;
use pdf_writer::{Filter, Finish, Name, Pdf};

/// An item of content placed on a page
#[derive(Debug)]
pub enum PageContents {
    /// Pre-rendered PDF content operators
    RawContent(Vec<u8>),
    /// A Form XObject placed with a transformation
    FormXObject(FormXObjectLayout),
}

/// A single page of the document
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The content of the page, drawn in order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page of the given (width, height), optionally inset by
    /// margins to produce the content box
    pub fn new(size: (Pt, Pt), margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect::from_size(width, height),
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Place a Form XObject on the page
    pub fn add_form_xobject(&mut self, layout: FormXObjectLayout) {
        self.contents.push(PageContents::FormXObject(layout));
    }

    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_contents(&self.contents)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        form_xobjects: &Arena<FormXObject>,
        writer: &mut Pdf,
    ) -> Result<(), GridError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(GridError::MissingObject)?;
        let page_tree = refs.get(RefType::PageTree).ok_or(GridError::MissingObject)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in form_xobjects.iter() {
            if let Some(xobj_ref) = refs.get(RefType::FormXObject(i.index())) {
                resource_xobjects.pair(Name(format!("X{}", i.index()).as_bytes()), xobj_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = compress(&self.render()?);
        writer
            .stream(content_id, rendered.as_slice())
            .filter(Filter::FlateDecode);
        Ok(())
    }
}
