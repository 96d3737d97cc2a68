use crate::{
    form_xobject::FormXObject,
    info::Info,
    page::{Page, PageContents},
    refs::{ObjectReferences, RefType},
    GridError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub form_xobjects: Arena<FormXObject>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a Form XObject to the document structure. Form XObjects are reusable content
    /// containers that can be placed on pages with transformations. The returned value
    /// is the ID of the form, which can be used to place it on pages.
    pub fn add_form_xobject(&mut self, form: FormXObject) -> Id<FormXObject> {
        self.form_xobjects.alloc(form)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. This limitation is due
    /// to the underlying pdf-writer implementation.
    ///
    /// Until `write` is called, all references are un-resolved. Calling `write` will
    /// generate PDF objects and corresponding references to those objects in a fixed
    /// order, so the same document always produces the same bytes.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), GridError> {
        let Document {
            info,
            pages,
            page_order,
            form_xobjects,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not arena index
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        // refs for every form are generated up front so pages can name them
        for (i, _) in form_xobjects.iter() {
            refs.gen(RefType::FormXObject(i.index()));
        }

        for (i, xobj) in form_xobjects.iter() {
            xobj.write_with_ref(&refs, i.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(GridError::MissingObject)?;
            for content in page.contents.iter() {
                if let PageContents::FormXObject(layout) = content {
                    form_xobjects
                        .get(layout.xobj_id)
                        .ok_or(GridError::MissingObject)?;
                }
            }
            page.write(&mut refs, page_index, &form_xobjects, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
