//! Shared content rendering logic for pages and form XObjects.

use crate::page::PageContents;
use std::io::Write;

/// Renders page contents to a PDF content stream.
///
/// This is the shared implementation used by both `Page::render()` and
/// `FormXObject::render()` to convert content items into PDF operators.
/// Every item is wrapped in its own `q`/`Q` pair so graphics state can't
/// leak from one item into the next.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
            PageContents::FormXObject(layout) => {
                let [a, b, c, d, e, f] = layout.transform.matrix();
                write!(&mut content, "q\n")?;
                write!(&mut content, "{a} {b} {c} {d} {e} {f} cm\n")?;
                write!(&mut content, "/X{} Do\n", layout.xobj_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

/// Flate-compress a rendered content stream
pub(crate) fn compress(rendered: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(
        rendered,
        miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
    )
}
