//! Docset bundle assembly: directory layout, manifest, search index, and
//! the rendered document.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocsetError, Result};
use crate::index::SearchIndex;
use crate::plist::render_plist;
use crate::renderer::{render_document, DocsetRenderer};

/// Summary of one conversion run.
#[derive(Debug)]
pub struct BuildOutcome {
    pub name: String,
    pub bundle_dir: PathBuf,
    /// Headings recorded (and anchored) during the parse pass.
    pub headings: usize,
    /// Rows written to the search index.
    pub indexed: usize,
}

/// Derive the docset name from the input file name. Everything after the
/// first `.` is treated as the extension, so `notes.v2.md` becomes
/// `notes`; existing bundles rely on that naming (see DESIGN.md).
pub fn docset_name(input: &Path) -> Result<String> {
    let file_name = input
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| DocsetError::InvalidName(input.display().to_string()))?;
    let name = file_name.split('.').next().unwrap_or(file_name);
    if name.is_empty() {
        return Err(DocsetError::InvalidName(file_name.to_string()));
    }
    Ok(name.to_string())
}

/// Convert `input` into `<output_dir>/<name>.docset`.
///
/// Single forward pass, fail-fast: the bundle directory must not already
/// exist, and the HTML is written only after the search index has been
/// committed, so an aborted run never leaves an `index.html` behind.
pub fn build_docset(input: &Path, output_dir: &Path) -> Result<BuildOutcome> {
    let name = docset_name(input)?;
    let source = fs::read_to_string(input)?;

    let bundle_dir = output_dir.join(format!("{name}.docset"));
    if bundle_dir.exists() {
        return Err(DocsetError::BundleExists(bundle_dir));
    }
    let contents = bundle_dir.join("Contents");
    let resources = contents.join("Resources");
    let documents = resources.join("Documents");
    fs::create_dir_all(&documents)?;

    fs::write(contents.join("Info.plist"), render_plist(&name))?;

    let mut index = SearchIndex::create(&resources.join("docSet.dsidx"))?;

    let mut renderer = DocsetRenderer::new();
    renderer.reset();
    let html = render_document(&source, &mut renderer)?;

    let indexed = index.populate(renderer.outline())?;
    fs::write(documents.join("index.html"), html)?;

    Ok(BuildOutcome {
        headings: renderer.outline().len(),
        indexed,
        name,
        bundle_dir,
    })
}
