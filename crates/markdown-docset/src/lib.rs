//! Convert a single Markdown document into a Dash/Zeal docset bundle.
//!
//! A docset is a directory bundle holding rendered HTML, an `Info.plist`
//! manifest, and a SQLite search index that maps headings to anchors in
//! the HTML. Markdown parsing is delegated to `pulldown-cmark` and code
//! highlighting to `syntect`; the logic here is recording headings during
//! the render pass and turning the shallow ones into index rows.

mod bundle;
mod error;
mod highlight;
mod index;
mod plist;
mod renderer;
mod toc;

pub use bundle::{build_docset, docset_name, BuildOutcome};
pub use error::{DocsetError, Result};
pub use highlight::Highlighter;
pub use index::SearchIndex;
pub use plist::render_plist;
pub use renderer::{render_document, BlockRenderer, DocsetRenderer};
pub use toc::{HeadingRecord, IndexSink, Outline, ENTRY_TYPE, MAX_INDEX_DEPTH};
