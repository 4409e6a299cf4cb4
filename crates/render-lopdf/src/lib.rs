//! PDF document builder backed by the `lopdf` library.
//!
//! This crate adapts the uniform `pdflax-document` interface onto `lopdf`:
//! it keeps cursor and page bookkeeping in user units and hands every byte
//! of actual PDF structure (objects, content streams, xref) to `lopdf`.

mod adapter;
mod encoding;
mod fonts;

pub use adapter::{LopdfCreator, LopdfDocumentAdapter};
pub use fonts::{CoreFamily, CoreFont};
