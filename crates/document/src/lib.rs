//! Uniform document-building contract for PDF rendering backends.
//!
//! This crate defines the surface every backend implements:
//! - [`PdfDocument`], the object-safe builder interface (pages, fonts,
//!   colors, cells, cursor, output),
//! - [`PdfDocumentExt`], the styled DOM-like element helpers layered on
//!   top of it,
//! - [`PdfCreator`], the construction seam named backends plug through,
//! - [`DocumentConfig`], the page-setup options with their defaults.

pub mod config;
pub mod creator;
pub mod dom;
pub mod error;
pub mod money;
pub mod traits;

pub use config::DocumentConfig;
pub use creator::PdfCreator;
pub use dom::PdfDocumentExt;
pub use error::DocumentError;
pub use money::euro;
pub use traits::PdfDocument;
