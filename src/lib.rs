//! # pdflax
//!
//! A uniform PDF-document-building interface (page setup, fonts, colors,
//! cell and multiline layout, styled DOM-like elements) on top of a single
//! underlying PDF library, with the service wiring that lets applications
//! swap and name rendering backends:
//!
//! - **factory**: [`PdflaxFactory`], the one-backend document factory,
//! - **creator**: [`PdfCreatorRegistry`], a facade resolving named backends
//!   through a shared [`RegistryWithDefault`],
//! - **provider**: the service-container seam and the two bundled
//!   service providers (`pdflax` and `pdflax-registry` bindings).
//!
//! The document-building contract itself lives in `pdflax-document`, the
//! style cascade in `pdflax-style`, and the lopdf-backed implementation in
//! `pdflax-render-lopdf`; everything is re-exported here.

pub mod creator;
pub mod error;
pub mod factory;
pub mod provider;

// Re-export the foundation crates
pub use pdflax_style as style;
pub use pdflax_types as types;

// Re-export commonly used types
pub use pdflax_document::{
    euro, DocumentConfig, DocumentError, PdfCreator, PdfDocument, PdfDocumentExt,
};
pub use pdflax_registry::{RegistryError, RegistryWithDefault};
pub use pdflax_render_lopdf::{LopdfCreator, LopdfDocumentAdapter};
pub use pdflax_style::{
    CellAdvance, CellBorder, ElementKind, FontVariant, Margins, Orientation, PageFormat, Style,
    Stylesheet, TextAlign, Unit,
};
pub use pdflax_types::{Color, ColorError, ColorSpec};

pub use creator::{PdfCreatorRegistry, SharedPdfCreator};
pub use error::PdflaxError;
pub use factory::PdflaxFactory;
pub use provider::{
    PdflaxRegistryServiceProvider, PdflaxServiceProvider, ProviderError, ServiceContainer,
    ServiceProvider, PDFLAX, PDFLAX_REGISTRY,
};
