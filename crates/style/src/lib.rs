pub mod dimension;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, Orientation, PageFormat, Unit};
pub use stylesheet::{ElementKind, ResolvedStyle, Style, Stylesheet};
pub use text::{CellAdvance, CellBorder, Edges, FontVariant, TextAlign};
