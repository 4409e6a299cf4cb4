use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// Font variant within a core family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// Which edges of a cell get a border line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct Edges {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Edges {
    pub const ALL: Edges = Edges {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    pub fn any(&self) -> bool {
        self.left || self.top || self.right || self.bottom
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CellBorder {
    #[default]
    None,
    Frame,
    Edges(Edges),
}

impl CellBorder {
    /// The concrete edge set this border draws.
    pub fn edges(&self) -> Edges {
        match self {
            CellBorder::None => Edges::default(),
            CellBorder::Frame => Edges::ALL,
            CellBorder::Edges(edges) => *edges,
        }
    }
}

/// Where the cursor moves once a cell has been drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CellAdvance {
    /// Stay on the same line, to the right of the cell.
    #[default]
    Right,
    /// Beginning of the next line, at the left margin.
    NextLine,
    /// Below the cell, keeping the cell's x position.
    Below,
}
