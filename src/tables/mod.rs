//! Drawing table types (LTYPE and LAYER)

pub mod layer;
pub mod linetype;

pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;

/// The TABLES section: linetypes and layers, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    /// Linetype records
    pub line_types: Vec<LineType>,
    /// Layer records
    pub layers: Vec<Layer>,
}

impl Tables {
    /// Create empty tables
    pub fn new() -> Self {
        Tables::default()
    }

    /// Find the index of a layer by name
    pub fn layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.name == name)
    }

    /// Find the index of a linetype by name
    pub fn line_type_index(&self, name: &str) -> Option<usize> {
        self.line_types.iter().position(|lt| lt.name == name)
    }
}
