//! Layer table entry

use bitflags::bitflags;

bitflags! {
    /// Layer state flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const DEFAULT_FROZEN = 2;
        /// Layer is locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Color index
    pub color: i16,
    /// Layer state flags
    pub flags: LayerFlags,
    /// Index of the layer's linetype in [`Tables::line_types`](super::Tables)
    pub line_type: usize,
}

impl Layer {
    /// Create a new layer with default settings (white, no flags)
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color: 7,
            flags: LayerFlags::empty(),
            line_type: 0,
        }
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: i16) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::new("")
    }
}
