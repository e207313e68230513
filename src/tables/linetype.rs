//! Linetype table entry

/// A linetype table entry
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Linetype name (group code 2)
    pub name: String,
    /// Descriptive display name (group code 3)
    pub display_name: String,
    /// Standard flags (group code 70)
    pub flags: i16,
}

impl LineType {
    /// Create a new linetype
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            display_name: display_name.into(),
            flags: 64,
        }
    }

    /// Create the standard continuous linetype
    pub fn continuous() -> Self {
        LineType::new("CONTINUOUS", "Solid Line")
    }
}

impl Default for LineType {
    fn default() -> Self {
        LineType::new("", "")
    }
}
