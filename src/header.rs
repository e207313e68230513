//! Drawing header variables
//!
//! The HEADER section of a drawing is a flat list of named variables
//! (`$ACADVER`, `$CLAYER`, ...), each carrying one typed value.  Variables
//! are kept in file order and names are unique; the reader treats a
//! duplicate name as a fatal error.

use crate::types::{Vector2, Vector3};
use indexmap::IndexMap;

/// Value of a single header variable
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// Integer value (group codes 62, 70, 280, 370, 380)
    Integer(i32),
    /// Floating-point value (group codes 40, 50)
    Float(f64),
    /// Boolean value (group code 290)
    Bool(bool),
    /// Text value (group codes 1, 2, 3, 5, 6, 7, 8)
    Text(String),
    /// 2D coordinate (group codes 10/20)
    Coordinate2d(Vector2),
    /// 3D coordinate (group codes 10/20/30)
    Coordinate3d(Vector3),
}

/// Header section: drawing variables in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    entries: IndexMap<String, HeaderValue>,
}

impl Header {
    /// Create an empty header
    pub fn new() -> Self {
        Header {
            entries: IndexMap::new(),
        }
    }

    /// Insert a variable.  Returns `false` when the name is already
    /// present; the existing value is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, value: HeaderValue) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, value);
        true
    }

    /// Get a variable's value by name
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries.get(name)
    }

    /// Check if a variable exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over variables in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the header has no variables
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
