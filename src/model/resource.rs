//! Ingredients held in the inventory

use std::fmt;

use serde::{Deserialize, Serialize};

/// A finite ingredient tracked by the inventory store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Milk, in millilitres
    Milk,
    /// Ground coffee, in grams
    Coffee,
}

impl Resource {
    /// Unit the resource is counted in
    pub fn unit(&self) -> &'static str {
        match self {
            Resource::Milk => "ml",
            Resource::Coffee => "g",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Milk => f.write_str("milk"),
            Resource::Coffee => f.write_str("coffee"),
        }
    }
}
