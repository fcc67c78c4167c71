//! Order structure as produced by transports

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::BrewError;

/// A customer order, decoded from `{"type": ..., "size"?: ...}`
///
/// The coffee type stays a raw string until cook time so an empty type and an
/// unknown type can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "type", default)]
    pub coffee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CoffeeSize>,
}

impl Order {
    /// Create an order for the given coffee type with no size
    pub fn new(coffee: impl Into<String>) -> Self {
        Self {
            coffee: coffee.into(),
            size: None,
        }
    }

    /// Set the cup size
    pub fn with_size(mut self, size: CoffeeSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Resolve the requested coffee type
    pub fn coffee_type(&self) -> Result<CoffeeType, BrewError> {
        let name = self.coffee.trim();
        if name.is_empty() {
            return Err(BrewError::Validation);
        }
        name.parse()
    }
}

/// Drinks the barista knows how to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoffeeType {
    Espresso,
    Latte,
    Cappuccino,
}

impl CoffeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeType::Espresso => "Espresso",
            CoffeeType::Latte => "Latte",
            CoffeeType::Cappuccino => "Cappuccino",
        }
    }
}

impl FromStr for CoffeeType {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Espresso" => Ok(CoffeeType::Espresso),
            "Latte" => Ok(CoffeeType::Latte),
            "Cappuccino" => Ok(CoffeeType::Cappuccino),
            other => Err(BrewError::UnsupportedRecipe(other.to_string())),
        }
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cup size in millilitres; only 200, 300 and 400 exist on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum CoffeeSize {
    Small,
    Medium,
    Large,
}

impl CoffeeSize {
    pub fn millilitres(&self) -> u16 {
        match self {
            CoffeeSize::Small => 200,
            CoffeeSize::Medium => 300,
            CoffeeSize::Large => 400,
        }
    }
}

impl TryFrom<u16> for CoffeeSize {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            200 => Ok(CoffeeSize::Small),
            300 => Ok(CoffeeSize::Medium),
            400 => Ok(CoffeeSize::Large),
            other => Err(format!("unknown coffee size {}, expected 200, 300 or 400", other)),
        }
    }
}

impl From<CoffeeSize> for u16 {
    fn from(size: CoffeeSize) -> Self {
        size.millilitres()
    }
}
