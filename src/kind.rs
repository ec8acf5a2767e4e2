// Picking a creator at runtime from a name in the launch plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::creator::{ConcreteCreatorA, ConcreteCreatorB, Creator};
use crate::error::AppError;
use crate::product::{AnyProduct, ConcreteProductA, ConcreteProductB};

/// The creators this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatorKind {
    A,
    B,
}

impl CreatorKind {
    /// Every kind, in launch order.
    pub const ALL: [CreatorKind; 2] = [CreatorKind::A, CreatorKind::B];

    /// Name printed by the app when launching this creator.
    pub fn label(self) -> &'static str {
        match self {
            CreatorKind::A => "ConcreteCreator1",
            CreatorKind::B => "ConcreteCreator2",
        }
    }

    pub fn build(self) -> Box<dyn Creator> {
        match self {
            CreatorKind::A => Box::new(ConcreteCreatorA),
            CreatorKind::B => Box::new(ConcreteCreatorB),
        }
    }

    /// Enum-based factory: same product as `build().factory_method()`,
    /// without the box.
    pub fn make_product(self) -> AnyProduct {
        match self {
            CreatorKind::A => AnyProduct::A(ConcreteProductA),
            CreatorKind::B => AnyProduct::B(ConcreteProductB),
        }
    }
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CreatorKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(kind) = Self::ALL.iter().find(|k| k.label() == trimmed) {
            return Ok(*kind);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(CreatorKind::A),
            "b" | "2" => Ok(CreatorKind::B),
            _ => Err(AppError::unknown_creator(s)),
        }
    }
}

impl<'de> Deserialize<'de> for CreatorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
