// Creators: business logic that depends on a product it never names.

use tracing::debug;

use crate::product::{ConcreteProductA, ConcreteProductB, Product};

/// Declares the factory method that hands out a [`Product`].
///
/// Despite the name, creating products is not the main job of a creator.
/// [`Creator::some_operation`] holds the core logic; implementors only
/// choose which product that logic works with.
pub trait Creator {
    /// Builds the product. There is no default: every creator must pick one.
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

// ============================================================================
// Concrete creators
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    // Signature still returns the abstract product type.
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(product = "ConcreteProductA", "factory method called");
        Box::new(ConcreteProductA)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(product = "ConcreteProductB", "factory method called");
        Box::new(ConcreteProductB)
    }
}
