// Products: the family of interchangeable results a creator can hand out.

/// Operations every concrete product must implement.
pub trait Product {
    fn operation(&self) -> String;
}

// ============================================================================
// Concrete products
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

// ============================================================================
// Closed set of products (no heap allocation, no dynamic dispatch)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyProduct {
    A(ConcreteProductA),
    B(ConcreteProductB),
}

impl Product for AnyProduct {
    fn operation(&self) -> String {
        match self {
            AnyProduct::A(product) => product.operation(),
            AnyProduct::B(product) => product.operation(),
        }
    }
}
