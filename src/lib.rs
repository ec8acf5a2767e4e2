//! # Factory Method
//!
//! A creator declares a factory method returning an abstract [`Product`];
//! concrete creators override it to pick the product, while
//! [`Creator::some_operation`] stays the same for all of them.
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin factory_method_demo
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod creator;
pub mod error;
pub mod kind;
pub mod logging;
pub mod product;

pub use client::client_code;
pub use config::LaunchPlan;
pub use creator::{ConcreteCreatorA, ConcreteCreatorB, Creator};
pub use error::{AppError, Result};
pub use kind::CreatorKind;
pub use product::{AnyProduct, ConcreteProductA, ConcreteProductB, Product};
