//! Kitchen-inventory simulator.
//!
//! This crate contains only the simulation mechanics (dirt, stock, budget);
//! every domain decision — how cleaning works, what an expense buys, what a
//! recipe does to the stock — is injected by the caller as a strategy value.

pub mod kitchen;
pub mod stock;

pub use kitchen::{
    Cleaner, DIRT_CEILING, Kitchen, KitchenId, Recipe, RecipeOutcome, Supplier,
};
pub use stock::Ingredients;
