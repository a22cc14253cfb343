//! Domain types for the factory API.
//!
//! One flat record per resource kind, plus the [`Resource`] contract they
//! share. References between records (`product_id`, `customer_id`) are
//! plain numbers and are never resolved.

mod customer;
mod order;
mod product;
mod production;
mod resource;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use production::*;
pub use resource::*;
