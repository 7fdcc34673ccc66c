//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod illustrate_route;
pub mod optimize_route;
pub mod predict_parking;
pub mod reason_route;
