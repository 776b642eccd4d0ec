//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects with a permission bit-set
//! - `component::create_test_*_row` - Create message component rows as attached to a message

pub mod component;
pub mod role;

// Re-export commonly used functions for convenience
pub use role::create_test_role;
