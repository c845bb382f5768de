//! API trait definitions
//!
//! - [`VariablesApi`] - Actions variable listing
//!
//! Command handlers depend on these traits rather than on a concrete client
//! so tests can substitute the transport underneath.

mod variables;

pub use variables::VariablesApi;
