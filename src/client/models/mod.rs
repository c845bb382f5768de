//! GitHub API data models
//!
//! Wire types for the variables endpoints. Field names follow the REST
//! payloads; anything derived locally is skipped during deserialization.

mod variable;

pub use variable::{SelectedReposPayload, Variable, VariablesPayload, Visibility};
