//! Variables API trait

use async_trait::async_trait;

use crate::client::models::Variable;
use crate::error::Result;
use crate::scope::Scope;

/// Listing operations for Actions variables
#[async_trait]
pub trait VariablesApi: Send + Sync {
    /// List every variable defined at `scope` on `host`.
    ///
    /// When `enrich_selected_repo_counts` is set and the scope is an
    /// organization, each `selected` variable also gets its repository count.
    async fn list_variables(
        &self,
        scope: &Scope,
        host: &str,
        enrich_selected_repo_counts: bool,
    ) -> Result<Vec<Variable>>;
}
