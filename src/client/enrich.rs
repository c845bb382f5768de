//! Selected-repository counts for organization variables.
//!
//! Variables with `selected` visibility only carry a URL for the list of
//! repositories they apply to. Enrichment follows that URL once per variable
//! and stores the reported `total_count`.

use futures::stream::{self, StreamExt};
use log::debug;

use super::HttpTransport;
use super::fetch::get_page;
use super::models::{SelectedReposPayload, Variable};
use crate::error::{Error, Result};

/// Fill in `selected_repo_count` for every variable that has a
/// selected-repositories reference.
///
/// Lookups are issued in variable order with at most `max_concurrent` in
/// flight; `1` makes them strictly sequential. The first failure aborts the
/// whole step with [`Error::Enrichment`] naming the variable. Counts already
/// written stay in place.
pub async fn enrich_selected_repo_counts<C>(
    client: &C,
    variables: &mut [Variable],
    max_concurrent: usize,
) -> Result<()>
where
    C: HttpTransport + ?Sized,
{
    let targets: Vec<(usize, String, String)> = variables
        .iter()
        .enumerate()
        .filter_map(|(index, var)| {
            var.selected_repos_ref()
                .map(|url| (index, var.name.clone(), url.to_string()))
        })
        .collect();

    if targets.is_empty() {
        return Ok(());
    }

    debug!(
        "Looking up selected repositories for {} variables with max {} concurrent",
        targets.len(),
        max_concurrent
    );

    let mut lookups = stream::iter(targets)
        .map(|(index, name, url)| async move {
            let result = get_page::<SelectedReposPayload, C>(client, &url).await;
            (index, name, result)
        })
        .buffered(max_concurrent.max(1));

    while let Some((index, name, result)) = lookups.next().await {
        let page = result.map_err(|source| Error::Enrichment {
            name,
            source: Box::new(source),
        })?;
        variables[index].selected_repo_count = Some(page.data.total_count);
    }

    Ok(())
}
