//! Cursor-based collection walking
//!
//! GitHub list endpoints return one page per request and advertise the next
//! page through the `Link` header. The walker follows those continuations in
//! order until the server stops offering one.

use log::debug;
use serde::de::DeserializeOwned;

use super::fetch::get_page;
use super::models::{Variable, VariablesPayload};
use super::{HttpTransport, rest_prefix};
use crate::error::Result;

/// Items requested per page. 100 is the largest page GitHub serves.
pub const PER_PAGE: usize = 100;

/// A response envelope that wraps one page of a collection.
pub trait Paged: DeserializeOwned + Send {
    type Item: Send;

    /// Consume the envelope, yielding the items on this page
    fn into_items(self) -> Vec<Self::Item>;
}

impl Paged for VariablesPayload {
    type Item = Variable;

    fn into_items(self) -> Vec<Variable> {
        self.variables
    }
}

/// URL of the first page of `path` on `host`
pub fn first_page_url(host: &str, path: &str) -> String {
    format!("{}{}?per_page={}", rest_prefix(host), path, PER_PAGE)
}

/// Fetch every page of `path` on `host`, concatenated in server order.
///
/// The first failing page aborts the walk; no partial results are returned.
pub async fn walk_collection<P, C>(client: &C, host: &str, path: &str) -> Result<Vec<P::Item>>
where
    P: Paged,
    C: HttpTransport + ?Sized,
{
    let mut items = Vec::new();
    let mut url = first_page_url(host, path);
    let mut page_number = 1usize;

    loop {
        let page = get_page::<P, C>(client, &url).await?;
        let page_items = page.data.into_items();
        debug!("Page {} of {} returned {} items", page_number, path, page_items.len());
        items.extend(page_items);

        match page.next {
            Some(next) => {
                url = next.url().to_string();
                page_number += 1;
            }
            None => break,
        }
    }

    debug!("Fetched {} items from {} in {} pages", items.len(), path, page_number);
    Ok(items)
}
