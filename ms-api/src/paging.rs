//! Paginated list queries.
//!
//! Pages are requested with a fixed `$top` and an advancing `$skip` until a
//! page comes back shorter than the page size. A page that is exactly full
//! always triggers one more request, so a collection whose size is a multiple
//! of the page size costs one trailing empty fetch.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use ms_core::constants::PAGE_SIZE;
use ms_core::error::MsResult;
use ms_models::ODataPage;

use crate::client::MediasiteClient;
use crate::query::PagedRequest;
use crate::response::expect_single;

/// Drain a paged source.
///
/// `fetch` is called with the current skip offset and returns that page's
/// items. The first error aborts the loop; no partial list is returned.
pub async fn drain_pages<T, F, Fut>(page_size: usize, mut fetch: F) -> MsResult<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = MsResult<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut skip = 0;
    loop {
        let page = fetch(skip).await?;
        let returned = page.len();
        skip += returned;
        items.extend(page);
        if returned < page_size {
            break;
        }
    }
    Ok(items)
}

impl MediasiteClient {
    /// Fetch a single page exactly as described by `request`.
    pub async fn fetch_page<T: DeserializeOwned>(&self, request: &PagedRequest) -> MsResult<Vec<T>> {
        let page: ODataPage<T> = self
            .get_json(request.resource(), &request.query_pairs())
            .await?;
        Ok(page.value)
    }

    /// Fetch one page and require it to hold exactly one record.
    ///
    /// Used for exact-match lookups, where zero or several matches are errors.
    pub async fn find_single<T: DeserializeOwned>(&self, request: &PagedRequest) -> MsResult<T> {
        let items = self.fetch_page(request).await?;
        expect_single(request.resource(), items)
    }

    /// Fetch every record matching `request`, one page of `PAGE_SIZE` at a time.
    ///
    /// Any `$top`/`$skip` already set on `request` are replaced.
    pub async fn fetch_all<T: DeserializeOwned>(&self, request: &PagedRequest) -> MsResult<Vec<T>> {
        let items = drain_pages(PAGE_SIZE, |skip| {
            let page_request = request.clone().top(PAGE_SIZE).skip(skip);
            async move { self.fetch_page::<T>(&page_request).await }
        })
        .await?;
        debug!("{}: fetched {} records", request.resource(), items.len());
        Ok(items)
    }
}
