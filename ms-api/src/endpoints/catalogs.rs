//! Catalog endpoints.

use ms_core::error::MsResult;
use ms_models::Catalog;

use super::resource::CATALOGS;
use crate::client::MediasiteClient;
use crate::query::{field, Filter, PagedRequest};
use crate::response::expect_single;

impl MediasiteClient {
    /// Find a catalog by exact name.
    ///
    /// The catalog search matches the term anywhere in the name, so results
    /// are narrowed to exact matches before requiring a single record.
    pub async fn find_catalog(&self, name: &str) -> MsResult<Catalog> {
        let request = PagedRequest::new(CATALOGS).filter(Filter::eq(field::NAME, name));
        let catalogs: Vec<Catalog> = self.fetch_page(&request).await?;
        expect_single(CATALOGS, exact_name_matches(catalogs, name))
    }
}

fn exact_name_matches(catalogs: Vec<Catalog>, name: &str) -> Vec<Catalog> {
    catalogs.into_iter().filter(|c| c.name == name).collect()
}
