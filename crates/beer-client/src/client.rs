//! Catalog API Client
//!
//! Turns view intents (list a page, search, open a detail, suggest similar
//! beers) into proxy requests and shapes the answers into domain types.
//!
//! Failure policy differs per path: list and similar-beer lookups fail soft
//! and always hand back something renderable, detail lookups surface their
//! error because there is nothing sensible to show instead.

use futures::future::try_join_all;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{ApiError, Beer, BeerDetail, BeerPage};
use crate::paginator::PageRequest;
use crate::payload::{parse_detail, parse_list, RawBeer, RawPage};
use crate::search::matches_query;
use crate::similar::select_similar;
use crate::transport::Transport;

/// Proxy listing route, relative to the page origin
pub const LIST_PATH: &str = "/api/beers";

/// Unreserved characters stay as they are inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn detail_path(id: &str) -> String {
    format!("{}/{}", LIST_PATH, utf8_percent_encode(id, PATH_SEGMENT))
}

#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One page of the catalog. Never fails: any error yields the
    /// single-item error page.
    pub async fn fetch_list(&self, page_size: usize, cursor: Option<&str>) -> BeerPage {
        match self.try_fetch_list(page_size, cursor).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Error in fetch_list: {}", e);
                BeerPage::error_page()
            }
        }
    }

    async fn try_fetch_list(&self, page_size: usize, cursor: Option<&str>) -> Result<BeerPage, ApiError> {
        let page_size = page_size.max(1);
        let params = [
            ("count", Some(page_size.to_string())),
            ("cursor", cursor.map(str::to_string)),
        ];
        log::debug!("GET {} count={} cursor={:?}", LIST_PATH, page_size, cursor);

        let value = self.transport.get_json(LIST_PATH, &params).await?;
        Ok(parse_list(value)?.into_page(page_size))
    }

    /// The full listing, undecorated. Only used to find positions.
    async fn fetch_listing(&self) -> Result<RawPage, ApiError> {
        let value = self.transport.get_json(LIST_PATH, &[]).await?;
        parse_list(value)
    }

    /// Full detail for `id`, decorated to match where the beer sits in the
    /// unpaginated listing (position 0 if it is not there).
    pub async fn fetch_detail(&self, id: &str) -> Result<BeerDetail, ApiError> {
        let raw = self.fetch_raw_detail(id).await?;
        let position = self.fetch_listing().await?.position_of(id);
        Ok(raw.into_detail(position))
    }

    /// Like [`fetch_detail`](Self::fetch_detail) when the caller already
    /// knows the listing position; skips the listing request.
    pub async fn fetch_detail_at(&self, id: &str, position: usize) -> Result<BeerDetail, ApiError> {
        let raw = self.fetch_raw_detail(id).await?;
        Ok(raw.into_detail(position))
    }

    async fn fetch_raw_detail(&self, id: &str) -> Result<RawBeer, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput("Beer ID is required".to_string()));
        }
        log::debug!("GET {}", detail_path(id));

        let value = self.transport.get_json(&detail_path(id), &[]).await?;
        parse_detail(value)
    }

    /// A page filtered by `query`. Filtering is per page: cursor and
    /// `has_more` come from the unfiltered page, so an empty result does not
    /// mean later pages have no matches.
    pub async fn search_list(&self, query: &str, page_size: usize, cursor: Option<&str>) -> BeerPage {
        let mut page = self.fetch_list(page_size, cursor).await;
        if !query.trim().is_empty() {
            page.beers.retain(|beer| matches_query(beer, query));
        }
        page
    }

    /// Load whatever the paginator asked for
    pub async fn load(&self, request: &PageRequest) -> BeerPage {
        let cursor = request.cursor.as_deref();
        if request.is_search() {
            self.search_list(&request.query, request.page_size, cursor).await
        } else {
            self.fetch_list(request.page_size, cursor).await
        }
    }

    /// Up to `max` resolved suggestions for `target` drawn from `pool`.
    ///
    /// All details are requested together; if any of them fails the whole
    /// result is empty rather than partial.
    pub async fn similar_beers(&self, target: &Beer, pool: &[Beer], max: usize) -> Vec<BeerDetail> {
        let picks = select_similar(target, pool, max);
        if picks.is_empty() {
            return Vec::new();
        }

        match self.resolve_details(&picks).await {
            Ok(details) => details,
            Err(e) => {
                log::error!("Error loading similar beers: {}", e);
                Vec::new()
            }
        }
    }

    async fn resolve_details(&self, picks: &[Beer]) -> Result<Vec<BeerDetail>, ApiError> {
        let listing = self.fetch_listing().await?;
        let requests = picks
            .iter()
            .map(|beer| self.fetch_detail_at(&beer.id, listing.position_of(&beer.id)));
        try_join_all(requests).await
    }
}
