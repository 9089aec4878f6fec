//! Pagination State
//!
//! Tracks the beers shown on the home view and decides which page to ask
//! for next. Issuing a request and applying its result are separate steps so
//! the UI can keep this in a signal while the fetch is in flight.

use crate::domain::{Beer, BeerPage};

/// Page size of the first load and of every search
pub const INITIAL_PAGE_SIZE: usize = 20;
/// Page size of each infinite-scroll follow-up
pub const NEXT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Replaces whatever is shown
    Initial,
    /// Appends to what is shown
    Next,
}

/// A page the paginator wants loaded
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub kind: PageKind,
    pub page_size: usize,
    pub cursor: Option<String>,
    /// Non-blank means the page gets search-filtered
    pub query: String,
    serial: u64,
}

impl PageRequest {
    pub fn is_search(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Paginator {
    beers: Vec<Beer>,
    cursor: Option<String>,
    has_more: bool,
    query: String,
    loading: bool,
    serial: u64,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for `query` and produce the first request.
    /// Previously shown beers stay until the result is applied.
    pub fn start(&mut self, query: &str) -> PageRequest {
        self.serial += 1;
        self.query = query.to_string();
        self.cursor = None;
        self.has_more = true;
        self.loading = true;

        PageRequest {
            kind: PageKind::Initial,
            page_size: INITIAL_PAGE_SIZE,
            cursor: None,
            query: self.query.clone(),
            serial: self.serial,
        }
    }

    /// Follow-up request, if one makes sense right now.
    ///
    /// Nothing is produced while a request is in flight, while searching, or
    /// once the catalog reported no further pages.
    pub fn next(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more || self.is_searching() {
            return None;
        }
        // has_more without a cursor would just reload the first page
        let cursor = self.cursor.clone()?;

        self.serial += 1;
        self.loading = true;

        Some(PageRequest {
            kind: PageKind::Next,
            page_size: NEXT_PAGE_SIZE,
            cursor: Some(cursor),
            query: String::new(),
            serial: self.serial,
        })
    }

    /// Fold a loaded page in. Returns false (and changes nothing) when
    /// `request` has been superseded by a later one.
    pub fn apply(&mut self, request: &PageRequest, page: BeerPage) -> bool {
        if request.serial != self.serial {
            return false;
        }

        match request.kind {
            PageKind::Initial => self.beers = page.beers,
            PageKind::Next => self.beers.extend(page.beers),
        }
        self.cursor = page.cursor;
        self.has_more = page.has_more;
        self.loading = false;
        true
    }

    pub fn beers(&self) -> &[Beer] {
        &self.beers
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
