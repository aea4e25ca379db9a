//! Pagination arithmetic over the fixed-size collection.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::DomainError;
use crate::ids::CreatureId;

/// One page of consecutive creature ids, clipped to `1..=collection_size`.
///
/// Explicit value passed into aggregation instead of ambient "current page"
/// state; navigation returns new windows rather than mutating this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    page: u32,
    page_size: u32,
    collection_size: u32,
}

impl PageWindow {
    /// # Errors
    ///
    /// - `Validation` if `page_size` or `collection_size` is zero
    /// - `PageOutOfRange` if `page` is not in `1..=total_pages`
    pub fn new(page: u32, page_size: u32, collection_size: u32) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::validation("Page size must be positive"));
        }
        if collection_size == 0 {
            return Err(DomainError::validation("Collection size must be positive"));
        }
        let total_pages = collection_size.div_ceil(page_size);
        if page == 0 || page > total_pages {
            return Err(DomainError::page_out_of_range(page, total_pages));
        }
        Ok(Self {
            page,
            page_size,
            collection_size,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn collection_size(&self) -> u32 {
        self.collection_size
    }

    pub fn total_pages(&self) -> u32 {
        self.collection_size.div_ceil(self.page_size)
    }

    pub fn first_id(&self) -> u32 {
        (self.page - 1) * self.page_size + 1
    }

    /// Last id on the page; the final page is clipped at the collection size.
    pub fn last_id(&self) -> u32 {
        (self.first_id() + self.page_size - 1).min(self.collection_size)
    }

    pub fn id_range(&self) -> RangeInclusive<u32> {
        self.first_id()..=self.last_id()
    }

    /// Ids on this page in ascending order.
    pub fn ids(&self) -> Vec<CreatureId> {
        self.id_range()
            .filter_map(|n| CreatureId::new(n).ok())
            .collect()
    }

    /// Number of ids on this page (less than `page_size` only on the last page).
    pub fn id_count(&self) -> usize {
        (self.last_id() - self.first_id() + 1) as usize
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.total_pages()
    }

    fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    pub fn first(self) -> Self {
        self.with_page(1)
    }

    pub fn last(self) -> Self {
        let last = self.total_pages();
        self.with_page(last)
    }

    /// Next page, or `self` on the last page.
    pub fn next(self) -> Self {
        let next = (self.page + 1).min(self.total_pages());
        self.with_page(next)
    }

    /// Previous page, or `self` on the first page.
    pub fn previous(self) -> Self {
        let previous = self.page.saturating_sub(1).max(1);
        self.with_page(previous)
    }
}
