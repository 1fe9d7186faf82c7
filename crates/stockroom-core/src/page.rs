//! # Pagination
//!
//! Page math over the filtered record list.
//!
//! ```text
//! filtered: 25 records, page size 10
//!
//!   page 1        page 2        page 3
//! ┌──────────┐ ┌──────────┐ ┌─────┐
//! │ 0 ..  10 │ │ 10 .. 20 │ │20..25│     page_count = ceil(25 / 10) = 3
//! └──────────┘ └──────────┘ └─────┘
//!  prev: off                  next: off
//! ```
//!
//! Pages are 1-based. An out-of-range page is never an error here: it
//! simply yields an empty slice.

use serde::Serialize;
use std::ops::Range;
use ts_rs::TS;

/// Pagination state for one render of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        Pagination {
            current_page,
            page_size: page_size.max(1),
            total_items,
        }
    }

    /// `ceil(total_items / page_size)`; zero when there is nothing to show.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Index range of the current page, clamped to the list.
    pub fn bounds(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Slices `items` to the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.bounds();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// The pager is only rendered when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.page_count() > 1
    }
}
