// crates/nationnote-core/src/paginate.rs

//! # Pagination Engine
//!
//! Slices an ordered list into fixed-size pages and computes the page-number
//! strip shown under the list.
//!
//! An empty input is one empty page, never zero pages. Requests outside
//! `1..=total_pages` are errors: the engine does not reclamp.

use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};

/// Page strips longer than this are compacted with ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(usize),
    /// Not clickable.
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_numbers: Vec<PageMarker>,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `ceil(len / page_size)`, minimum 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Returns page `page_number` (1-based) of `items`.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(DirectoryError::InvalidConfig(
            "page_size must be at least 1".into(),
        ));
    }
    let total = total_pages(items.len(), page_size);
    if page_number == 0 || page_number > total {
        return Err(DirectoryError::PageOutOfRange {
            requested: page_number,
            total,
        });
    }

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Ok(Page {
        items: items[start..end].to_vec(),
        total_pages: total,
        current_page: page_number,
        page_numbers: page_numbers(total, page_number),
    })
}

/// The page-number strip for `current` out of `total`.
///
/// Up to [`MAX_VISIBLE_PAGES`] pages are listed in full. Longer strips keep
/// the first and last page and a window around `current`:
///
/// - near the start: `1 2 3 4 … N`
/// - near the end:   `1 … N-3 N-2 N-1 N`
/// - otherwise:      `1 … c-1 c c+1 … N`
pub fn page_numbers(total: usize, current: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    let mut out = Vec::with_capacity(MAX_VISIBLE_PAGES + 2);
    if current <= 3 {
        out.extend((1..=4).map(Page));
        out.push(Ellipsis);
        out.push(Page(total));
    } else if current >= total - 2 {
        out.push(Page(1));
        out.push(Ellipsis);
        out.extend((total - 3..=total).map(Page));
    } else {
        out.push(Page(1));
        out.push(Ellipsis);
        out.extend((current - 1..=current + 1).map(Page));
        out.push(Ellipsis);
        out.push(Page(total));
    }
    out
}
