//! Sorting and pagination for the list view

use crate::photo::PhotoRecord;
use std::cmp::Ordering;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page sizes offered by the size changer
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
    Modified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current column sort, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSort {
    active: Option<(SortKey, SortDirection)>,
}

impl ListSort {
    pub fn active(&self) -> Option<(SortKey, SortDirection)> {
        self.active
    }

    pub fn direction_of(&self, key: SortKey) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == key => Some(direction),
            _ => None,
        }
    }

    /// Header click: none -> ascending -> descending -> none
    pub fn cycle(&mut self, key: SortKey) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == key => {
                Some((key, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == key => None,
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// Stable sort of the records by the active column
    pub fn apply<'a>(&self, records: &'a [PhotoRecord]) -> Vec<&'a PhotoRecord> {
        let mut rows: Vec<&PhotoRecord> = records.iter().collect();

        if let Some((key, direction)) = self.active {
            rows.sort_by(|a, b| {
                let ord = compare(key, a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        rows
    }
}

fn compare(key: SortKey, a: &PhotoRecord, b: &PhotoRecord) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Size => a
            .size
            .megabytes()
            .partial_cmp(&b.size.megabytes())
            .unwrap_or(Ordering::Equal),
        SortKey::Modified => a.modified.cmp(&b.modified),
    }
}

/// Current page of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based page index
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, at least one
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    /// Keep the page valid after the collection changed
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Changing the page size starts over at the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 0;
        }
    }

    /// Row range of the current page
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let page = self.page.min(self.page_count(total) - 1);
        let start = (page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

/// Sort plus pagination state of the list view
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub sort: ListSort,
    pub pagination: Pagination,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: ListSort::default(),
            pagination: Pagination::new(page_size),
        }
    }

    /// Sorted rows of the current page
    pub fn rows<'a>(&self, records: &'a [PhotoRecord]) -> Vec<&'a PhotoRecord> {
        let sorted = self.sort.apply(records);
        let range = self.pagination.page_range(sorted.len());
        sorted[range].to_vec()
    }
}
