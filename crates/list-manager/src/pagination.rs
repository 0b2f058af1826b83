//! Pagination Cursor
//!
//! Zero-based page index over whichever view is active. The index is never
//! clamped when the view shrinks; navigation helpers stay within bounds.

/// Rows per page when nothing is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the rows-per-page selector
pub const DEFAULT_PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page_index: 0, page_size: page_size.max(1) }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change rows per page; always returns to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Jump to `index` as given, even past the last page
    pub fn go_to(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Number of non-empty pages for a view of `len` rows
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(len)
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page_index -= 1;
        }
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page_index += 1;
        }
    }

    /// Rows `[index * size, index * size + size)` of `view`, cut at its end
    pub fn slice<'a, T>(&self, view: &'a [T]) -> &'a [T] {
        let start = self.page_index.saturating_mul(self.page_size);
        if start >= view.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(view.len());
        &view[start..end]
    }

    /// 1-based "first–last of total" numbers for the pagination footer
    pub fn range_label(&self, len: usize) -> (usize, usize, usize) {
        let start = self.page_index.saturating_mul(self.page_size);
        if start >= len {
            return (0, 0, len);
        }
        (start + 1, start.saturating_add(self.page_size).min(len), len)
    }
}
