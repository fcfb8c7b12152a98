//! Page arithmetic for the transaction table.

/// Maximum number of page links shown at once.
pub const MAX_VISIBLE_PAGES: usize = 3;

/// The visible part of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub total_pages: usize,
    /// The requested page clamped to `1..=total_pages`.
    pub current_page: usize,
    /// Slice bounds into the underlying list, `start..end`.
    pub start: usize,
    pub end: usize,
    pub visible_pages: Vec<usize>,
}

impl PageWindow {
    /// Computes the window for `current_page`. An empty list is a single
    /// empty page and a zero page size behaves like a page size of one.
    pub fn compute(total_items: usize, page_size: usize, current_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        let current_page = current_page.clamp(1, total_pages);

        let start = ((current_page - 1) * page_size).min(total_items);
        let end = (current_page * page_size).min(total_items);

        Self {
            total_pages,
            current_page,
            start,
            end,
            visible_pages: visible_pages(current_page, total_pages),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Up to three page numbers around the page before `current`, pinned to the
/// last three pages near the end of the list.
fn visible_pages(current: usize, total_pages: usize) -> Vec<usize> {
    let span = MAX_VISIBLE_PAGES - 1;
    let (first, last) = if current > total_pages.saturating_sub(span) {
        (total_pages.saturating_sub(span).max(1), total_pages)
    } else {
        let first = current.saturating_sub(1).max(1);
        (first, (first + span).min(total_pages))
    };
    (first..=last).collect()
}

/// Navigation state for a paginated list whose length may change between
/// calls. Every move clamps to the valid page range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_page_size(&mut self, page_size: usize, total_items: usize) {
        self.page_size = page_size.max(1);
        self.clamp(total_items);
    }

    pub fn go_to(&mut self, page: usize, total_items: usize) -> usize {
        self.current_page = page.clamp(1, total_pages(total_items, self.page_size));
        self.current_page
    }

    /// Moves forward one page; stays put on the last page.
    pub fn next(&mut self, total_items: usize) -> usize {
        self.go_to(self.current_page.saturating_add(1), total_items)
    }

    /// Moves back one page; stays put on the first page.
    pub fn previous(&mut self, total_items: usize) -> usize {
        self.go_to(self.current_page.saturating_sub(1), total_items)
    }

    /// Pulls the current page back into range after the list shrank.
    pub fn clamp(&mut self, total_items: usize) -> usize {
        self.go_to(self.current_page, total_items)
    }

    pub fn window(&self, total_items: usize) -> PageWindow {
        PageWindow::compute(total_items, self.page_size, self.current_page)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window(items.len());
        &items[window.start..window.end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(5)
    }
}
