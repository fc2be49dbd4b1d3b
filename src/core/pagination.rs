use crate::domain::model::RESULTS_PER_PAGE;

/// Position within a paged search. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    total_results: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_results: 0,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, total_results: u32) -> Self {
        Self {
            page: page.max(1),
            total_results,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn total_pages(&self) -> u32 {
        self.total_results.div_ceil(RESULTS_PER_PAGE)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Page number to request for "next", if there is one.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
