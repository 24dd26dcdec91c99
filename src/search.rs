use crate::model::RecipeSummary;

/// Number of results shown per page
pub const RESULTS_PER_PAGE: usize = 10;

/// Navigation buttons to offer for a results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page the "previous" button leads to
    pub prev: Option<usize>,
    /// Page the "next" button leads to
    pub next: Option<usize>,
}

/// Results of one search query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultSet {
    query: String,
    results: Vec<RecipeSummary>,
}

impl SearchResultSet {
    pub fn new(query: impl Into<String>, results: Vec<RecipeSummary>) -> Self {
        Self {
            query: query.into(),
            results,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results on the 1-based `page`, `page_size` at a time
    ///
    /// Pages outside the available range, including page 0, are empty.
    pub fn page(&self, page: usize, page_size: usize) -> &[RecipeSummary] {
        if page == 0 || page_size == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(page_size);
        if start >= self.results.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.results.len());
        &self.results[start..end]
    }

    /// The first page at the default page size
    pub fn first_page(&self) -> &[RecipeSummary] {
        self.page(1, RESULTS_PER_PAGE)
    }

    pub fn num_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.results.len().div_ceil(page_size)
    }

    pub fn pagination(&self, page: usize, page_size: usize) -> Pagination {
        let pages = self.num_pages(page_size);
        Pagination {
            prev: (page > 1 && page <= pages).then(|| page - 1),
            next: (page >= 1 && page < pages).then(|| page + 1),
        }
    }
}
