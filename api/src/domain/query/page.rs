//! Pagination

/// Items per page when the client does not ask for a size
pub const DEFAULT_PER_PAGE: u64 = 20;

/// Largest row count or offset a query may carry; SQL binds both as BIGINT
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// A 1-based page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    per_page: u64,
}

impl Page {
    /// Build a page, coercing a zero number or size to the defaults.
    /// Sizes above `MAX_ROWS` are clamped.
    pub fn new(number: u64, per_page: u64) -> Self {
        Self {
            number: number.max(1),
            per_page: if per_page == 0 {
                DEFAULT_PER_PAGE
            } else {
                per_page.min(MAX_ROWS)
            },
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Rows to skip: `(page - 1) * per_page`, never above `MAX_ROWS`
    pub fn offset(&self) -> u64 {
        (self.number - 1)
            .saturating_mul(self.per_page)
            .min(MAX_ROWS)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Offset and optional row limit applied after ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl Window {
    /// Every row
    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }

    /// Only the first row
    pub fn first() -> Self {
        Self {
            offset: 0,
            limit: Some(1),
        }
    }

    /// Apply the window to an already ordered sequence
    pub fn slice<T>(&self, rows: Vec<T>) -> Vec<T> {
        let rows = rows.into_iter().skip(self.offset as usize);
        match self.limit {
            Some(limit) => rows.take(limit as usize).collect(),
            None => rows.collect(),
        }
    }
}

impl From<Page> for Window {
    fn from(page: Page) -> Self {
        Self {
            offset: page.offset(),
            limit: Some(page.per_page()),
        }
    }
}
