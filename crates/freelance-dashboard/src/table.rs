//! Paginated table view-model
//!
//! Renders a sequence of uniform JSON rows as a paged grid. The column set
//! is derived from the first row only; rows with extra keys simply have
//! those keys ignored, rows with missing keys render the placeholder.

use serde_json::Value;

/// Recognized page size options
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 50, 100];

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Placeholder rendered for null or missing cell values
pub const EMPTY_CELL: &str = "\u{2014}";

/// Maximum number of page buttons shown at once
const PAGE_WINDOW: usize = 5;

/// One table row
pub type Row = serde_json::Map<String, Value>;

/// Cell alignment derived from the cell's value type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlignment {
    /// Right-aligned numeric cell
    Numeric,
    /// Left-aligned text cell
    Text,
}

/// A formatted cell ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    /// Display text
    pub text: String,
    /// Alignment
    pub alignment: CellAlignment,
}

/// Pagination details for the rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-based
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// 1-based index of the first visible row
    pub first_row: usize,
    /// 1-based index of the last visible row
    pub last_row: usize,
    /// Total row count
    pub total_rows: usize,
    /// Page buttons to display, a window of at most five pages
    pub page_numbers: Vec<usize>,
}

/// Fully rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    /// Column headers, taken from the first row
    pub columns: Vec<String>,
    /// Formatted visible rows
    pub rows: Vec<Vec<CellText>>,
    /// Pagination details
    pub page_info: PageInfo,
}

/// Render description for the table component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Data is still being fetched
    Loading,
    /// Fetch finished with zero rows; distinct from the loading state
    Empty,
    /// A page of data
    Grid(TableGrid),
}

/// Paginated table state
#[derive(Debug, Clone)]
pub struct DataTable {
    rows: Vec<Row>,
    loading: bool,
    current_page: usize,
    rows_per_page: usize,
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DataTable {
    /// Create an empty table in the loading state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            loading: true,
            current_page: 1,
            rows_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the rows and clear the loading flag
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.loading = false;
        let total = self.total_pages();
        if total > 0 && self.current_page > total {
            self.current_page = total;
        }
    }

    /// Set the loading flag
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Change the page size; only recognized options are accepted
    ///
    /// Returns whether the size was accepted. Accepting a new size always
    /// resets the current page to 1.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.rows_per_page = size;
            self.current_page = 1;
            true
        } else {
            false
        }
    }

    /// Navigate to a page, clamped to the valid range
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages().max(1);
        self.current_page = page.clamp(1, total);
    }

    /// Current page, 1-based
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current rows per page
    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Total row count
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Total page count: `ceil(rows / page_size)`
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.rows_per_page)
    }

    /// The window of page buttons to display
    ///
    /// At most five pages, centered on the current page and clamped to
    /// `[1, total_pages]`.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }
        let span = total.min(PAGE_WINDOW);
        (0..span)
            .map(|i| {
                if total <= PAGE_WINDOW || self.current_page <= 3 {
                    i + 1
                } else if self.current_page >= total - 2 {
                    total - (PAGE_WINDOW - 1) + i
                } else {
                    self.current_page - 2 + i
                }
            })
            .collect()
    }

    /// The rows visible on the current page
    #[must_use]
    pub fn visible_rows(&self) -> &[Row] {
        let start = (self.current_page - 1) * self.rows_per_page;
        let end = (start + self.rows_per_page).min(self.rows.len());
        if start >= self.rows.len() {
            &[]
        } else {
            &self.rows[start..end]
        }
    }

    /// Column headers from the first row
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Produce the render description for the current state
    #[must_use]
    pub fn render(&self) -> TableView {
        if self.loading {
            return TableView::Loading;
        }
        if self.rows.is_empty() {
            return TableView::Empty;
        }

        let columns = self.columns();
        let rows = self
            .visible_rows()
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| format_cell(row.get(column)))
                    .collect()
            })
            .collect();

        let start = (self.current_page - 1) * self.rows_per_page;
        TableView::Grid(TableGrid {
            columns,
            rows,
            page_info: PageInfo {
                current_page: self.current_page,
                total_pages: self.total_pages(),
                first_row: start + 1,
                last_row: (start + self.rows_per_page).min(self.rows.len()),
                total_rows: self.rows.len(),
                page_numbers: self.page_numbers(),
            },
        })
    }
}

/// Format a cell value for display
///
/// Values parseable as a finite number render right-aligned with up to two
/// decimal places (integers without decimals); anything else renders as
/// text, with null or missing values as the em-dash placeholder.
#[must_use]
pub fn format_cell(value: Option<&Value>) -> CellText {
    let Some(value) = value else {
        return CellText {
            text: EMPTY_CELL.to_string(),
            alignment: CellAlignment::Text,
        };
    };

    match value {
        Value::Null => CellText {
            text: EMPTY_CELL.to_string(),
            alignment: CellAlignment::Text,
        },
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map_or_else(
            || CellText {
                text: value.to_string(),
                alignment: CellAlignment::Text,
            },
            numeric_cell,
        ),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).map_or_else(
            || CellText {
                text: s.clone(),
                alignment: CellAlignment::Text,
            },
            numeric_cell,
        ),
        other => CellText {
            text: other.to_string(),
            alignment: CellAlignment::Text,
        },
    }
}

fn numeric_cell(n: f64) -> CellText {
    let text = if n.fract() == 0.0 && n.abs() < 1.0e15 {
        format!("{n:.0}")
    } else {
        format!("{n:.2}")
    };
    CellText {
        text,
        alignment: CellAlignment::Numeric,
    }
}
