use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::entities::rows::{HostKind, Tabular};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    HostType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub title: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
    pub header_filter: bool,
}

impl ColumnDef {
    pub const fn new(title: &'static str, field: &'static str) -> Self {
        Self {
            title,
            field,
            format: CellFormat::Plain,
            header_filter: false,
        }
    }

    pub const fn host_type(mut self) -> Self {
        self.format = CellFormat::HostType;
        self
    }

    pub const fn filterable(mut self) -> Self {
        self.header_filter = true;
        self
    }

    fn render(&self, raw: &str) -> String {
        match self.format {
            CellFormat::Plain => raw.to_string(),
            CellFormat::HostType => HostKind::from_host_type(raw).label().to_string(),
        }
    }
}

/// A formatted row. `index` points back into the source rows so clicks still
/// resolve after sorting and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub cells: Vec<String>,
}

pub fn project<T: Tabular>(rows: &[T], columns: &[ColumnDef]) -> Vec<RowView> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| RowView {
            index,
            cells: columns
                .iter()
                .map(|column| column.render(row.field(column.field).unwrap_or_default()))
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub descending: bool,
}

impl SortState {
    /// Header clicks cycle ascending, descending, unsorted.
    pub fn toggle(current: Option<SortState>, column: usize) -> Option<SortState> {
        match current {
            Some(state) if state.column == column && !state.descending => Some(SortState {
                column,
                descending: true,
            }),
            Some(state) if state.column == column => None,
            _ => Some(SortState {
                column,
                descending: false,
            }),
        }
    }
}

/// Case-insensitive substring match per filtered column.
pub fn filter_rows(rows: Vec<RowView>, filters: &BTreeMap<usize, String>) -> Vec<RowView> {
    let active: Vec<(usize, String)> = filters
        .iter()
        .filter(|(_, term)| !term.trim().is_empty())
        .map(|(column, term)| (*column, term.trim().to_lowercase()))
        .collect();
    if active.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            active.iter().all(|(column, term)| {
                row.cells
                    .get(*column)
                    .is_some_and(|cell| cell.to_lowercase().contains(term.as_str()))
            })
        })
        .collect()
}

pub fn sort_rows(rows: &mut [RowView], sort: Option<SortState>) {
    let Some(sort) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_cells(
            a.cells.get(sort.column).map(String::as_str).unwrap_or_default(),
            b.cells.get(sort.column).map(String::as_str).unwrap_or_default(),
        );
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

pub fn page_slice(rows: &[RowView], page: usize, page_size: usize) -> &[RowView] {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::rows::EndpointRow;

    fn endpoint(endpoint: &str, hostname: &str, host_type: &str) -> EndpointRow {
        EndpointRow {
            endpoint: endpoint.to_string(),
            hostname: hostname.to_string(),
            host_type: host_type.to_string(),
            ..EndpointRow::default()
        }
    }

    fn view(index: usize, cells: &[&str]) -> RowView {
        RowView {
            index,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn project_formats_host_type_column() {
        let columns = vec![
            ColumnDef::new("Endpoint", "endpoint"),
            ColumnDef::new("Host Type", "host_type").host_type(),
            ColumnDef::new("Missing", "nope"),
        ];
        let rows = vec![endpoint("10.0.0.5", "a", "MAC"), endpoint("10.0.0.6", "b", "RHEL")];

        let projected = project(&rows, &columns);

        assert_eq!(projected[0], view(0, &["10.0.0.5", "Mac", ""]));
        assert_eq!(projected[1], view(1, &["10.0.0.6", "Windows", ""]));
    }

    #[test]
    fn sort_toggle_cycles_through_states() {
        let asc = SortState::toggle(None, 2);
        assert_eq!(asc, Some(SortState { column: 2, descending: false }));

        let desc = SortState::toggle(asc, 2);
        assert_eq!(desc, Some(SortState { column: 2, descending: true }));

        assert_eq!(SortState::toggle(desc, 2), None);
        assert_eq!(
            SortState::toggle(desc, 0),
            Some(SortState { column: 0, descending: false })
        );
    }

    #[test]
    fn sort_uses_numeric_order_when_possible() {
        let mut rows = vec![view(0, &["10"]), view(1, &["9"]), view(2, &["100"])];

        sort_rows(&mut rows, Some(SortState { column: 0, descending: false }));
        let order: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 2]);

        sort_rows(&mut rows, Some(SortState { column: 0, descending: true }));
        let order: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn filter_is_case_insensitive_and_ignores_blank_terms() {
        let rows = vec![view(0, &["web-01", "x"]), view(1, &["DB-01", "y"])];
        let mut filters = BTreeMap::new();
        filters.insert(0, "db".to_string());
        filters.insert(1, "  ".to_string());

        let filtered = filter_rows(rows, &filters);

        assert_eq!(filtered, vec![view(1, &["DB-01", "y"])]);
    }

    #[test]
    fn pagination_clamps_to_available_rows() {
        let rows: Vec<RowView> = (0..23).map(|i| view(i, &["r"])).collect();

        assert_eq!(page_count(rows.len(), PAGE_SIZE), 3);
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_slice(&rows, 2, PAGE_SIZE).len(), 3);
        assert_eq!(page_slice(&rows, 2, PAGE_SIZE)[0].index, 20);
        assert!(page_slice(&rows, 5, PAGE_SIZE).is_empty());
    }
}
