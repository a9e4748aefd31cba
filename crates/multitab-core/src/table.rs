use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds::Bounds;

/// One cell of a built table.
///
/// The closed enum makes an unrecognized cell kind unrepresentable; there is
/// no runtime kind check to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Blank top-left corner cell.
    Corner,
    /// Row or column header showing its index.
    Header(i32),
    /// Interior cell holding row * col.
    Product(i32),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Corner => Ok(()),
            Cell::Header(n) | Cell::Product(n) => write!(f, "{}", n),
        }
    }
}

/// The derived header+product grid shown for one tab.
///
/// Built atomically from validated bounds and swapped in as a unit; there is
/// no incremental diffing. Row 0 and column 0 hold headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    bounds: Bounds,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build the full grid: one header row (corner + column indices), then
    /// one row per row index whose first cell is the row header and whose
    /// remaining cells are row * col products.
    pub fn build(bounds: Bounds) -> Table {
        let col_count = (bounds.col_span() + 2) as usize;
        let mut rows = Vec::with_capacity((bounds.row_span() + 2) as usize);

        let mut header = Vec::with_capacity(col_count);
        header.push(Cell::Corner);
        for col in bounds.min_col..=bounds.max_col {
            header.push(Cell::Header(col));
        }
        rows.push(header);

        for row in bounds.min_row..=bounds.max_row {
            let mut cells = Vec::with_capacity(col_count);
            cells.push(Cell::Header(row));
            for col in bounds.min_col..=bounds.max_col {
                cells.push(Cell::Product(row * col));
            }
            rows.push(cells);
        }

        Table { bounds, rows }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Total rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total columns including the header column.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Grid of display strings for the rendering surface.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        // (max - min + 2) per axis: the extra row/column holds headers.
        let table = Table::build(Bounds::new(1, 3, 1, 2));
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.col_count(), 4);

        let table = Table::build(Bounds::new(0, 100, -50, 50));
        assert_eq!(table.row_count(), 102);
        assert_eq!(table.col_count(), 102);
    }

    #[test]
    fn test_header_row() {
        let table = Table::build(Bounds::new(1, 3, 1, 2));
        assert_eq!(table.cell(0, 0), Some(&Cell::Corner));
        assert_eq!(table.cell(0, 1), Some(&Cell::Header(1)));
        assert_eq!(table.cell(0, 2), Some(&Cell::Header(2)));
        assert_eq!(table.cell(0, 3), Some(&Cell::Header(3)));
    }

    #[test]
    fn test_scenario_grid() {
        // Bounds (1,3,1,2): row1 = [1, 1, 2, 3], row2 = [2, 2, 4, 6].
        let table = Table::build(Bounds::new(1, 3, 1, 2));
        assert_eq!(table.cell(1, 0), Some(&Cell::Header(1)));
        assert_eq!(table.cell(1, 1), Some(&Cell::Product(1)));
        assert_eq!(table.cell(1, 2), Some(&Cell::Product(2)));
        assert_eq!(table.cell(1, 3), Some(&Cell::Product(3)));
        assert_eq!(table.cell(2, 0), Some(&Cell::Header(2)));
        assert_eq!(table.cell(2, 1), Some(&Cell::Product(2)));
        assert_eq!(table.cell(2, 2), Some(&Cell::Product(4)));
        assert_eq!(table.cell(2, 3), Some(&Cell::Product(6)));
    }

    #[test]
    fn test_negative_bounds() {
        let table = Table::build(Bounds::new(-2, -1, -3, -3));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 3);
        assert_eq!(table.cell(1, 0), Some(&Cell::Header(-3)));
        assert_eq!(table.cell(1, 1), Some(&Cell::Product(6)));
        assert_eq!(table.cell(1, 2), Some(&Cell::Product(3)));
    }

    #[test]
    fn test_single_cell_bounds() {
        let table = Table::build(Bounds::new(5, 5, 7, 7));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 2);
        assert_eq!(table.cell(1, 1), Some(&Cell::Product(35)));
    }

    #[test]
    fn test_interior_products() {
        let bounds = Bounds::new(-3, 3, -2, 2);
        let table = Table::build(bounds);
        for (r_idx, row) in (bounds.min_row..=bounds.max_row).enumerate() {
            for (c_idx, col) in (bounds.min_col..=bounds.max_col).enumerate() {
                assert_eq!(
                    table.cell(r_idx + 1, c_idx + 1),
                    Some(&Cell::Product(row * col))
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Corner.to_string(), "");
        assert_eq!(Cell::Header(-5).to_string(), "-5");
        assert_eq!(Cell::Product(42).to_string(), "42");
    }

    #[test]
    fn test_display_rows() {
        let table = Table::build(Bounds::new(1, 2, 1, 1));
        assert_eq!(
            table.display_rows(),
            vec![
                vec!["".to_string(), "1".to_string(), "2".to_string()],
                vec!["1".to_string(), "1".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_out_of_grid_access() {
        let table = Table::build(Bounds::new(1, 2, 1, 1));
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.cell(0, 3), None);
    }

    #[test]
    fn test_serialization() {
        let table = Table::build(Bounds::new(1, 2, 1, 1));
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
