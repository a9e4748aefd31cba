use serde::{Deserialize, Serialize};

/// Highest valid magnitude for any bound value.
pub const MAX_VALUE: i32 = 500;

/// Maximum number of rows or columns one axis may span.
pub const MAX_SPAN: i32 = 100;

/// The four integers defining a table's row/column extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl Bounds {
    pub const fn new(min_col: i32, max_col: i32, min_row: i32, max_row: i32) -> Self {
        Bounds {
            min_col,
            max_col,
            min_row,
            max_row,
        }
    }

    /// Number of columns spanned, excluding the header column.
    pub fn col_span(&self) -> i32 {
        self.max_col - self.min_col
    }

    /// Number of rows spanned, excluding the header row.
    pub fn row_span(&self) -> i32 {
        self.max_row - self.min_row
    }

    /// Full invariant check: min <= max per axis, every value within
    /// [-MAX_VALUE, MAX_VALUE], and neither axis spanning more than MAX_SPAN.
    ///
    /// The validation module is the authoritative gate for user input; this
    /// re-check exists for values arriving through other paths.
    pub fn is_valid(&self) -> bool {
        let in_magnitude = [self.min_col, self.max_col, self.min_row, self.max_row]
            .iter()
            .all(|v| v.abs() <= MAX_VALUE);

        in_magnitude
            && self.min_col <= self.max_col
            && self.min_row <= self.max_row
            && self.col_span() <= MAX_SPAN
            && self.row_span() <= MAX_SPAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert!(Bounds::new(1, 3, 1, 2).is_valid());
        assert!(Bounds::new(-500, -400, 400, 500).is_valid());
        assert!(Bounds::new(0, 100, 0, 100).is_valid());
        assert!(Bounds::new(5, 5, 5, 5).is_valid());
    }

    #[test]
    fn test_inverted_bounds() {
        assert!(!Bounds::new(5, 3, 1, 2).is_valid());
        assert!(!Bounds::new(1, 3, 2, 1).is_valid());
    }

    #[test]
    fn test_magnitude_limit() {
        assert!(!Bounds::new(-501, -450, 0, 1).is_valid());
        assert!(!Bounds::new(0, 501, 0, 1).is_valid());
    }

    #[test]
    fn test_span_limit() {
        assert!(!Bounds::new(0, 150, 0, 1).is_valid());
        assert!(!Bounds::new(0, 1, -100, 50).is_valid());
        assert!(Bounds::new(0, 100, -50, 50).is_valid());
    }

    #[test]
    fn test_spans() {
        let b = Bounds::new(1, 4, -2, 2);
        assert_eq!(b.col_span(), 3);
        assert_eq!(b.row_span(), 4);
    }

    #[test]
    fn test_serialization() {
        let b = Bounds::new(1, 3, 1, 2);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"minCol":1,"maxCol":3,"minRow":1,"maxRow":2}"#);
        let back: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
