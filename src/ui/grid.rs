//! Fixed-column grid layout for the thumbnail list

/// The grid always has four columns, whatever the photo count
pub const COLUMNS: usize = 4;

/// Each row is this fraction of the viewport width high
pub const ROW_HEIGHT_RATIO: f32 = 0.2;

/// Row/column template of the list container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridGeometry {
    /// Empty grid
    fn default() -> Self {
        Self::for_items(0)
    }
}

impl GridGeometry {
    /// Geometry for `count` items: 4 columns, `ceil(count / 4)` rows
    pub fn for_items(count: usize) -> Self {
        Self {
            columns: COLUMNS,
            rows: count.div_ceil(COLUMNS),
        }
    }

    /// Height of a single row for the given viewport width
    pub fn row_height(viewport_width: f32) -> f32 {
        viewport_width * ROW_HEIGHT_RATIO
    }

    /// Height of the whole grid for the given viewport width
    pub fn total_height(&self, viewport_width: f32) -> f32 {
        self.rows as f32 * Self::row_height(viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        assert_eq!(GridGeometry::for_items(0).rows, 0);
        assert_eq!(GridGeometry::for_items(1).rows, 1);
        assert_eq!(GridGeometry::for_items(4).rows, 1);
        assert_eq!(GridGeometry::for_items(5).rows, 2);
        assert_eq!(GridGeometry::for_items(30).rows, 8);
    }

    #[test]
    fn test_columns_are_fixed() {
        for count in [0, 1, 4, 5, 17] {
            assert_eq!(GridGeometry::for_items(count).columns, 4);
        }
    }

    #[test]
    fn test_default_is_empty_four_column_grid() {
        assert_eq!(GridGeometry::default(), GridGeometry { columns: 4, rows: 0 });
    }

    #[test]
    fn test_heights() {
        assert_eq!(GridGeometry::row_height(1000.0), 200.0);
        assert_eq!(GridGeometry::for_items(5).total_height(1000.0), 400.0);
        assert_eq!(GridGeometry::for_items(0).total_height(1000.0), 0.0);
    }
}
