//! The dense battlefield grid.

use crate::error::GridError;
use skirmish_core::{CellIndex, WorldPos};

/// A fixed-size dense grid of square cells covering a theater.
///
/// The grid is anchored at world origin `(0, 0)` and spans
/// `[0, cols * cell_size) × [0, rows * cell_size)` meters. Cells are indexed
/// row-major: `CellIndex(row * cols + col)`. Every cell exists for the
/// lifetime of the grid; the mapping from position to index is pure and
/// injective over the valid range.
///
/// Mapping a position outside the configured bounds is a precondition
/// violation and panics — callers are expected to keep entities inside the
/// theater (see spec of the movement collaborators).
#[derive(Clone, Debug, PartialEq)]
pub struct BattleGrid {
    cols: u32,
    rows: u32,
    cell_size: f32,
}

impl BattleGrid {
    /// Maximum cells per axis. Keeps `row * cols + col` comfortably inside
    /// `u32` and float arithmetic exact for center computation.
    pub const MAX_DIM: u32 = 1 << 16;

    /// Create a grid of `cols × rows` cells of `cell_size` meters.
    pub fn new(cols: u32, rows: u32, cell_size: f32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize { value: cell_size });
        }
        let count = u64::from(cols) * u64::from(rows);
        if u32::try_from(count).is_err() {
            return Err(GridError::CellCountOverflow { value: count });
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge length of one cell, meters.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// East-west extent of the grid, meters.
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// North-south extent of the grid, meters.
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Whether `pos` lies inside the grid bounds.
    pub fn contains(&self, pos: WorldPos) -> bool {
        pos.x >= 0.0 && pos.x < self.width() && pos.y >= 0.0 && pos.y < self.height()
    }

    /// Map grid coordinates to a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of range.
    pub fn cell_of(&self, col: u32, row: u32) -> CellIndex {
        assert!(
            col < self.cols && row < self.rows,
            "grid coordinate ({col}, {row}) outside {}x{} grid",
            self.cols,
            self.rows,
        );
        CellIndex(row * self.cols + col)
    }

    /// Map a world position to the index of the cell containing it.
    ///
    /// Pure: identical inputs always yield the identical index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid bounds — an out-of-theater
    /// position is a caller bug, not a recoverable condition.
    pub fn cell_at(&self, pos: WorldPos) -> CellIndex {
        assert!(
            self.contains(pos),
            "position {pos} outside grid bounds {}x{} m",
            self.width(),
            self.height(),
        );
        let col = (pos.x / self.cell_size) as u32;
        let row = (pos.y / self.cell_size) as u32;
        // Float division can land exactly on the upper edge; clamp back in.
        self.cell_of(col.min(self.cols - 1), row.min(self.rows - 1))
    }

    /// Decompose a cell index into `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn col_row(&self, index: CellIndex) -> (u32, u32) {
        assert!(
            (index.0 as usize) < self.cell_count(),
            "cell index {index} out of range",
        );
        (index.0 % self.cols, index.0 / self.cols)
    }

    /// World position of a cell's center.
    pub fn center(&self, index: CellIndex) -> WorldPos {
        let (col, row) = self.col_row(index);
        WorldPos::new(
            (col as f32 + 0.5) * self.cell_size,
            (row as f32 + 0.5) * self.cell_size,
        )
    }

    /// All cells whose center lies within `radius` meters of `pos`, in
    /// row-major order.
    ///
    /// This is the bubble footprint: a bounding-box scan over the radius
    /// square, filtered by center distance. `pos` may lie outside the grid;
    /// the footprint is clipped to the grid bounds.
    pub fn cells_within(&self, pos: WorldPos, radius: f32) -> Vec<CellIndex> {
        assert!(
            radius.is_finite() && radius >= 0.0,
            "footprint radius must be finite and non-negative, got {radius}",
        );
        let lo_col = (((pos.x - radius) / self.cell_size).floor()).max(0.0) as u32;
        let lo_row = (((pos.y - radius) / self.cell_size).floor()).max(0.0) as u32;
        let hi_col = ((((pos.x + radius) / self.cell_size).floor()) as i64)
            .clamp(-1, i64::from(self.cols) - 1);
        let hi_row = ((((pos.y + radius) / self.cell_size).floor()) as i64)
            .clamp(-1, i64::from(self.rows) - 1);

        let mut out = Vec::new();
        let mut row = i64::from(lo_row);
        while row <= hi_row {
            let mut col = i64::from(lo_col);
            while col <= hi_col {
                let index = self.cell_of(col as u32, row as u32);
                if self.center(index).distance(pos) <= radius {
                    out.push(index);
                }
                col += 1;
            }
            row += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_10x10_1km() -> BattleGrid {
        BattleGrid::new(10, 10, 1000.0).unwrap()
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_cols_fails() {
        assert_eq!(BattleGrid::new(0, 5, 100.0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_oversized_dim() {
        assert!(matches!(
            BattleGrid::new(BattleGrid::MAX_DIM + 1, 5, 100.0),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_rejects_bad_cell_size() {
        assert!(matches!(
            BattleGrid::new(5, 5, 0.0),
            Err(GridError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            BattleGrid::new(5, 5, f32::NAN),
            Err(GridError::InvalidCellSize { .. })
        ));
    }

    // ── Mapping tests ───────────────────────────────────────────

    #[test]
    fn cell_at_maps_row_major() {
        let g = grid_10x10_1km();
        assert_eq!(g.cell_at(WorldPos::new(500.0, 500.0)), CellIndex(0));
        assert_eq!(g.cell_at(WorldPos::new(1500.0, 500.0)), CellIndex(1));
        assert_eq!(g.cell_at(WorldPos::new(500.0, 1500.0)), CellIndex(10));
        assert_eq!(g.cell_at(WorldPos::new(9999.0, 9999.0)), CellIndex(99));
    }

    #[test]
    fn cell_at_is_deterministic() {
        let g = grid_10x10_1km();
        let p = WorldPos::new(4321.0, 8765.0);
        assert_eq!(g.cell_at(p), g.cell_at(p));
    }

    #[test]
    #[should_panic(expected = "outside grid bounds")]
    fn cell_at_out_of_range_panics() {
        grid_10x10_1km().cell_at(WorldPos::new(-1.0, 500.0));
    }

    #[test]
    fn center_round_trips_through_cell_at() {
        let g = grid_10x10_1km();
        for i in 0..g.cell_count() as u32 {
            let idx = CellIndex(i);
            assert_eq!(g.cell_at(g.center(idx)), idx);
        }
    }

    // ── Footprint tests ─────────────────────────────────────────

    #[test]
    fn footprint_at_corner_observer() {
        // Observer at the grid corner; cells kept iff their center is
        // within 2500 m: (500,500), (500,1500), (1500,500), (1500,1500).
        let g = grid_10x10_1km();
        let cells = g.cells_within(WorldPos::new(0.0, 0.0), 2500.0);
        assert_eq!(
            cells,
            vec![CellIndex(0), CellIndex(1), CellIndex(10), CellIndex(11)]
        );
    }

    #[test]
    fn footprint_interior_observer() {
        let g = grid_10x10_1km();
        let pos = WorldPos::new(5000.0, 5000.0);
        let cells = g.cells_within(pos, 2500.0);
        // Every returned center really is inside the radius, none outside.
        for i in 0..g.cell_count() as u32 {
            let idx = CellIndex(i);
            let inside = g.center(idx).distance(pos) <= 2500.0;
            assert_eq!(cells.contains(&idx), inside, "cell {idx}");
        }
        // Row-major ordering.
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn footprint_zero_radius() {
        let g = grid_10x10_1km();
        // Radius 0 at a cell center keeps exactly that cell.
        assert_eq!(
            g.cells_within(WorldPos::new(3500.0, 4500.0), 0.0),
            vec![g.cell_of(3, 4)]
        );
        // Radius 0 off-center keeps nothing.
        assert!(g.cells_within(WorldPos::new(3600.0, 4500.0), 0.0).is_empty());
    }

    #[test]
    fn footprint_clips_to_grid() {
        let g = grid_10x10_1km();
        let cells = g.cells_within(WorldPos::new(-4000.0, -4000.0), 1000.0);
        assert!(cells.is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn cell_at_injective_over_centers(
            cols in 1u32..64, rows in 1u32..64, size in 1.0f32..5000.0,
        ) {
            let g = BattleGrid::new(cols, rows, size).unwrap();
            for i in 0..g.cell_count() as u32 {
                prop_assert_eq!(g.cell_at(g.center(CellIndex(i))), CellIndex(i));
            }
        }

        #[test]
        fn footprint_members_are_within_radius(
            x in 0.0f32..10_000.0, y in 0.0f32..10_000.0, r in 0.0f32..6000.0,
        ) {
            let g = BattleGrid::new(10, 10, 1000.0).unwrap();
            for idx in g.cells_within(WorldPos::new(x, y), r) {
                prop_assert!(g.center(idx).distance(WorldPos::new(x, y)) <= r);
            }
        }
    }
}
