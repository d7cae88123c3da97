//! The winning lines of the 3x3x3 lattice.
//!
//! ```text
//! Layer 0 (bottom)   Layer 1 (middle)   Layer 2 (top)
//!   0 1 2              0 1 2              0 1 2
//!   3 4 5              3 4 5              3 4 5
//!   6 7 8              6 7 8              6 7 8
//! ```
//!
//! | Family               | Lines | Shape                                          |
//! |----------------------|-------|------------------------------------------------|
//! | Plane rows           | 9     | footprint row, single layer                    |
//! | Plane columns        | 9     | footprint column, single layer                 |
//! | Vertical             | 9     | one column, layers 0-2                         |
//! | Plane diagonals      | 6     | footprint diagonal, single layer               |
//! | Cross-layer diagonals| 16    | one cell per layer, footprint triple both ways |
//!
//! The catalog is built at compile time in scan order. Plane rows and
//! columns interleave layer by layer (rows then columns for layer 0, then
//! layer 1, then layer 2).

use std::fmt;

use crate::Cell;

/// Number of winning lines.
pub const LINE_COUNT: usize = 49;

/// Geometric family of a winning line. Informational only: every family is
/// evaluated the same way.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum LineFamily {
    PlaneRow,
    PlaneColumn,
    Vertical,
    PlaneDiagonal,
    CrossLayerDiagonal,
}

impl LineFamily {
    /// All families in scan order.
    pub const ALL: [LineFamily; 5] = [
        LineFamily::PlaneRow,
        LineFamily::PlaneColumn,
        LineFamily::Vertical,
        LineFamily::PlaneDiagonal,
        LineFamily::CrossLayerDiagonal,
    ];

    /// Number of catalog lines in this family.
    pub const fn line_count(self) -> usize {
        match self {
            LineFamily::PlaneRow | LineFamily::PlaneColumn | LineFamily::Vertical => 9,
            LineFamily::PlaneDiagonal => 6,
            LineFamily::CrossLayerDiagonal => 16,
        }
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            LineFamily::PlaneRow => "plane-row",
            LineFamily::PlaneColumn => "plane-column",
            LineFamily::Vertical => "vertical",
            LineFamily::PlaneDiagonal => "plane-diagonal",
            LineFamily::CrossLayerDiagonal => "cross-layer-diagonal",
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered triple of lattice cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct WinningLine {
    pub family: LineFamily,
    pub cells: [Cell; 3],
}

impl WinningLine {
    /// Placeholder used while filling the const catalog.
    const BLANK: WinningLine = WinningLine::new(LineFamily::PlaneRow, [Cell::new(0, 0); 3]);

    /// Create a line from three cells. Does NOT validate; cells outside the
    /// lattice never match a token and contribute nothing to [`Self::mask`].
    pub const fn new(family: LineFamily, cells: [Cell; 3]) -> WinningLine {
        WinningLine { family, cells }
    }

    /// A footprint triple held within one layer.
    const fn flat(family: LineFamily, columns: [u8; 3], layer: u8) -> WinningLine {
        WinningLine::new(
            family,
            [
                Cell::new(columns[0], layer),
                Cell::new(columns[1], layer),
                Cell::new(columns[2], layer),
            ],
        )
    }

    /// A footprint triple climbing from `first_layer` through the middle
    /// layer to the opposite outer layer.
    const fn slanted(columns: [u8; 3], first_layer: u8) -> WinningLine {
        WinningLine::new(
            LineFamily::CrossLayerDiagonal,
            [
                Cell::new(columns[0], first_layer),
                Cell::new(columns[1], 1),
                Cell::new(columns[2], 2 - first_layer),
            ],
        )
    }

    /// 27-bit occupancy mask with the line's three cells set.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.cells[0].bit() | self.cells[1].bit() | self.cells[2].bit()
    }

    /// Check whether the line passes through a cell.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(
            f,
            "{} ({},{}) ({},{}) ({},{})",
            self.family, a.column, a.layer, b.column, b.layer, c.column, c.layer
        )
    }
}

// ========== Catalog ==========

const FOOTPRINT_ROWS: [[u8; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
const FOOTPRINT_COLUMNS: [[u8; 3]; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
const FOOTPRINT_DIAGONALS: [[u8; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Footprint triples tilted across the layers: the two space diagonals
/// through the center, then the six face-tilted pillars.
const CROSS_LAYER_TRIPLES: [[u8; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6],
    [0, 3, 6],
    [2, 5, 8],
    [0, 1, 2],
    [6, 7, 8],
    [1, 4, 7],
    [3, 4, 5],
];

const fn build_catalog() -> [WinningLine; LINE_COUNT] {
    let mut lines = [WinningLine::BLANK; LINE_COUNT];
    let mut n = 0;

    let mut layer = 0;
    while layer < 3 {
        let mut i = 0;
        while i < 3 {
            lines[n] = WinningLine::flat(LineFamily::PlaneRow, FOOTPRINT_ROWS[i], layer);
            n += 1;
            i += 1;
        }
        let mut i = 0;
        while i < 3 {
            lines[n] = WinningLine::flat(LineFamily::PlaneColumn, FOOTPRINT_COLUMNS[i], layer);
            n += 1;
            i += 1;
        }
        layer += 1;
    }

    let mut column = 0;
    while column < 9 {
        lines[n] = WinningLine::new(
            LineFamily::Vertical,
            [Cell::new(column, 0), Cell::new(column, 1), Cell::new(column, 2)],
        );
        n += 1;
        column += 1;
    }

    let mut layer = 0;
    while layer < 3 {
        let mut i = 0;
        while i < 2 {
            lines[n] = WinningLine::flat(LineFamily::PlaneDiagonal, FOOTPRINT_DIAGONALS[i], layer);
            n += 1;
            i += 1;
        }
        layer += 1;
    }

    let mut i = 0;
    while i < CROSS_LAYER_TRIPLES.len() {
        lines[n] = WinningLine::slanted(CROSS_LAYER_TRIPLES[i], 0);
        lines[n + 1] = WinningLine::slanted(CROSS_LAYER_TRIPLES[i], 2);
        n += 2;
        i += 1;
    }

    assert!(n == LINE_COUNT);
    lines
}

const fn build_masks() -> [u32; LINE_COUNT] {
    let lines = build_catalog();
    let mut masks = [0u32; LINE_COUNT];
    let mut i = 0;
    while i < LINE_COUNT {
        masks[i] = lines[i].mask();
        i += 1;
    }
    masks
}

/// Every winning line, in scan order.
pub static CATALOG: [WinningLine; LINE_COUNT] = build_catalog();

/// `CATALOG[i].mask()`, precomputed for bitboard scans.
pub static LINE_MASKS: [u32; LINE_COUNT] = build_masks();

/// The full catalog.
pub fn catalog() -> &'static [WinningLine] {
    &CATALOG
}

/// Catalog lines of one family, in scan order.
pub fn family(family: LineFamily) -> impl Iterator<Item = &'static WinningLine> {
    CATALOG.iter().filter(move |line| line.family == family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_outside_lattice() {
        use crate::{win::evaluate, Board, Player};

        let line = WinningLine::new(
            LineFamily::PlaneRow,
            [Cell::new(11, 0), Cell::new(12, 0), Cell::new(13, 0)],
        );
        assert_eq!(line.mask(), 0);

        let mut board = Board::new();
        for column in 0..9 {
            board.push_token(column, Player::Dark);
        }
        assert_eq!(evaluate(&board, &line), None);
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), 49);
        assert_eq!(catalog().len(), LINE_COUNT);
    }

    #[test]
    fn test_family_counts() {
        for f in LineFamily::ALL {
            assert_eq!(family(f).count(), f.line_count(), "count mismatch for {}", f);
        }
        let total: usize = LineFamily::ALL.iter().map(|f| f.line_count()).sum();
        assert_eq!(total, LINE_COUNT);
    }

    #[test]
    fn test_families_are_contiguous_blocks() {
        // plane lines (rows + columns) first, then vertical, diagonals, cross-layer
        let plane = |f: LineFamily| matches!(f, LineFamily::PlaneRow | LineFamily::PlaneColumn);
        assert!(CATALOG[..18].iter().all(|l| plane(l.family)));
        assert!(CATALOG[18..27].iter().all(|l| l.family == LineFamily::Vertical));
        assert!(CATALOG[27..33].iter().all(|l| l.family == LineFamily::PlaneDiagonal));
        assert!(CATALOG[33..].iter().all(|l| l.family == LineFamily::CrossLayerDiagonal));
    }

    #[test]
    fn test_plane_order_within_layer() {
        let layer0 = &CATALOG[..6];
        assert_eq!(layer0[0], WinningLine::flat(LineFamily::PlaneRow, [0, 1, 2], 0));
        assert_eq!(layer0[2], WinningLine::flat(LineFamily::PlaneRow, [6, 7, 8], 0));
        assert_eq!(layer0[3], WinningLine::flat(LineFamily::PlaneColumn, [0, 3, 6], 0));
        assert_eq!(layer0[5], WinningLine::flat(LineFamily::PlaneColumn, [2, 5, 8], 0));
        assert_eq!(CATALOG[6], WinningLine::flat(LineFamily::PlaneRow, [0, 1, 2], 1));
        assert_eq!(CATALOG[17], WinningLine::flat(LineFamily::PlaneColumn, [2, 5, 8], 2));
    }

    #[test]
    fn test_cross_layer_pairs() {
        assert_eq!(
            CATALOG[33].cells,
            [Cell::new(0, 0), Cell::new(4, 1), Cell::new(8, 2)]
        );
        assert_eq!(
            CATALOG[34].cells,
            [Cell::new(0, 2), Cell::new(4, 1), Cell::new(8, 0)]
        );
        assert_eq!(
            CATALOG[48].cells,
            [Cell::new(3, 2), Cell::new(4, 1), Cell::new(5, 0)]
        );
    }

    #[test]
    fn test_cells_in_lattice_and_distinct() {
        for line in &CATALOG {
            assert!(line.cells.iter().all(|c| c.is_valid()), "{}", line);
            assert_eq!(line.mask().count_ones(), 3, "{}", line);
        }
    }

    #[test]
    fn test_masks_match_catalog() {
        for (line, &mask) in CATALOG.iter().zip(LINE_MASKS.iter()) {
            assert_eq!(line.mask(), mask);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CATALOG[18].to_string(), "vertical (0,0) (0,1) (0,2)");
    }
}
