//! USA-states location lookup for the choropleth.
//!
//! Each state (plus DC) occupies one cell of a tile grid laid out roughly
//! by geography.  Row 0 is the northernmost row; columns run west to east.
//! Codes not in the grid have no location and are not drawn.

/// Grid position of a state tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub col: u8,
    pub row: u8,
}

/// Half the side of a drawn tile, in grid units; leaves a small gap.
const HALF_TILE: f64 = 0.45;

#[rustfmt::skip]
const STATE_TILES: [(&str, u8, u8); 51] = [
    ("AK", 0, 0),                                                                    ("ME", 10, 0),
                                  ("WI", 5, 1),                        ("VT", 9, 1), ("NH", 10, 1),
    ("WA", 0, 2), ("ID", 1, 2), ("MT", 2, 2), ("ND", 3, 2), ("MN", 4, 2), ("IL", 5, 2), ("MI", 6, 2),
    ("NY", 8, 2), ("MA", 9, 2),
    ("OR", 0, 3), ("NV", 1, 3), ("WY", 2, 3), ("SD", 3, 3), ("IA", 4, 3), ("IN", 5, 3), ("OH", 6, 3),
    ("PA", 7, 3), ("NJ", 8, 3), ("CT", 9, 3), ("RI", 10, 3),
    ("CA", 0, 4), ("UT", 1, 4), ("CO", 2, 4), ("NE", 3, 4), ("MO", 4, 4), ("KY", 5, 4), ("WV", 6, 4),
    ("VA", 7, 4), ("MD", 8, 4), ("DE", 9, 4),
    ("AZ", 1, 5), ("NM", 2, 5), ("KS", 3, 5), ("AR", 4, 5), ("TN", 5, 5), ("NC", 6, 5), ("SC", 7, 5),
    ("DC", 8, 5),
    ("OK", 3, 6), ("LA", 4, 6), ("MS", 5, 6), ("AL", 6, 6), ("GA", 7, 6),
    ("HI", 0, 7), ("TX", 3, 7), ("FL", 8, 7),
];

/// Number of grid columns and rows.
pub const GRID_COLS: u8 = 11;
pub const GRID_ROWS: u8 = 8;

/// Location of a state code, or `None` if the map cannot place it.
/// Matching is exact: codes are upper-case two-letter abbreviations.
pub fn tile_for(state: &str) -> Option<Tile> {
    STATE_TILES
        .iter()
        .find(|(code, _, _)| *code == state)
        .map(|&(_, col, row)| Tile { col, row })
}

/// State occupying the tile under plot coordinates `(x, y)`, if any.
pub fn state_at(x: f64, y: f64) -> Option<&'static str> {
    let col = x.round();
    let row = (-y).round();
    if (x - col).abs() > HALF_TILE || (-y - row).abs() > HALF_TILE {
        return None;
    }
    if col < 0.0 || row < 0.0 {
        return None;
    }
    let (col, row) = (col as u8, row as u8);
    STATE_TILES
        .iter()
        .find(|&&(_, c, r)| c == col && r == row)
        .map(|&(code, _, _)| code)
}

impl Tile {
    /// Tile centre in plot coordinates (north is +y).
    pub fn center(&self) -> [f64; 2] {
        [self.col as f64, -(self.row as f64)]
    }

    /// Corner points of the drawn square, counter-clockwise.
    pub fn corners(&self) -> Vec<[f64; 2]> {
        let [x, y] = self.center();
        vec![
            [x - HALF_TILE, y - HALF_TILE],
            [x + HALF_TILE, y - HALF_TILE],
            [x + HALF_TILE, y + HALF_TILE],
            [x - HALF_TILE, y + HALF_TILE],
        ]
    }
}
