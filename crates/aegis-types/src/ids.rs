//! Grid coordinates and sector identifiers.
//!
//! The strategic map is a fixed grid of [`GRID_ROWS`] x [`GRID_COLS`] cells.
//! Each cell is addressed either by a zero-based [`GridCoordinate`] or by its
//! canonical [`SectorId`] string: the row as a letter (`A` = row 0 through
//! `X` = row 23) followed by the one-based column number, e.g. `F15`.
//!
//! The two forms convert losslessly in both directions. Both constructors
//! validate their input, so a value of either type always names a real cell.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of rows in the sector grid (letters `A` through `X`).
pub const GRID_ROWS: u8 = 24;

/// Number of columns in the sector grid (numbers `1` through `40`).
pub const GRID_COLS: u8 = 40;

/// Total number of cells in the grid.
pub const SECTOR_COUNT: usize = 960;

/// Letter assigned to row 0.
const FIRST_ROW_LETTER: u8 = b'A';

/// Errors raised when constructing a [`GridCoordinate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The row index lies outside `0..GRID_ROWS`.
    #[error("row {0} is outside the grid (0..{GRID_ROWS})")]
    RowOutOfRange(u8),

    /// The column index lies outside `0..GRID_COLS`.
    #[error("column {0} is outside the grid (0..{GRID_COLS})")]
    ColumnOutOfRange(u8),
}

/// Errors raised when parsing a [`SectorId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectorIdError {
    /// The text is not a row letter followed by a column number.
    #[error("malformed sector id: {0:?}")]
    Malformed(String),

    /// The text is well-formed but names a cell outside the grid.
    #[error("sector id {0:?} is outside the A1..X40 grid")]
    OutOfRange(String),
}

/// Zero-based position of a cell in the sector grid.
///
/// Ordering is row-major: all of row 0 sorts before row 1.
///
/// Deserialization goes through [`GridCoordinate::new`], so out-of-grid
/// input is rejected rather than accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GridCoordinate {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`GridCoordinate`].
#[derive(Deserialize)]
struct RawCoordinate {
    row: u8,
    col: u8,
}

impl TryFrom<RawCoordinate> for GridCoordinate {
    type Error = GridError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl GridCoordinate {
    /// Create a coordinate, rejecting anything outside the grid.
    pub const fn new(row: u8, col: u8) -> Result<Self, GridError> {
        if row >= GRID_ROWS {
            return Err(GridError::RowOutOfRange(row));
        }
        if col >= GRID_COLS {
            return Err(GridError::ColumnOutOfRange(col));
        }
        Ok(Self { row, col })
    }

    /// Zero-based row index.
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column index.
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Position of this cell in row-major order (`0..SECTOR_COUNT`).
    pub fn index(self) -> usize {
        usize::from(self.row)
            .saturating_mul(usize::from(GRID_COLS))
            .saturating_add(usize::from(self.col))
    }

    /// The cell displaced by `(d_row, d_col)`, or `None` if that falls off
    /// the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// Iterate every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| Self { row, col }))
    }
}

/// Canonical identity of a sector, e.g. `"F15"`.
///
/// Serializes as its string form. Parsing is strict: the row must be an
/// uppercase letter `A`..=`X` and the column a number `1`..=`40` written
/// without leading zeros, so every valid string maps to exactly one cell
/// and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectorId(GridCoordinate);

impl SectorId {
    /// The sector occupying the given grid cell.
    pub const fn from_coordinate(coordinate: GridCoordinate) -> Self {
        Self(coordinate)
    }

    /// The grid cell this sector occupies.
    pub const fn coordinate(self) -> GridCoordinate {
        self.0
    }

    /// Row letter, `A` through `X`.
    pub fn row_letter(self) -> char {
        char::from(FIRST_ROW_LETTER.saturating_add(self.0.row))
    }

    /// One-based column number, `1` through `40`.
    pub const fn column(self) -> u8 {
        self.0.col.saturating_add(1)
    }

    /// Iterate all sector ids in row-major order (`A1`, `A2`, ... `X40`).
    pub fn all() -> impl Iterator<Item = Self> {
        GridCoordinate::all().map(Self)
    }
}

impl From<GridCoordinate> for SectorId {
    fn from(coordinate: GridCoordinate) -> Self {
        Self(coordinate)
    }
}

impl From<SectorId> for GridCoordinate {
    fn from(id: SectorId) -> Self {
        id.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column())
    }
}

impl FromStr for SectorId {
    type Err = SectorIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SectorIdError::Malformed(s.to_owned());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        let digits = chars.as_str();

        if !letter.is_ascii_uppercase()
            || digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || digits.starts_with('0')
        {
            return Err(malformed());
        }

        let out_of_range = || SectorIdError::OutOfRange(s.to_owned());
        let row = u8::try_from(letter)
            .map_err(|_err| malformed())?
            .checked_sub(FIRST_ROW_LETTER)
            .ok_or_else(malformed)?;
        let column: u8 = digits.parse().map_err(|_err| out_of_range())?;
        let col = column.checked_sub(1).ok_or_else(out_of_range)?;

        GridCoordinate::new(row, col)
            .map(Self)
            .map_err(|_err| out_of_range())
    }
}

impl TryFrom<String> for SectorId {
    type Error = SectorIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectorId> for String {
    fn from(id: SectorId) -> Self {
        id.to_string()
    }
}
