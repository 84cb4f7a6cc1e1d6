use crate::collections::square::Square;
use crate::error::InvalidGeometry;
use crate::{Board, Value};

/// Row, column and enclosing-box origin of one linear cell position.
///
/// `box_row`/`box_col` are the coordinates of the top-left cell of the box
/// containing the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCoords {
    pub row: usize,
    pub col: usize,
    pub box_row: usize,
    pub box_col: usize,
}

/// Validated grid dimensions plus a precomputed coordinate table.
///
/// Built once per `(n, b, m)` run and shared read-only by both engines.
#[derive(Clone, Debug)]
pub struct Geometry {
    size: usize,
    box_size: usize,
    max_value: Value,
    coords: Vec<CellCoords>,
}

impl Geometry {
    /// Creates a geometry for an `n × n` grid with `b × b` boxes filled from
    /// the alphabet `1..=max_value`.
    pub fn new(size: usize, box_size: usize, max_value: Value) -> Result<Self, InvalidGeometry> {
        if size == 0 {
            return Err(InvalidGeometry::ZeroSize);
        }
        if box_size == 0 {
            return Err(InvalidGeometry::ZeroBoxSize);
        }
        if size < box_size {
            return Err(InvalidGeometry::BoxLargerThanGrid { size, box_size });
        }
        if size % box_size != 0 {
            return Err(InvalidGeometry::UnalignedBox { size, box_size });
        }
        let required = box_size.pow(2) as Value;
        if max_value < required {
            return Err(InvalidGeometry::AlphabetTooSmall {
                max_value,
                required,
            });
        }
        let coords = (0..size.pow(2))
            .map(|index| {
                let row = index / size;
                let col = index % size;
                CellCoords {
                    row,
                    col,
                    box_row: row - row % box_size,
                    box_col: col - col % box_size,
                }
            })
            .collect();
        Ok(Self {
            size,
            box_size,
            max_value,
            coords,
        })
    }

    /// Creates a geometry whose alphabet is exactly `1..=size`.
    pub fn with_default_alphabet(size: usize, box_size: usize) -> Result<Self, InvalidGeometry> {
        Self::new(size, box_size, size as Value)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// The largest value in the alphabet `1..=max_value`.
    pub fn max_value(&self) -> Value {
        self.max_value
    }

    /// The number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates of the cell at a linear (row-major) position.
    pub fn coords(&self, index: usize) -> CellCoords {
        self.coords[index]
    }

    /// A fresh all-unassigned board for this grid.
    pub fn empty_board(&self) -> Board {
        Square::with_width(self.size)
    }
}
