use serde::{Deserialize, Serialize};

use crate::error::{LotError, Result};
use crate::spot::{Spot, SpotId};

pub const MAX_FLOORS: usize = 8;
pub const MAX_ROWS: usize = 1000;
pub const MAX_COLUMNS: usize = 1000;

/// Size of a lot. Fixed once the lot is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub floors: usize,
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(floors: usize, rows: usize, columns: usize) -> Result<Self> {
        check_axis("floors", floors, MAX_FLOORS)?;
        check_axis("rows", rows, MAX_ROWS)?;
        check_axis("columns", columns, MAX_COLUMNS)?;
        Ok(Dimensions {
            floors,
            rows,
            columns,
        })
    }

    pub fn volume(&self) -> usize {
        self.floors * self.rows * self.columns
    }

    pub fn contains(&self, floor: usize, row: usize, column: usize) -> bool {
        (1..=self.floors).contains(&floor)
            && (1..=self.rows).contains(&row)
            && (1..=self.columns).contains(&column)
    }

    /// Position of a 1-indexed coordinate in scan order.
    pub(crate) fn index(&self, floor: usize, row: usize, column: usize) -> Result<usize> {
        if !self.contains(floor, row, column) {
            return Err(LotError::OutOfRange { floor, row, column });
        }
        Ok(((floor - 1) * self.rows + (row - 1)) * self.columns + (column - 1))
    }
}

fn check_axis(axis: &'static str, value: usize, max: usize) -> Result<()> {
    if value < 1 || value > max {
        return Err(LotError::InvalidDimension { axis, value, max });
    }
    Ok(())
}

/// Dense spot storage laid out in scan order: floor, then row, then column.
pub(crate) struct Grid {
    dimensions: Dimensions,
    spots: Vec<Spot>,
}

impl Grid {
    pub(crate) fn new(dimensions: Dimensions) -> Self {
        let mut spots = Vec::with_capacity(dimensions.volume());
        for floor in 1..=dimensions.floors {
            for row in 1..=dimensions.rows {
                for column in 1..=dimensions.columns {
                    spots.push(Spot::inactive(floor, row, column));
                }
            }
        }
        Grid { dimensions, spots }
    }

    pub(crate) fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub(crate) fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub(crate) fn spot(&self, floor: usize, row: usize, column: usize) -> Result<&Spot> {
        let index = self.dimensions.index(floor, row, column)?;
        Ok(&self.spots[index])
    }

    pub(crate) fn spot_mut(&mut self, floor: usize, row: usize, column: usize) -> Result<&mut Spot> {
        let index = self.dimensions.index(floor, row, column)?;
        Ok(&mut self.spots[index])
    }

    /// Scan-order position of a spot id, checked against the bounds.
    pub(crate) fn index_of(&self, id: SpotId) -> Result<usize> {
        self.dimensions.index(id.floor, id.row, id.column)
    }

    pub(crate) fn get(&self, index: usize) -> &Spot {
        &self.spots[index]
    }

    /// First spot in scan order matching `predicate`.
    pub(crate) fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&Spot) -> bool,
    {
        self.spots.iter().position(predicate)
    }

    pub(crate) fn replace(&mut self, index: usize, spot: Spot) {
        self.spots[index] = spot;
    }
}
