use chumsky::prelude::*;
use glam::IVec2;
use itertools::Itertools;

use crate::direction::Connectivity;
use crate::error::GridError;

/// A cell coordinate: `x` is the column, `y` is the row.
pub type Point = IVec2;

/// A rectangular, row-major table of cells.
///
/// Every row has the same length; this is checked once at construction and
/// relied upon by every lookup afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Every line of the input, blank ones included.
fn lines<'a>() -> impl Parser<'a, &'a str, Vec<Vec<char>>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .collect::<Vec<char>>()
        .separated_by(text::newline())
        .collect()
}

impl<T> Grid<T> {
    /// Parses a character grid, mapping each character with `cell`.
    ///
    /// Blank lines are skipped. `cell` returns `None` for characters that are
    /// not part of the puzzle's alphabet, which is reported as
    /// [`GridError::InvalidCell`]. Errors name the zero-based input line, so
    /// skipped blank lines still count.
    pub fn parse(input: &str, mut cell: impl FnMut(char) -> Option<T>) -> Result<Self, GridError> {
        let lines = lines().parse(input).into_result().map_err(|errors| {
            GridError::Syntax(errors.iter().map(ToString::to_string).join("; "))
        })?;

        let lines = lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .collect_vec();
        let width = lines
            .first()
            .map(|(_, line)| line.len())
            .ok_or(GridError::Empty)?;

        let rows = lines
            .into_iter()
            .map(|(row, line)| {
                if line.len() != width {
                    return Err(GridError::Ragged {
                        row,
                        expected: width,
                        found: line.len(),
                    });
                }
                line.into_iter()
                    .enumerate()
                    .map(|(col, ch)| cell(ch).ok_or(GridError::InvalidCell { ch, row, col }))
                    .collect::<Result<Vec<T>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Builds a grid from already converted rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    fn point(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    fn out_of_bounds(&self, p: Point) -> GridError {
        GridError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the cell at `p`, or `None` outside the grid.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Like [`Grid::get`], but reports out-of-bounds access as an error.
    pub fn at(&self, p: Point) -> Result<&T, GridError> {
        self.get(p).ok_or_else(|| self.out_of_bounds(p))
    }

    pub fn set(&mut self, p: Point, value: T) -> Result<(), GridError> {
        let i = self.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        self.cells[i] = value;
        Ok(())
    }

    /// First cell (row-major) matching `pred`.
    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<Point> {
        self.cells.iter().position(pred).map(|i| self.point(i))
    }

    /// Like [`Grid::position`], failing with [`GridError::MissingMarker`].
    pub fn require(&self, marker: char, pred: impl Fn(&T) -> bool) -> Result<Point, GridError> {
        self.position(pred).ok_or(GridError::MissingMarker(marker))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|i| self.point(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.point(i), cell))
    }

    /// A grid of the same shape with every cell converted by `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// In-bounds neighbours of `p`, in a fixed clockwise order.
    pub fn neighbors(
        &self,
        p: Point,
        connectivity: Connectivity,
    ) -> impl Iterator<Item = Point> + '_ {
        connectivity
            .offsets()
            .iter()
            .map(move |&d| p + d)
            .filter(|&n| self.in_bounds(n))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}
