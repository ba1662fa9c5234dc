use miette::Diagnostic;
use thiserror::Error;

/// Structural problems found while building or indexing a [`Grid`](crate::Grid).
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GridError {
    #[error("grid input is empty")]
    #[diagnostic(code(aoc_utils::grid::empty))]
    Empty,

    #[error("failed to parse grid: {0}")]
    #[diagnostic(code(aoc_utils::grid::syntax))]
    Syntax(String),

    /// `row` is the zero-based input line, blank lines included.
    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(aoc_utils::grid::ragged),
        help("every row of the grid must have the same length")
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// `row` is the zero-based input line, blank lines included.
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    #[diagnostic(code(aoc_utils::grid::invalid_cell))]
    InvalidCell { ch: char, row: usize, col: usize },

    #[error("no {0:?} marker in grid")]
    #[diagnostic(code(aoc_utils::grid::missing_marker))]
    MissingMarker(char),

    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    #[diagnostic(code(aoc_utils::grid::out_of_bounds))]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SearchError {
    #[error("cannot count paths: the search graph contains a cycle")]
    #[diagnostic(
        code(aoc_utils::search::cycle),
        help("use `enumerate_paths` for graphs that may revisit a state")
    )]
    Cycle,

    #[error("path count does not fit in 128 bits")]
    #[diagnostic(code(aoc_utils::search::overflow))]
    Overflow,
}
