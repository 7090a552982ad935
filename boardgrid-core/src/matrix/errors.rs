use std::fmt::Display;

/// The axis an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Errors returned by every fallible [`Matrix`][super::Matrix] operation.
///
/// All of them are usage errors: retrying the same call on the same matrix
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, miette::Diagnostic, thiserror::Error)]
pub enum MatrixError {
    /// A size or amount that must be positive was zero or negative, or a
    /// resize target was negative.
    #[error("Invalid dimension: {reason}")]
    #[diagnostic(
        code(boardgrid::matrix::invalid_dimension),
        help("Sizes and amounts must be at least 1, resize targets must not be negative.")
    )]
    InvalidDimension { reason: &'static str },

    /// An index fell outside `0..extent` on `axis`.
    #[error("The {axis} {index} must be within the matrix bounds (0..{extent})")]
    #[diagnostic(code(boardgrid::matrix::out_of_bounds))]
    OutOfBounds {
        axis: Axis,
        index: isize,
        extent: usize,
    },

    /// No slot held the searched value.
    #[error("Not found.")]
    #[diagnostic(code(boardgrid::matrix::not_found))]
    NotFound,
}

impl MatrixError {
    pub(crate) const fn invalid_dimension(reason: &'static str) -> Self {
        Self::InvalidDimension { reason }
    }

    pub(crate) const fn out_of_bounds(axis: Axis, index: isize, extent: usize) -> Self {
        Self::OutOfBounds {
            axis,
            index,
            extent,
        }
    }
}

#[test]
fn messages_name_the_axis() {
    let row = MatrixError::out_of_bounds(Axis::Row, 5, 3);
    let column = MatrixError::out_of_bounds(Axis::Column, -1, 2);
    assert_eq!(
        row.to_string(),
        "The row 5 must be within the matrix bounds (0..3)"
    );
    assert_eq!(
        column.to_string(),
        "The column -1 must be within the matrix bounds (0..2)"
    );
    assert_eq!(
        MatrixError::invalid_dimension("Rows must be positive").to_string(),
        "Invalid dimension: Rows must be positive"
    );
}
