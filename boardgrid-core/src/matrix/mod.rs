//! This module holds [`Matrix`], the resizable two-dimensional storage that game
//! boards are built on, together with the [`Position`] type used to address it.
//!
//! A matrix is a list of [`Row`]s. Every slot is either a value or empty, which is
//! kept apart from any value of `T` so that boards may store anything, including
//! values that would otherwise look "empty".
//!
//! All operations taking an explicit index validate it first and fail with a
//! [`MatrixError`] instead of clamping. Rows are checked against the number of rows,
//! columns against the length of row 0.
//!
//! ## Default insertion points
//! The structural operations without an explicit index pick one from the current
//! shape, and they are not symmetric:
//! - [`Matrix::insert_rows`] inserts *before the last row* (at `row_count() - 1`),
//!   so the bottom row stays at the bottom.
//! - [`Matrix::insert_columns`] appends at the right edge.
//! - [`Matrix::remove_rows`] and [`Matrix::remove_columns`] remove from the bottom
//!   and right edges respectively.
//!
//! [`Matrix::resize`] changes columns first and rows second, growing through the
//! same defaults.

mod errors;
mod identity;
mod position;
mod render;
mod row;
mod serialize;


pub use errors::{Axis, MatrixError};
pub use identity::Identity;
pub use position::Position;
pub use render::{EMPTY_GLYPH, SEPARATOR};
pub use row::Row;

use std::{cmp::Ordering, ops::Index};
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, MatrixError>;

/// A rectangular grid of optional `T` values, addressed by `(row, column)`.
///
/// ```
/// use boardgrid_core::matrix::{Matrix, Position};
///
/// let mut board: Matrix<char> = Matrix::with_size(2, 3)?;
/// board.set(0, 1, 'x')?.set_at(Position::new(2, 1), 'o')?;
///
/// assert_eq!(board.get(0, 1)?, Some(&'x'));
/// assert_eq!(board.get(1, 2)?, Some(&'o'));
/// assert_eq!(board.get(1, 0)?, None);
/// # Ok::<(), boardgrid_core::matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Creates a matrix with no rows and no columns.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a `rows` x `columns` matrix with every slot empty.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `rows` or `columns` is not positive.
    pub fn with_size(rows: isize, columns: isize) -> Result<Self> {
        let rows = positive(rows, "Rows must be positive")?;
        let columns = positive(columns, "Columns must be positive")?;

        Ok(Self {
            rows: (0..rows).map(|_| Row::new_empty(columns)).collect(),
        })
    }

    /// Builds a matrix from already filled rows.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when the rows are not all the same length.
    pub fn from_rows(rows: Vec<Row<T>>) -> Result<Self> {
        if let Some(first) = rows.first()
            && rows.iter().any(|row| row.len() != first.len())
        {
            return Err(MatrixError::invalid_dimension(
                "Rows must all have the same length",
            ));
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The length of row 0, or `0` when the matrix has no rows.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    /// The number of slots in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// `true` when the matrix has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Row::is_empty)
    }

    /// The actual length of `row`.
    ///
    /// This only differs from [`Matrix::column_count`] after [`Matrix::remove`]
    /// deleted a slot from a row.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` does not exist.
    pub fn row_len(&self, row: isize) -> Result<usize> {
        self.row(row).map(Row::len)
    }

    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` does not exist.
    pub fn row(&self, row: isize) -> Result<&Row<T>> {
        let row = self.check_row(row)?;
        Ok(&self.rows[row])
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Iterates over every slot, rows top to bottom and columns left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&T>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, slot)| (Position::from_indices(x, y), slot.as_ref()))
        })
    }

    /// Returns the value at `(row, column)`, `None` when the slot is empty.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` or `column` is outside the matrix.
    pub fn get(&self, row: isize, column: isize) -> Result<Option<&T>> {
        let (r, c) = self.check_bounds(row, column)?;
        Ok(self.slot(r, c)?.as_ref())
    }

    /// [`Matrix::get`] with `position.y` as row and `position.x` as column.
    ///
    /// # Errors
    /// See [`Matrix::get`].
    pub fn get_at(&self, position: Position) -> Result<Option<&T>> {
        self.get(position.get_y(), position.get_x())
    }

    /// # Errors
    /// See [`Matrix::get`].
    pub fn get_mut(&mut self, row: isize, column: isize) -> Result<Option<&mut T>> {
        Ok(self.slot_mut(row, column)?.as_mut())
    }

    /// Stores `value` at `(row, column)`, replacing whatever was there.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` or `column` is outside the matrix.
    pub fn set(&mut self, row: isize, column: isize, value: T) -> Result<&mut Self> {
        *self.slot_mut(row, column)? = Some(value);
        trace!(row, column, "set slot");
        Ok(self)
    }

    /// [`Matrix::set`] with `position.y` as row and `position.x` as column.
    ///
    /// # Errors
    /// See [`Matrix::set`].
    pub fn set_at(&mut self, position: Position, value: T) -> Result<&mut Self> {
        self.set(position.get_y(), position.get_x(), value)
    }

    /// Empties the slot at `(row, column)` and keeps the shape of the matrix.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` or `column` is outside the matrix.
    pub fn clear(&mut self, row: isize, column: isize) -> Result<&mut Self> {
        *self.slot_mut(row, column)? = None;
        trace!(row, column, "cleared slot");
        Ok(self)
    }

    /// # Errors
    /// See [`Matrix::clear`].
    pub fn clear_at(&mut self, position: Position) -> Result<&mut Self> {
        self.clear(position.get_y(), position.get_x())
    }

    /// Moves the value out of `(row, column)`, leaving the slot empty.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` or `column` is outside the matrix.
    pub fn take(&mut self, row: isize, column: isize) -> Result<Option<T>> {
        Ok(self.slot_mut(row, column)?.take())
    }

    /// Deletes the slot at `(row, column)` from its row.
    ///
    /// The row gets one slot shorter and the slots right of `column` shift left;
    /// the other rows are untouched, so the matrix is no longer rectangular until
    /// the caller fixes it. Use [`Matrix::clear`] to empty a slot instead.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] when `row` or `column` is outside the matrix.
    pub fn remove(&mut self, row: isize, column: isize) -> Result<&mut Self> {
        let (r, c) = self.check_bounds(row, column)?;
        self.slot(r, c)?;
        self.rows[r].remove_slot(c);
        trace!(row, column, "removed slot");
        Ok(self)
    }

    /// [`Matrix::remove`] with `position.y` as row and `position.x` as column.
    ///
    /// # Errors
    /// See [`Matrix::remove`].
    pub fn remove_at(&mut self, position: Position) -> Result<&mut Self> {
        self.remove(position.get_y(), position.get_x())
    }

    /// Returns the position of the first slot holding the very same handle as `value`.
    ///
    /// Rows are scanned top to bottom and each row left to right. Comparison is by
    /// identity (see [`Identity`]), not by equality.
    ///
    /// # Errors
    /// [`MatrixError::NotFound`] when no slot holds `value`.
    pub fn find(&self, value: &T) -> Result<Position>
    where
        T: Identity,
    {
        self.find_by(|slot| slot.is_same(value))
    }

    /// Returns the position of the first value matching `predicate`, in the same
    /// order as [`Matrix::find`]. Empty slots are skipped.
    ///
    /// # Errors
    /// [`MatrixError::NotFound`] when no value matches.
    pub fn find_by<F>(&self, mut predicate: F) -> Result<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find_map(|(position, slot)| slot.filter(|&v| predicate(v)).map(|_| position))
            .ok_or(MatrixError::NotFound)
    }

    /// Reshapes the matrix to `rows` x `columns`.
    ///
    /// Columns are changed first, at the right edge. Rows are changed second:
    /// removed from the bottom, or added through [`Matrix::insert_rows`], which
    /// places them before the current last row. A matrix without rows gets its
    /// new rows `columns` slots wide.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `rows` or `columns` is negative.
    pub fn resize(&mut self, rows: isize, columns: isize) -> Result<&mut Self> {
        let rows = non_negative(rows, "Rows must not be negative")?;
        let columns = non_negative(columns, "Columns must not be negative")?;
        debug!(
            from = ?(self.row_count(), self.column_count()),
            to = ?(rows, columns),
            "resizing matrix"
        );

        let current = self.column_count();
        match columns.cmp(&current) {
            Ordering::Greater => self.widen(current, columns - current),
            Ordering::Less => self.narrow(current - columns),
            Ordering::Equal => {}
        }

        let current = self.row_count();
        match rows.cmp(&current) {
            Ordering::Greater => {
                self.splice_rows(self.default_row_index(), rows - current, columns)
            }
            Ordering::Less => self.drop_rows(current - rows),
            Ordering::Equal => {}
        }

        Ok(self)
    }

    /// Inserts `amount` empty rows before the last row, or at the top of a
    /// matrix without rows.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive.
    pub fn insert_rows(&mut self, amount: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of rows must be positive")?;
        self.splice_rows(self.default_row_index(), amount, self.column_count());
        Ok(self)
    }

    /// Inserts `amount` empty rows at `index`, shifting the rows from `index` down.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive,
    /// [`MatrixError::OutOfBounds`] when `index` is not an existing row.
    pub fn insert_rows_at(&mut self, amount: isize, index: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of rows must be positive")?;
        let index = self.check_row(index)?;
        self.splice_rows(index, amount, self.column_count());
        Ok(self)
    }

    /// Appends `amount` empty columns at the right edge of every row.
    ///
    /// A matrix without rows has nothing to widen and is left as is.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive.
    pub fn insert_columns(&mut self, amount: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of columns must be positive")?;
        if self.rows.is_empty() {
            warn!(amount, "no rows to insert columns into");
            return Ok(self);
        }
        self.widen(self.column_count(), amount);
        Ok(self)
    }

    /// Inserts `amount` empty columns at `index` in every row.
    ///
    /// `index` may equal [`Matrix::column_count`] to append.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive,
    /// [`MatrixError::OutOfBounds`] when the matrix has no rows or `index` is past
    /// the right edge.
    pub fn insert_columns_at(&mut self, amount: isize, index: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of columns must be positive")?;
        self.check_row(0)?;
        let width = self.column_count();
        let index = usize::try_from(index)
            .ok()
            .filter(|&c| c <= width)
            .ok_or(MatrixError::out_of_bounds(Axis::Column, index, width + 1))?;
        self.widen(index, amount);
        Ok(self)
    }

    /// Removes the last `amount` rows.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive or larger
    /// than [`Matrix::row_count`].
    pub fn remove_rows(&mut self, amount: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of rows must be positive")?;
        if amount > self.row_count() {
            return Err(MatrixError::invalid_dimension(
                "Amount of rows exceeds the rows of the matrix",
            ));
        }
        self.drop_rows(amount);
        Ok(self)
    }

    /// Removes `amount` consecutive rows starting at `index`.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive,
    /// [`MatrixError::OutOfBounds`] when `index` is not an existing row or the
    /// range runs past the last row.
    pub fn remove_rows_at(&mut self, amount: isize, index: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of rows must be positive")?;
        let index = self.check_row(index)?;
        let end = index + amount;
        if end > self.row_count() {
            return Err(MatrixError::out_of_bounds(
                Axis::Row,
                signed(end - 1),
                self.row_count(),
            ));
        }
        self.rows.drain(index..end);
        debug!(index, amount, "removed rows");
        Ok(self)
    }

    /// Removes the last `amount` columns from every row.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive or larger
    /// than [`Matrix::column_count`].
    pub fn remove_columns(&mut self, amount: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of columns must be positive")?;
        if amount > self.column_count() {
            return Err(MatrixError::invalid_dimension(
                "Amount of columns exceeds the columns of the matrix",
            ));
        }
        self.narrow(amount);
        Ok(self)
    }

    /// Removes `amount` consecutive columns starting at `index` from every row.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when `amount` is not positive,
    /// [`MatrixError::OutOfBounds`] when the matrix has no rows, `index` is not an
    /// existing column or the range runs past the right edge.
    pub fn remove_columns_at(&mut self, amount: isize, index: isize) -> Result<&mut Self> {
        let amount = positive(amount, "Amount of columns must be positive")?;
        let (_, index) = self.check_bounds(0, index)?;
        let end = index + amount;
        if end > self.column_count() {
            return Err(MatrixError::out_of_bounds(
                Axis::Column,
                signed(end - 1),
                self.column_count(),
            ));
        }
        for row in &mut self.rows {
            row.remove_slots(index, amount);
        }
        debug!(index, amount, "removed columns");
        Ok(self)
    }

    fn default_row_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    fn splice_rows(&mut self, index: usize, amount: usize, width: usize) {
        self.rows
            .splice(index..index, (0..amount).map(|_| Row::new_empty(width)));
        debug!(index, amount, width, "inserted rows");
    }

    fn drop_rows(&mut self, amount: usize) {
        let len = self.rows.len().saturating_sub(amount);
        self.rows.truncate(len);
        debug!(amount, "removed rows from the bottom");
    }

    fn widen(&mut self, index: usize, amount: usize) {
        for row in &mut self.rows {
            row.insert_empty(index, amount);
        }
        debug!(index, amount, "inserted columns");
    }

    fn narrow(&mut self, amount: usize) {
        let width = self.column_count().saturating_sub(amount);
        for row in &mut self.rows {
            row.truncate(width);
        }
        debug!(amount, "removed columns from the right");
    }

    fn slot(&self, row: usize, column: usize) -> Result<&Option<T>> {
        let line = &self.rows[row];
        line.get_slot(column)
            .ok_or(MatrixError::out_of_bounds(Axis::Column, signed(column), line.len()))
    }

    fn slot_mut(&mut self, row: isize, column: isize) -> Result<&mut Option<T>> {
        let (r, c) = self.check_bounds(row, column)?;
        let line = &mut self.rows[r];
        let len = line.len();
        line.get_mut_slot(c)
            .ok_or(MatrixError::out_of_bounds(Axis::Column, column, len))
    }

    /// Checks `row` against the rows and `column` against the length of row 0.
    fn check_bounds(&self, row: isize, column: isize) -> Result<(usize, usize)> {
        Ok((self.check_row(row)?, self.check_column(column)?))
    }

    fn check_row(&self, row: isize) -> Result<usize> {
        usize::try_from(row)
            .ok()
            .filter(|&r| r < self.row_count())
            .ok_or(MatrixError::out_of_bounds(Axis::Row, row, self.row_count()))
    }

    fn check_column(&self, column: isize) -> Result<usize> {
        usize::try_from(column)
            .ok()
            .filter(|&c| c < self.column_count())
            .ok_or(MatrixError::out_of_bounds(
                Axis::Column,
                column,
                self.column_count(),
            ))
    }
}

impl<T> Index<Position> for Matrix<T> {
    type Output = Option<T>;

    /// # Panics
    /// When `position` is outside the matrix, like slice indexing.
    fn index(&self, position: Position) -> &Self::Output {
        let row = usize::try_from(position.get_y()).expect("Row must not be negative");
        let column = usize::try_from(position.get_x()).expect("Column must not be negative");
        &self.rows[row][column]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a Row<T>;
    type IntoIter = std::slice::Iter<'a, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = Row<T>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

fn positive(amount: isize, reason: &'static str) -> Result<usize> {
    usize::try_from(amount)
        .ok()
        .filter(|&a| a > 0)
        .ok_or(MatrixError::invalid_dimension(reason))
}

fn non_negative(amount: isize, reason: &'static str) -> Result<usize> {
    usize::try_from(amount).map_err(|_| MatrixError::invalid_dimension(reason))
}

#[allow(clippy::cast_possible_wrap)]
const fn signed(index: usize) -> isize {
    index as isize
}
