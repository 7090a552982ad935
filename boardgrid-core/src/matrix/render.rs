use std::fmt::{Display, Write};

use super::Matrix;

/// Glyph used for empty slots by the [`Display`] impl.
pub const EMPTY_GLYPH: &str = ".";
/// Separator between two slots of a row used by the [`Display`] impl.
pub const SEPARATOR: &str = " ";

impl<T: Display> Matrix<T> {
    /// Renders one line per row, drawing empty slots with `empty` and joining the
    /// slots of a row with `separator`.
    ///
    /// ```
    /// use boardgrid_core::matrix::Matrix;
    ///
    /// let mut board = Matrix::with_size(2, 2)?;
    /// board.set(0, 0, 'B')?.set(1, 1, 'W')?;
    /// assert_eq!(board.render_with("-", "|"), "B|-\n-|W");
    /// # Ok::<(), boardgrid_core::matrix::MatrixError>(())
    /// ```
    #[must_use]
    pub fn render_with(&self, empty: &str, separator: &str) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_rows(&mut out, empty, separator);
        out
    }

    fn write_rows<W: Write>(&self, out: &mut W, empty: &str, separator: &str) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.write_char('\n')?;
            }
            for (x, slot) in row.iter().enumerate() {
                if x > 0 {
                    out.write_str(separator)?;
                }
                match slot {
                    Some(value) => write!(out, "{value}")?,
                    None => out.write_str(empty)?,
                }
            }
        }
        Ok(())
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_rows(f, EMPTY_GLYPH, SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_default_glyphs() {
        let mut board = Matrix::with_size(2, 3).unwrap();
        board.set(0, 1, "X").unwrap().set(1, 2, "O").unwrap();
        assert_eq!(board.to_string(), ". X .\n. . O");
    }

    #[test]
    fn empty_matrix_renders_nothing() {
        let board: Matrix<u8> = Matrix::new();
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn ragged_rows_render_as_stored() {
        let mut board = Matrix::with_size(2, 2).unwrap();
        board.set(1, 1, 7).unwrap().remove(0, 0).unwrap();
        assert_eq!(board.render_with("_", ","), "_\n_,7");
    }
}
