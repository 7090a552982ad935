#![doc(html_root_url = "https://docs.rs/boardgrid-core/0.1.0")]
//! `boardgrid-core` is the underlying library for `boardgrid`.
//!
//! Its center is [`Matrix`][matrix::Matrix], a resizable grid of optional values
//! that game boards (Othello grids, cellular automata, ...) are stored in. The
//! matrix knows nothing about the games played on it: it stores values at
//! `(row, column)` coordinates, reshapes itself and validates every index it is
//! given.
//!
//! The remaining modules support the `boardgrid` binary: [`configs`] loads the
//! user's `config.toml` and [`cli`] parses and runs board scripts.

pub mod cli;
pub mod configs;
pub mod matrix;

mod macros {
    //! This module holds generic macros that are used throughout boardgrid.

    /// Used to add a `.map_err()` to function calls that return a `Result<T, E>`
    /// to provide better context for the error and print it nicely to stdout.
    ///
    /// Takes 2 arguments and optionally a third:
    /// - The first argument is the expression or function call that would return a `Result<T, E>`
    /// - The second argument is context that better describes the returned error
    /// - The optional third argument is an additional "help:" message
    ///
    /// ## Example
    /// ```
    /// use boardgrid_core::{map_miette, matrix::Matrix};
    /// fn returns_err() -> miette::Result<()> {
    ///     let mut board: Matrix<char> = Matrix::new();
    ///     map_miette!(
    ///         board.set(3, 3, 'x'),
    ///         "Failed to place a piece",
    ///         help = "The board has no rows yet."
    ///     )?;
    ///     Ok(())
    /// }
    /// assert!(returns_err().is_err());
    /// ```
    #[macro_export]
    macro_rules! map_miette {
        // Additional "help" message
        ($expr:expr, $wrap_msg:expr, help = $add_help:expr) => {
            $expr.map_err(|e| {
                use crossterm::style::Stylize;
                miette::miette!(
                    help = format!("{}\nFor more information, try `boardgrid --help`.", $add_help),
                    "{e}"
                )
                .wrap_err(format!("{}", $wrap_msg).red())
            })
        };

        // Default "help" message
        ($expr:expr, $wrap_msg:expr) => {
            $expr.map_err(|e| {
                use crossterm::style::Stylize;
                miette::miette!(help = "For more information, try `boardgrid --help`.", "{e}")
                    .wrap_err(format!("{}", $wrap_msg).red())
            })
        };
    }
}
