//! Board scripts: a list of operations applied in order to a fresh board.
//!
//! Each operation is one command line argument, see [`OP_GRAMMAR`].

use std::{fmt::Display, io::Write, str::FromStr};

use miette::{Context, IntoDiagnostic};
use tracing::{debug, instrument};

use crate::{
    configs::{Appearance, get_config},
    map_miette,
    matrix::{Matrix, MatrixError, Position},
};

/// Every operation understood by [`valid_op`], with a short description.
pub static OP_GRAMMAR: &[(&str, &str)] = &[
    ("set=R,C,VALUE", "Store VALUE at row R, column C"),
    ("clear=R,C", "Empty the slot at row R, column C"),
    ("remove=R,C", "Delete the slot at row R, column C from its row"),
    ("insert-rows=N[@I]", "Insert N rows before the last row, or at row I"),
    ("insert-columns=N[@I]", "Append N columns, or insert them at column I"),
    ("remove-rows=N[@I]", "Remove the last N rows, or N rows from row I"),
    ("remove-columns=N[@I]", "Remove the last N columns, or N columns from column I"),
    ("resize=RxC", "Reshape the board to R rows and C columns"),
    ("find=VALUE", "Print the position of the first slot equal to VALUE"),
];

/// One step of a board script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOp {
    Set {
        row: isize,
        column: isize,
        value: String,
    },
    Clear {
        row: isize,
        column: isize,
    },
    Remove {
        row: isize,
        column: isize,
    },
    InsertRows {
        amount: isize,
        index: Option<isize>,
    },
    InsertColumns {
        amount: isize,
        index: Option<isize>,
    },
    RemoveRows {
        amount: isize,
        index: Option<isize>,
    },
    RemoveColumns {
        amount: isize,
        index: Option<isize>,
    },
    Resize {
        rows: isize,
        columns: isize,
    },
    Find {
        value: String,
    },
}

impl Display for BoardOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set { row, column, value } => write!(f, "set={row},{column},{value}"),
            Self::Clear { row, column } => write!(f, "clear={row},{column}"),
            Self::Remove { row, column } => write!(f, "remove={row},{column}"),
            Self::InsertRows { amount, index } => {
                write_indexed(f, "insert-rows", *amount, *index)
            }
            Self::InsertColumns { amount, index } => {
                write_indexed(f, "insert-columns", *amount, *index)
            }
            Self::RemoveRows { amount, index } => {
                write_indexed(f, "remove-rows", *amount, *index)
            }
            Self::RemoveColumns { amount, index } => {
                write_indexed(f, "remove-columns", *amount, *index)
            }
            Self::Resize { rows, columns } => write!(f, "resize={rows}x{columns}"),
            Self::Find { value } => write!(f, "find={value}"),
        }
    }
}

fn write_indexed(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    amount: isize,
    index: Option<isize>,
) -> std::fmt::Result {
    match index {
        Some(index) => write!(f, "{name}={amount}@{index}"),
        None => write!(f, "{name}={amount}"),
    }
}

impl FromStr for BoardOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        valid_op(s)
    }
}

/// Parses one board operation.
///
/// Used in `boardgrid`s `clap` cli interface to validate user input and
/// propagate errors before running the script. Indices and amounts are parsed
/// as signed numbers: whether they make sense is decided by the board.
///
/// # Errors
/// When `input` does not match any entry of [`OP_GRAMMAR`].
pub fn valid_op(input: &str) -> Result<BoardOp, String> {
    let (name, args) = input
        .split_once('=')
        .ok_or_else(|| format!("Invalid operation '{input}'\nExpected NAME=ARGS"))?;

    let op = match name {
        "set" => {
            let mut parts = args.splitn(3, ',');
            let (Some(row), Some(column), Some(value)) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(format!("Invalid operation '{input}'\nExpected set=R,C,VALUE"));
            };
            BoardOp::Set {
                row: number(row, input)?,
                column: number(column, input)?,
                value: value.to_string(),
            }
        }
        "clear" | "remove" => {
            let (row, column) = args
                .split_once(',')
                .ok_or_else(|| format!("Invalid operation '{input}'\nExpected {name}=R,C"))?;
            let (row, column) = (number(row, input)?, number(column, input)?);
            if name == "clear" {
                BoardOp::Clear { row, column }
            } else {
                BoardOp::Remove { row, column }
            }
        }
        "insert-rows" | "insert-columns" | "remove-rows" | "remove-columns" => {
            let (amount, index) = match args.split_once('@') {
                Some((amount, index)) => (number(amount, input)?, Some(number(index, input)?)),
                None => (number(args, input)?, None),
            };
            match name {
                "insert-rows" => BoardOp::InsertRows { amount, index },
                "insert-columns" => BoardOp::InsertColumns { amount, index },
                "remove-rows" => BoardOp::RemoveRows { amount, index },
                _ => BoardOp::RemoveColumns { amount, index },
            }
        }
        "resize" => {
            let (rows, columns) = args
                .split_once('x')
                .ok_or_else(|| format!("Invalid operation '{input}'\nExpected resize=RxC"))?;
            BoardOp::Resize {
                rows: number(rows, input)?,
                columns: number(columns, input)?,
            }
        }
        "find" => BoardOp::Find {
            value: args.to_string(),
        },
        _ => {
            return Err(format!(
                "Unknown operation '{name}'\nTo see valid operations, use `boardgrid list-ops`"
            ));
        }
    };
    Ok(op)
}

fn number(s: &str, input: &str) -> Result<isize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid number '{s}' in operation '{input}'"))
}

/// Applies `op` to `board`, returning the position found by [`BoardOp::Find`].
///
/// # Errors
/// Whatever the board operation fails with.
pub fn apply_op(board: &mut Matrix<String>, op: &BoardOp) -> Result<Option<Position>, MatrixError> {
    match op {
        BoardOp::Set { row, column, value } => {
            board.set(*row, *column, value.clone())?;
        }
        BoardOp::Clear { row, column } => {
            board.clear(*row, *column)?;
        }
        BoardOp::Remove { row, column } => {
            board.remove(*row, *column)?;
        }
        BoardOp::InsertRows { amount, index } => {
            match index {
                Some(index) => board.insert_rows_at(*amount, *index)?,
                None => board.insert_rows(*amount)?,
            };
        }
        BoardOp::InsertColumns { amount, index } => {
            match index {
                Some(index) => board.insert_columns_at(*amount, *index)?,
                None => board.insert_columns(*amount)?,
            };
        }
        BoardOp::RemoveRows { amount, index } => {
            match index {
                Some(index) => board.remove_rows_at(*amount, *index)?,
                None => board.remove_rows(*amount)?,
            };
        }
        BoardOp::RemoveColumns { amount, index } => {
            match index {
                Some(index) => board.remove_columns_at(*amount, *index)?,
                None => board.remove_columns(*amount)?,
            };
        }
        BoardOp::Resize { rows, columns } => {
            board.resize(*rows, *columns)?;
        }
        BoardOp::Find { value } => {
            return board.find_by(|slot| slot == value).map(Some);
        }
    }
    Ok(None)
}

/// Builds a `rows` x `columns` board and applies `ops` to it in order.
///
/// The result of every `find` is written to `out`. The first failing operation
/// stops the script.
///
/// # Errors
/// When the board cannot be created, an operation fails, or writing to `out` fails.
#[instrument(skip(out, ops), fields(steps = ops.len()))]
pub fn run_script<W: Write>(
    out: &mut W,
    rows: usize,
    columns: usize,
    ops: &[BoardOp],
) -> miette::Result<Matrix<String>> {
    let mut board = map_miette!(
        Matrix::with_size(dimension(rows), dimension(columns)),
        format!("Failed to create a {rows}x{columns} board")
    )?;

    for (step, op) in ops.iter().enumerate() {
        debug!(step, %op, "applying operation");
        let found = map_miette!(
            apply_op(&mut board, op),
            format!("Step {} '{op}' failed", step + 1),
            help = format!(
                "The board is {}x{}.",
                board.row_count(),
                board.column_count()
            )
        )?;
        if let Some(position) = found {
            writeln!(out, "{op}: {position}")
                .into_diagnostic()
                .wrap_err("Failed to write to stdout.")?;
        }
    }

    Ok(board)
}

/// Renders `board` with the configured glyphs followed by its shape.
#[must_use]
pub fn render_board(board: &Matrix<String>) -> String {
    render_board_with(board, &get_config().appearance)
}

/// Renders `board` with the glyphs of `appearance` followed by its shape.
#[must_use]
pub fn render_board_with(board: &Matrix<String>, appearance: &Appearance) -> String {
    format!(
        "{}\n({} rows x {} columns)",
        board.render_with(&appearance.empty, &appearance.separator),
        board.row_count(),
        board.column_count()
    )
}

fn dimension(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation() {
        struct Case<'a> {
            input: &'a str,
            expected: BoardOp,
        }
        let cases = vec![
            Case {
                input: "set=0,1,B",
                expected: BoardOp::Set {
                    row: 0,
                    column: 1,
                    value: "B".to_string(),
                },
            },
            Case {
                input: "set=2,3,a,b",
                expected: BoardOp::Set {
                    row: 2,
                    column: 3,
                    value: "a,b".to_string(),
                },
            },
            Case {
                input: "clear=1,1",
                expected: BoardOp::Clear { row: 1, column: 1 },
            },
            Case {
                input: "remove=-1,0",
                expected: BoardOp::Remove { row: -1, column: 0 },
            },
            Case {
                input: "insert-rows=2",
                expected: BoardOp::InsertRows {
                    amount: 2,
                    index: None,
                },
            },
            Case {
                input: "insert-columns=1@0",
                expected: BoardOp::InsertColumns {
                    amount: 1,
                    index: Some(0),
                },
            },
            Case {
                input: "remove-rows=3@1",
                expected: BoardOp::RemoveRows {
                    amount: 3,
                    index: Some(1),
                },
            },
            Case {
                input: "remove-columns=0",
                expected: BoardOp::RemoveColumns {
                    amount: 0,
                    index: None,
                },
            },
            Case {
                input: "resize=4x5",
                expected: BoardOp::Resize {
                    rows: 4,
                    columns: 5,
                },
            },
            Case {
                input: "find=W",
                expected: BoardOp::Find {
                    value: "W".to_string(),
                },
            },
        ];

        for (idx, case) in cases.iter().enumerate() {
            let parsed = valid_op(case.input);
            assert_eq!(
                parsed.as_ref(),
                Ok(&case.expected),
                "Case# {idx} - '{}'",
                case.input
            );
            assert_eq!(case.expected.to_string(), case.input, "Case# {idx} - display");
        }
    }

    #[test]
    fn rejects_malformed_operations() {
        let malformed = [
            "set",
            "set=1,2",
            "clear=1",
            "resize=4",
            "insert-rows=x",
            "flip=1,1",
            "remove=a,b",
        ];
        for input in malformed {
            assert!(valid_op(input).is_err(), "'{input}' should be rejected");
        }
    }

    #[test]
    fn script_applies_operations_in_order() {
        let script = ["set=0,0,B", "set=1,1,W", "insert-rows=1", "find=W", "resize=3x3"];
        let ops: Vec<BoardOp> = script
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut out: Vec<u8> = Vec::new();
        let board = run_script(&mut out, 2, 2, &ops).unwrap();

        assert_eq!(board.render_with(".", " "), "B . .\n. . .\n. W .");
        assert_eq!(String::from_utf8(out).unwrap(), "find=W: (1, 2)\n");
    }

    #[test]
    fn script_stops_at_the_first_failure() {
        let ops = vec![
            BoardOp::Set {
                row: 0,
                column: 0,
                value: "B".to_string(),
            },
            BoardOp::Set {
                row: 5,
                column: 0,
                value: "W".to_string(),
            },
            BoardOp::Find {
                value: "B".to_string(),
            },
        ];
        let mut out: Vec<u8> = Vec::new();
        let err = run_script(&mut out, 2, 2, &ops).unwrap_err();
        assert!(err.to_string().contains("Step 2"));
        assert!(out.is_empty());
    }

    #[test]
    fn find_of_a_missing_value_fails() {
        let mut board = Matrix::with_size(1, 1).unwrap();
        let op = BoardOp::Find {
            value: "nothing".to_string(),
        };
        assert_eq!(apply_op(&mut board, &op), Err(MatrixError::NotFound));
    }

    #[test]
    fn render_board_appends_the_shape() {
        let mut board = Matrix::with_size(1, 2).unwrap();
        board.set(0, 1, "X".to_string()).unwrap();

        let rendered = render_board_with(&board, &Appearance::default());
        assert_eq!(rendered, ". X\n(1 rows x 2 columns)");

        let appearance = Appearance {
            empty: "+".to_string(),
            separator: "|".to_string(),
        };
        let rendered = render_board_with(&board, &appearance);
        assert_eq!(rendered, "+|X\n(1 rows x 2 columns)");
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        let mut out: Vec<u8> = Vec::new();
        assert!(run_script(&mut out, 0, 3, &[]).is_err());
    }
}
