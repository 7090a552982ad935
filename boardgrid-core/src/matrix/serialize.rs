//! A matrix is stored as a list of rows, each a list of nullable values:
//!
//! ```json
//! [["B", null], [null, "W"]]
//! ```
//!
//! Ragged input is rejected when deserializing.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use super::{Matrix, MatrixError, Row};

impl<T: Serialize> Serialize for Row<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Row<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Option<T>>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Row<T>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(D::Error::custom)
    }
}

impl<T> TryFrom<Vec<Vec<Option<T>>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<Option<T>>>) -> Result<Self, Self::Error> {
        Self::from_rows(value.into_iter().map(Row::from).collect())
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<Option<T>>> {
    fn from(value: Matrix<T>) -> Self {
        value.into_iter().map(Vec::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_rows_of_nullable_values() {
        let mut board = Matrix::with_size(2, 2).unwrap();
        board.set(0, 0, "B").unwrap().set(1, 1, "W").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["B",null],[null,"W"]]"#);
    }

    #[test]
    fn deserializes_rectangular_input() {
        let board: Matrix<u8> = serde_json::from_str("[[1,null,3],[null,5,null]]").unwrap();
        assert_eq!(board.row_count(), 2);
        assert_eq!(board.column_count(), 3);
        assert_eq!(board.get(0, 2).unwrap(), Some(&3));
        assert_eq!(board.get(1, 0).unwrap(), None);
    }

    #[test]
    fn rejects_ragged_input() {
        let err = serde_json::from_str::<Matrix<u8>>("[[1,2],[3]]").unwrap_err();
        assert!(err.to_string().contains("Rows must all have the same length"));
    }

    #[test]
    fn try_from_nested_vecs() {
        let board = Matrix::try_from(vec![vec![Some('a')], vec![None]]).unwrap();
        assert_eq!(board.row_count(), 2);
        assert_eq!(board.column_count(), 1);

        let ragged = Matrix::try_from(vec![vec![Some('a')], vec![]]);
        assert!(matches!(ragged, Err(MatrixError::InvalidDimension { .. })));
    }

    #[test]
    fn into_nested_vecs_keeps_row_order() {
        let mut board = Matrix::with_size(2, 2).unwrap();
        board.set(0, 1, 'b').unwrap().set(1, 0, 'w').unwrap();

        let nested: Vec<Vec<Option<char>>> = board.into();
        assert_eq!(nested, vec![vec![None, Some('b')], vec![Some('w'), None]]);
    }
}
