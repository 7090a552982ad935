use serde::{Deserialize, Deserializer, de::Error};

/// Represents the `[board]` table of the `config.toml` file.
///
/// The `[board]` table holds the shape of a freshly created board.
///
/// The default values (if no config exists) are an Othello board:
/// ```toml
/// [board]
/// rows = 8
/// columns = 8
/// ```
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Board {
    #[serde(default = "default_dimension")]
    #[serde(deserialize_with = "validate_rows")]
    pub rows: usize,
    #[serde(default = "default_dimension")]
    #[serde(deserialize_with = "validate_columns")]
    pub columns: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: default_dimension(),
            columns: default_dimension(),
        }
    }
}

const fn default_dimension() -> usize {
    8
}

fn validate_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    validate_dimension(deserializer, "rows")
}

fn validate_columns<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    validate_dimension(deserializer, "columns")
}

/// Accepts any positive TOML integer that fits in an `isize`.
///
/// The error names the rejected `[board]` key.
fn validate_dimension<'de, D>(deserializer: D, key: &str) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    usize::try_from(value)
        .ok()
        .filter(|&dimension| dimension > 0 && isize::try_from(dimension).is_ok())
        .ok_or_else(|| {
            D::Error::custom(format!(
                "`board.{key}` cannot be {value}, Board dimensions must be positive numbers"
            ))
        })
}
