use serde::Deserialize;

use crate::matrix::{EMPTY_GLYPH, SEPARATOR};

/// Represents the `[appearance]` table of the `config.toml` file.
///
/// The `[appearance]` table holds how boards are printed.
///
/// The default values (if no config exists):
/// ```toml
/// [appearance]
/// empty = "."
/// separator = " "
/// ```
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Appearance {
    /// Drawn for slots that hold no value.
    #[serde(default = "default_empty")]
    pub empty: String,
    /// Drawn between two slots of a row.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_empty() -> String {
    EMPTY_GLYPH.to_string()
}

fn default_separator() -> String {
    SEPARATOR.to_string()
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            empty: default_empty(),
            separator: default_separator(),
        }
    }
}
