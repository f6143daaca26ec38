//! Shared data tables for both decks.
//!
//! The built-in tables are the cheat-sheet literals. A vowel table can also be
//! loaded from JSON, as a list of rows where each row is a list of cells:
//!
//! ```json
//! [["ก็-", "กะ", "aa/ah", "กา-", "กา"], ["แก็-", "แกะ", "ae", "แก-", "แก"]]
//! ```

pub mod consonants;
pub mod symbols;
mod vowels;

pub use consonants::{builtin_consonants, Consonant, ConsonantClass};
pub use symbols::{
    find_duplicate_keys, spoken_text, SymbolConflict, SymbolEntry, VowelSymbolIndex,
};

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extract::is_placeholder_cell;
use crate::DeckError;

/// Position of the romanized sound column in a row.
pub const SOUND_COLUMN: usize = 2;

/// Structural position of a rendering within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingClass {
    ShortClosed,
    ShortOpen,
    LongClosed,
    LongOpen,
}

impl RenderingClass {
    /// All classes in row order.
    pub const ALL: [RenderingClass; 4] = [
        RenderingClass::ShortClosed,
        RenderingClass::ShortOpen,
        RenderingClass::LongClosed,
        RenderingClass::LongOpen,
    ];

    /// Cell index of this class within a row.
    pub fn position(&self) -> usize {
        match self {
            RenderingClass::ShortClosed => 0,
            RenderingClass::ShortOpen => 1,
            RenderingClass::LongClosed => 3,
            RenderingClass::LongOpen => 4,
        }
    }
}

/// One vowel: its renderings and romanized sound, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VowelRow {
    cells: Vec<String>,
}

impl VowelRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Every cell, including any trailing legacy cell past the fifth.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell at `idx`, or `""` when the row is shorter.
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn rendering(&self, class: RenderingClass) -> &str {
        self.cell(class.position())
    }

    pub fn sound(&self) -> &str {
        self.cell(SOUND_COLUMN)
    }
}

/// Ordered vowel form table. Row and cell order are significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VowelFormTable {
    rows: Vec<VowelRow>,
}

impl VowelFormTable {
    /// The built-in cheat-sheet table.
    pub fn builtin() -> Self {
        Self {
            rows: vowels::VOWEL_ROWS
                .iter()
                .map(|row| VowelRow::new(row.iter().copied()))
                .collect(),
        }
    }

    pub fn from_rows(rows: Vec<VowelRow>) -> Result<Self, DeckError> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a JSON file.
    ///
    /// A missing file or a malformed table aborts the run.
    pub fn from_json_path(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeckError::Table(format!("Failed to read {}: {e}", path.display()))
        })?;
        let table = Self::from_json_str(&content)?;
        log::info!(
            "Loaded vowel table with {} rows from {}",
            table.rows.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DeckError> {
        let table: Self = serde_json::from_str(content)
            .map_err(|e| DeckError::Table(format!("Failed to parse JSON: {e}")))?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.rows.is_empty() {
            return Err(DeckError::Table("table has no rows".to_string()));
        }
        if let Some(idx) = self.rows.iter().position(|r| r.cells.is_empty()) {
            return Err(DeckError::Table(format!("row {idx} has no cells")));
        }
        Ok(())
    }

    pub fn rows(&self) -> &[VowelRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every distinct rendering outside the sound column, sorted.
    pub fn unique_cells(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.cells
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != SOUND_COLUMN)
                    .map(|(_, cell)| cell.as_str())
            })
            .filter(|cell| !is_placeholder_cell(cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_table_keeps_row_order() {
        let table = VowelFormTable::builtin();
        assert_eq!(table.len(), 31);
        assert_eq!(table.rows()[0].cell(0), "ก็-");
        assert_eq!(table.rows()[0].sound(), "aa/ah");
        assert_eq!(table.rows()[30].rendering(RenderingClass::LongClosed), "ฤ-");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let row = VowelRow::new(["กิ-"]);
        assert_eq!(row.rendering(RenderingClass::LongOpen), "");
        assert_eq!(row.sound(), "");
    }

    #[test]
    fn unique_cells_skip_sound_column_and_empty_cells() {
        let table = VowelFormTable::from_rows(vec![
            VowelRow::new(["กิ-", "กิ", "ee", "กี-", "กี"]),
            VowelRow::new(["", "กิ", "ee", "-", "กี"]),
        ])
        .unwrap();
        let cells: Vec<&str> = table.unique_cells().into_iter().collect();
        assert_eq!(cells, vec!["กิ", "กิ-", "กี", "กี-"]);
    }

    #[test]
    fn unique_cells_include_trailing_legacy_cell() {
        let table = VowelFormTable::builtin();
        assert!(table.unique_cells().contains("เก"));
    }

    #[test]
    fn loads_table_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["กุ-", "กุ", "oo", "กู-", "กู"]]"#).unwrap();

        let table = VowelFormTable::from_json_path(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].sound(), "oo");
    }

    #[test]
    fn missing_table_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VowelFormTable::from_json_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DeckError::Table(_)));
    }

    #[test]
    fn rejects_malformed_tables() {
        assert!(VowelFormTable::from_json_str("{}").is_err());
        assert!(VowelFormTable::from_json_str("[]").is_err());
        assert!(VowelFormTable::from_json_str(r#"[["กา"], []]"#).is_err());
    }
}
