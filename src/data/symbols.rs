use std::collections::HashMap;
use std::hash::Hash;

use crate::data::{RenderingClass, VowelFormTable};
use crate::extract::{extract_vowel_symbol, is_dash, is_placeholder_cell, strip_placeholder_markup};
use crate::VowelSymbol;

/// First rendering seen for a vowel symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: VowelSymbol,
    /// Cell the symbol was first extracted from.
    pub rendering: String,
    /// Romanized sound of the row that cell belongs to.
    pub sound: String,
    pub row: usize,
}

/// A later rendering whose symbol was already taken by another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolConflict {
    pub symbol: VowelSymbol,
    pub kept: String,
    pub ignored: String,
}

/// Vowel symbols in first-seen order, keyed for audio and sound tags.
///
/// Several renderings share a symbol (every `เ…` form maps to `เ`). The first
/// one in row order wins; the others are reported as conflicts instead of
/// silently overwriting it.
#[derive(Debug, Default)]
pub struct VowelSymbolIndex {
    entries: Vec<SymbolEntry>,
    by_symbol: HashMap<VowelSymbol, usize>,
    conflicts: Vec<SymbolConflict>,
}

impl VowelSymbolIndex {
    pub fn build(table: &VowelFormTable) -> Self {
        let mut index = Self::default();

        for (row_idx, row) in table.rows().iter().enumerate() {
            for class in RenderingClass::ALL {
                let cell = row.rendering(class);
                if is_placeholder_cell(cell) {
                    continue;
                }
                let Some(symbol) = extract_vowel_symbol(cell) else {
                    continue;
                };

                match index.by_symbol.get(&symbol) {
                    Some(&existing) => {
                        let kept = &index.entries[existing].rendering;
                        if kept != cell {
                            index.conflicts.push(SymbolConflict {
                                symbol,
                                kept: kept.clone(),
                                ignored: cell.to_string(),
                            });
                        }
                    }
                    None => {
                        index.by_symbol.insert(symbol, index.entries.len());
                        index.entries.push(SymbolEntry {
                            symbol,
                            rendering: cell.to_string(),
                            sound: row.sound().to_string(),
                            row: row_idx,
                        });
                    }
                }
            }
        }

        for conflict in &index.conflicts {
            log::debug!(
                "Vowel symbol '{}' already keyed by {:?}; {:?} shares it",
                conflict.symbol,
                conflict.kept,
                conflict.ignored
            );
        }
        if !index.conflicts.is_empty() {
            log::info!(
                "{} renderings share a vowel symbol with an earlier rendering",
                index.conflicts.len()
            );
        }

        index
    }

    pub fn get(&self, symbol: VowelSymbol) -> Option<&SymbolEntry> {
        self.by_symbol.get(&symbol).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn conflicts(&self) -> &[SymbolConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text handed to the synthesizer for a rendering.
///
/// The carrier consonant stays so the syllable is pronounceable; markup and
/// dashes go.
pub fn spoken_text(cell: &str) -> String {
    strip_placeholder_markup(cell)
        .trim_matches(|c: char| is_dash(c) || c.is_whitespace())
        .to_string()
}

/// Keys that occur more than once, in order of their second occurrence.
pub fn find_duplicate_keys<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashMap::new();
    let mut duplicates = Vec::new();
    for key in keys {
        let count = seen.entry(key.clone()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            duplicates.push(key);
        }
    }
    duplicates
}
