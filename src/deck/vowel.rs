use crate::audio::{audio_file_name, AudioCategory};
use crate::data::{RenderingClass, VowelFormTable, VowelRow, SOUND_COLUMN};
use crate::extract::{extract_vowel_symbol, is_placeholder_cell, PLACEHOLDER};

use super::{sound_tag, Card};

const LIGHT_PLACEHOLDER: &str = "<span style=\"color:#cccccc\">ก</span>";

fn bold(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<b>{text}</b>")
    }
}

/// Grey out a leading carrier consonant.
pub fn lighten_placeholder(text: &str) -> String {
    match text.strip_prefix(PLACEHOLDER) {
        Some(rest) => format!("{LIGHT_PLACEHOLDER}{rest}"),
        None => text.to_string(),
    }
}

/// The cheat-sheet row as an HTML table, with `highlight` in bold.
///
/// Bold is applied before lightening, so the highlighted cell keeps a dark
/// carrier.
pub fn render_row_table(row: &VowelRow, highlight: RenderingClass) -> String {
    let cells: Vec<String> = (0..5)
        .map(|i| {
            let cell = row.cell(i);
            let cell = if i == highlight.position() {
                bold(cell)
            } else {
                cell.to_string()
            };
            if i == SOUND_COLUMN {
                cell
            } else {
                lighten_placeholder(&cell)
            }
        })
        .collect();

    format!(
        "
<div style='text-align:center'>
<table border='1' cellpadding='3' style='border-collapse:collapse; margin:auto;'>
  <tr><th colspan='2'>SHORT</th><th></th><th colspan='2'>LONG</th></tr>
  <tr><th>Closed</th><th>Open</th><th>Sound</th><th>Closed</th><th>Open</th></tr>
  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>
</table>
</div>
",
        cells[0], cells[1], cells[2], cells[3], cells[4]
    )
}

/// One card per rendering, in row order then rendering-class order.
pub fn build_cards(table: &VowelFormTable) -> Vec<Card> {
    let mut cards = Vec::new();

    for row in table.rows() {
        for class in RenderingClass::ALL {
            let cell = row.rendering(class);
            if is_placeholder_cell(cell) {
                continue;
            }

            let mut back = render_row_table(row, class);
            if let Some(symbol) = extract_vowel_symbol(cell) {
                let file_name = audio_file_name(AudioCategory::Vowel, &symbol.to_string());
                back.push_str(&format!(
                    "<div style='text-align:center; margin-top:6px;'>{}</div>",
                    sound_tag(&file_name)
                ));
            }

            cards.push(Card {
                front: lighten_placeholder(cell),
                back,
            });
        }
    }

    log::debug!("Built {} vowel cards", cards.len());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightens_only_a_leading_carrier() {
        assert_eq!(
            lighten_placeholder("กา-"),
            "<span style=\"color:#cccccc\">ก</span>า-"
        );
        assert_eq!(lighten_placeholder("เกีย"), "เกีย");
        assert_eq!(lighten_placeholder(""), "");
    }

    #[test]
    fn highlighted_cell_is_bold_and_keeps_dark_carrier() {
        let row = VowelRow::new(["กิ-", "กิ", "ee", "กี-", "กี"]);
        let html = render_row_table(&row, RenderingClass::LongClosed);
        assert!(html.contains("<td><b>กี-</b></td>"));
        assert!(html.contains("<td><span style=\"color:#cccccc\">ก</span>ิ-</td>"));
        assert!(html.contains("<td>ee</td>"));
        assert!(html.starts_with("\n<div style='text-align:center'>"));
        assert!(html.ends_with("</table>\n</div>\n"));
    }

    #[test]
    fn one_card_per_rendering_skipping_empty_cells() {
        let table = VowelFormTable::from_rows(vec![
            VowelRow::new(["", "โกะ", "oh", "โก-", "โก"]),
            VowelRow::new(["-", "", "x", "", ""]),
        ])
        .unwrap();
        let cards = build_cards(&table);
        let fronts: Vec<&str> = cards.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["โกะ", "โก-", "โก"]);
        assert!(cards[0]
            .back
            .ends_with("<div style='text-align:center; margin-top:6px;'>[sound:cheat_sheet_vowel_โ.mp3]</div>"));
    }

    #[test]
    fn sound_column_never_becomes_a_card() {
        let table = VowelFormTable::from_rows(vec![VowelRow::new(["", "", "กา", "", ""])]).unwrap();
        assert!(build_cards(&table).is_empty());
    }

    #[test]
    fn builtin_deck_size() {
        let cards = build_cards(&VowelFormTable::builtin());
        assert_eq!(cards.len(), 74);
        assert_eq!(cards[0].front, "<span style=\"color:#cccccc\">ก</span>็-");
        assert!(cards[0].back.contains("[sound:cheat_sheet_vowel_็.mp3]"));
    }
}
