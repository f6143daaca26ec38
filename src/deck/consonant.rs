use crate::audio::{audio_file_name, AudioCategory};
use crate::data::Consonant;

use super::{sound_tag, Card};

const CENTERED: &str = "<td colspan='2' style='text-align: center; padding: 0.7em;'>";

fn centered_row(content: &str) -> String {
    format!("<tr>{CENTERED}{content}</td></tr>")
}

fn labelled_row(label: &str, value: &str, half_width: bool) -> String {
    let width = if half_width { " width: 50%;" } else { "" };
    format!(
        "<tr>\
         <td style='text-align: right; padding: 0.7em;{width}'>{label}:</td>\
         <td style='text-align: left; padding: 0.7em;{width}'><b>{value}</b></td>\
         </tr>"
    )
}

/// HTML back side for one consonant.
pub fn render_back(consonant: &Consonant) -> String {
    let file_name = audio_file_name(AudioCategory::Consonant, consonant.glyph);
    let class = consonant.class.to_string();

    let mut html =
        String::from("<table style='margin: auto; border-collapse: collapse; text-align: center;'>");
    html.push_str(&centered_row(consonant.name));
    html.push_str(&centered_row(consonant.transcription));
    html.push_str(&labelled_row("Class", &class, true));
    html.push_str(&labelled_row("Initial Sound", consonant.initial_sound, false));
    html.push_str(&labelled_row("Final Sound", consonant.final_sound, false));
    html.push_str(&labelled_row("Meaning", consonant.meaning, false));
    html.push_str(&centered_row(&sound_tag(&file_name)));
    html.push_str(&centered_row(consonant.notes));
    html.push_str("</table>");
    html
}

pub fn build_cards(consonants: &[Consonant]) -> Vec<Card> {
    consonants
        .iter()
        .map(|c| Card {
            front: c.glyph.to_string(),
            back: render_back(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_consonants;

    #[test]
    fn back_matches_card_layout() {
        let chicken = builtin_consonants()
            .iter()
            .find(|c| c.glyph == "ก")
            .unwrap();
        let expected = concat!(
            "<table style='margin: auto; border-collapse: collapse; text-align: center;'>",
            "<tr><td colspan='2' style='text-align: center; padding: 0.7em;'>กอ ไก่</td></tr>",
            "<tr><td colspan='2' style='text-align: center; padding: 0.7em;'>gaawᴹ gaiᴸ</td></tr>",
            "<tr>",
            "<td style='text-align: right; padding: 0.7em; width: 50%;'>Class:</td>",
            "<td style='text-align: left; padding: 0.7em; width: 50%;'><b>Mid</b></td>",
            "</tr>",
            "<tr>",
            "<td style='text-align: right; padding: 0.7em;'>Initial Sound:</td>",
            "<td style='text-align: left; padding: 0.7em;'><b>g-</b></td>",
            "</tr>",
            "<tr>",
            "<td style='text-align: right; padding: 0.7em;'>Final Sound:</td>",
            "<td style='text-align: left; padding: 0.7em;'><b>-k</b></td>",
            "</tr>",
            "<tr>",
            "<td style='text-align: right; padding: 0.7em;'>Meaning:</td>",
            "<td style='text-align: left; padding: 0.7em;'><b>chicken</b></td>",
            "</tr>",
            "<tr><td colspan='2' style='text-align: center; padding: 0.7em;'>[sound:cheat_sheet_consonant_ก.mp3]</td></tr>",
            "<tr><td colspan='2' style='text-align: center; padding: 0.7em;'>Mid-class consonant.</td></tr>",
            "</table>",
        );
        assert_eq!(render_back(chicken), expected);
    }

    #[test]
    fn one_card_per_consonant_in_table_order() {
        let cards = build_cards(builtin_consonants());
        assert_eq!(cards.len(), 44);
        assert_eq!(cards[0].front, "ค");
        assert_eq!(cards[43].front, "ห");
        assert!(cards.iter().all(|c| !c.back.contains('\n')));
    }
}
