use std::fmt;

use serde::{Deserialize, Serialize};

/// Tone class of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsonantClass {
    Low,
    Mid,
    High,
}

impl fmt::Display for ConsonantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsonantClass::Low => "Low",
            ConsonantClass::Mid => "Mid",
            ConsonantClass::High => "High",
        };
        f.write_str(name)
    }
}

/// One consonant card worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consonant {
    pub glyph: &'static str,
    /// Letter name, e.g. `กอ ไก่`. This is what gets spoken.
    pub name: &'static str,
    /// Paiboon-style transcription with tone markers.
    pub transcription: &'static str,
    pub class: ConsonantClass,
    pub initial_sound: &'static str,
    pub final_sound: &'static str,
    pub meaning: &'static str,
    pub notes: &'static str,
}

const fn c(
    glyph: &'static str,
    name: &'static str,
    transcription: &'static str,
    class: ConsonantClass,
    initial_sound: &'static str,
    final_sound: &'static str,
    meaning: &'static str,
    notes: &'static str,
) -> Consonant {
    Consonant {
        glyph,
        name,
        transcription,
        class,
        initial_sound,
        final_sound,
        meaning,
        notes,
    }
}

use ConsonantClass::{High, Low, Mid};

const CONSONANTS: &[Consonant] = &[
    c("ค", "คอ ควาย", "khaawᴹ khwaaiᴹ", Low, "kh-", "-k", "buffalo", "Low-class consonant."),
    c("ฅ", "ฅอ คน", "khaawᴹ khohnᴹ", Low, "kh-", "-k", "person", "Rare/obsolete. Low-class consonant."),
    c("ฆ", "ฆอ ระฆัง", "khaawᴹ raᴴ kangᴹ", Low, "kh-", "-k", "bell", "Low-class consonant."),
    c("ง", "งอ งู", "ngaawᴹ nguuᴹ", Low, "ng-", "-ng", "snake", "Low-class consonant."),
    c("ช", "ชอ ช้าง", "chaawᴹ changᴴ", Low, "ch-", "-t", "elephant", "Low-class consonant."),
    c("ซ", "ซอ โซ่", "saawᴹ sohᶠ", Low, "s-", "-t", "chain", "Low-class consonant."),
    c("ฌ", "ฌอ เฌอ", "chaawᴹ chuuhrᴹ", Low, "ch-", "-t", "tree", "Low-class consonant."),
    c("ญ", "ญอ หญิง", "yaawᴹ yingᴿ", Low, "y-", "-n", "woman", "Low-class consonant."),
    c("ฑ", "ฑอ มณโฑ", "thaawᴹ mohnᴹ thohᴹ", Low, "th-", "-t", "Mandodari", "Low-class consonant."),
    c("ฒ", "ฒอ ผู้เฒ่า", "thaawᴹ phuuᶠ thaoᶠ", Low, "th-", "-t", "elder", "Low-class consonant."),
    c("ณ", "ณอ เณร", "naawᴹ naehnᴹ", Low, "n-", "-n", "novice monk", "Low-class consonant."),
    c("ท", "ทอ ทหาร", "thaawᴹ tha-haanᴿ", Low, "th-", "-t", "soldier", "Low-class consonant."),
    c("ธ", "ธอ ธง", "thaawᴹ thongᴹ", Low, "th-", "-t", "flag", "Low-class consonant."),
    c("น", "นอ หนู", "naawᴹ nuuᴿ", Low, "n-", "-n", "mouse", "Low-class consonant."),
    c("พ", "พอ พาน", "phaawᴹ phaanᴹ", Low, "ph-", "-p", "tray", "Low-class consonant."),
    c("ฟ", "ฟอ ฟัน", "faawᴹ fanᴹ", Low, "f-", "-p", "teeth", "Low-class consonant."),
    c("ภ", "ภอ สำเภา", "phaawᴹ samᴿ paoᴹ", Low, "ph-", "-p", "junk", "Low-class consonant."),
    c("ม", "มอ ม้า", "maawᴹ maaᴴ", Low, "m-", "-m", "horse", "Low-class consonant."),
    c("ย", "ยอ ยักษ์", "yaawᴹ yakᴴ", Low, "y-", "-n", "giant", "Low-class consonant."),
    c("ร", "รอ เรือ", "raawᴹ reuuaᴹ", Low, "r-", "-n", "boat", "Low-class consonant."),
    c("ล", "ลอ ลิง", "laawᴹ lingᴹ", Low, "l-", "-n", "monkey", "Low-class consonant."),
    c("ว", "วอ แหวน", "waawᴹ waaenᴿ", Low, "w-", "-n", "ring", "Low-class consonant."),
    c("ฬ", "ฬอ จุฬา", "laawᴹ jooᴸ laaᴹ", Low, "l-", "-n", "kite", "Low-class consonant."),
    c("ฮ", "ฮอ นกฮูก", "haawᴹ nohkᴴ huukᶠ", Low, "h-", "-k", "owl", "Low-class consonant."),
    c("ก", "กอ ไก่", "gaawᴹ gaiᴸ", Mid, "g-", "-k", "chicken", "Mid-class consonant."),
    c("จ", "จอ จาน", "jaawᴹ jaanᴹ", Mid, "j-", "-n", "plate", "Mid-class consonant."),
    c("ฎ", "ฎอ ชฎา", "daawᴹ cha-daaᴹ", Mid, "d-", "-n", "headdress", "Mid-class consonant."),
    c("ฏ", "ฏอ ปฏัก", "dtaawᴹ bpaᴸ dtakᴸ", Mid, "dt-", "-k", "goad", "Mid-class consonant."),
    c("ด", "ดอ เด็ก", "daawᴹ dekᴸ", Mid, "d-", "-k", "child", "Mid-class consonant."),
    c("ต", "ตอ เต่า", "dtaawᴹ dtaoᴸ", Mid, "dt-", "-k", "turtle", "Mid-class consonant."),
    c("บ", "บอ ใบไม้", "baawᴹ baiᴹ maiᴴ", Mid, "b-", "-p", "leaf", "Mid-class consonant."),
    c("ป", "ปอ ปลา", "bpaawᴹ bplaaᴹ", Mid, "bp-", "-p", "fish", "Mid-class consonant."),
    c("อ", "ออ อ่าง", "aawᴹ aangᴹ", Mid, "ʔ-", "-", "basin", "Mid-class consonant."),
    c("ข", "ขอ ไข่", "khaawᴿ khaiᴸ", High, "kh-", "-k", "egg", "High-class consonant."),
    c("ฃ", "ฃอ ขวด", "khaawᴿ khuaatᴸ", High, "kh-", "-k", "bottle", "Rare/obsolete. High-class consonant."),
    c("ฉ", "ฉอ ฉิ่ง", "chaawᴿ chingᴸ", High, "ch-", "-", "cymbals", "High-class consonant."),
    c("ฐ", "ฐอ ฐาน", "thaawᴿ thaanᴿ", High, "th-", "-t", "base", "High-class consonant."),
    c("ถ", "ถอ ถุง", "thaawᴿ thoongᴿ", High, "th-", "-t", "bag", "High-class consonant."),
    c("ผ", "ผอ ผึ้ง", "phaawᴿ pheungᶠ", High, "ph-", "-", "bee", "High-class consonant."),
    c("ฝ", "ฝอ ฝา", "faawᴿ faaᴿ", High, "f-", "-", "lid", "High-class consonant."),
    c("ศ", "ศอ ศาลา", "saawᴿ saaᴿ laaᴹ", High, "s-", "-t", "pavilion", "High-class consonant."),
    c("ษ", "ษอ ฤาษี", "saawᴿ reuuᴹ seeᴿ", High, "s-", "-t", "hermit", "High-class consonant."),
    c("ส", "สอ เสือ", "saawᴿ seuuaᴿ", High, "s-", "-t", "tiger", "High-class consonant."),
    c("ห", "หอ หีบ", "haawᴿ heepᴸ", High, "h-", "-", "box", "High-class consonant."),
];

/// All 44 consonants, grouped Low, Mid, High.
pub fn builtin_consonants() -> &'static [Consonant] {
    CONSONANTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::find_duplicate_keys;
    use crate::extract::is_consonant;

    #[test]
    fn covers_every_consonant_once() {
        let consonants = builtin_consonants();
        assert_eq!(consonants.len(), 44);
        assert!(find_duplicate_keys(consonants.iter().map(|c| c.glyph)).is_empty());
        for c in consonants {
            let mut chars = c.glyph.chars();
            let ch = chars.next().unwrap();
            assert!(chars.next().is_none());
            assert!(is_consonant(ch), "{} is not in the consonant set", c.glyph);
        }
    }

    #[test]
    fn names_start_with_their_glyph() {
        for c in builtin_consonants() {
            assert!(c.name.starts_with(c.glyph), "{} / {}", c.glyph, c.name);
        }
    }

    #[test]
    fn class_counts() {
        let count = |class| builtin_consonants().iter().filter(|c| c.class == class).count();
        assert_eq!(count(ConsonantClass::Low), 24);
        assert_eq!(count(ConsonantClass::Mid), 9);
        assert_eq!(count(ConsonantClass::High), 11);
    }
}
