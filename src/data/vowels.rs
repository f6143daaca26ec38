/// Columns: short closed, short open, sound, long closed, long open.
///
/// Rows are kept exactly as charted, including the shifted `ไก` row and the
/// six-cell `เกิ-` row.
pub(crate) const VOWEL_ROWS: &[&[&str]] = &[
    &["ก็-", "กะ", "aa/ah", "กา-", "กา"],
    &["แก็-", "แกะ", "ae", "แก-", "แก"],
    &["ก็อ-", "เกาะ", "aaw", "กอ-", "กอ"],
    &["เก็-", "เกะ", "eh/ey", "เก-", "เก"],
    &["เกิ-", "เกอะ", "erh/uuhr", "เกิ-", "เกิ-", "เก"],
    &["", "โกะ", "oh", "โก-", "โก"],
    &["กิ-", "กิ", "ee", "กี-", "กี"],
    &["กึ-", "กึ", "eu", "กื", "กึอ"],
    &["กุ-", "กุ", "oo", "กู-", "กู"],
    &["", "เกียะ", "ia", "เกีย-", "เกีย"],
    &["", "เกือะ", "eua", "เกือ-", "เกือ"],
    &["", "กัวะ", "ua", "กว-", "กัว"],
    &["", "ไก", "", "ai", "ไก-", ""],
    &["ใก", "", "ai", "กาย", ""],
    &["กัย", "", "ai", "", ""],
    &["ไกย", "", "ai", "", ""],
    &["ก็อย", "", "aawy", "กอย", ""],
    &["", "", "eeuy", "เกย", ""],
    &["", "", "oy/ohy", "โกย", ""],
    &["กุ", "", "uy/ui", "", ""],
    &["", "", "euuay", "เกือย", ""],
    &["กวย", "", "uay", "กวาย", ""],
    &["เกา", "", "ao", "กาว", ""],
    &["แก็ว", "", "aeo", "แกว", ""],
    &["", "", "uaaw", "เกอว", ""],
    &["เก็ว", "", "ayo", "เกว", ""],
    &["กิว", "", "iu", "", ""],
    &["", "", "iaao", "เกียว", ""],
    &["กํา", "", "ahm", "กํา", ""],
    &["ฤ-", "ฤ", "rue", "", ""],
    &["ฤ-", "", "ri/reer", "ฤ-", ""],
];
