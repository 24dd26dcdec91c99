//! Unit synonyms and their canonical short forms.

/// Long-form spellings and the canonical unit each one maps to.
const SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// The closed set of canonical units.
pub const CANONICAL_UNITS: &[&str] = &["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

pub struct UnitTable;

impl UnitTable {
    /// Canonical form of `word`, if it is a known unit or unit synonym
    pub fn canonical(word: &str) -> Option<&'static str> {
        synonym(word).or_else(|| CANONICAL_UNITS.iter().copied().find(|unit| *unit == word))
    }

    /// Whether `token` is one of the canonical units
    pub fn is_unit(token: &str) -> bool {
        CANONICAL_UNITS.contains(&token)
    }

    /// Replace every whole-word unit synonym in `text` with its canonical form
    ///
    /// Words that are not synonyms are passed through untouched, so this is
    /// idempotent.
    pub fn normalize(text: &str) -> String {
        text.split_whitespace()
            .map(|word| synonym(word).unwrap_or(word))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

fn synonym(word: &str) -> Option<&'static str> {
    SYNONYMS
        .iter()
        .find(|(long, _)| *long == word)
        .map(|(_, short)| *short)
}
