//! Abbreviation rewriting for the final output text.

/// Full term -> abbreviation, applied in this order
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Lymphocyte", "Lym"),
    ("Monocyte", "Mono"),
    ("Eosinophil", "Eos"),
    ("Basophil", "Baso"),
    ("Platelet", "PLT"),
    ("Creatinine", "Cr"),
    ("K mmol/L", "K"),
    ("estimated Ccr(MDRD)", "eCcr(MDRD)"),
];

/// Apply the built-in abbreviation table
pub fn apply_abbreviations(text: &str) -> String {
    apply_with(text, ABBREVIATIONS)
}

/// Apply each pair globally, in order, as plain substring replacement.
///
/// Each pair sees the text produced by the previous ones, so the result is
/// not idempotent when a replacement creates a new occurrence of a full term.
pub fn apply_with(text: &str, table: &[(&str, &str)]) -> String {
    table.iter().fold(text.to_string(), |acc, &(full, abbr)| acc.replace(full, abbr))
}
