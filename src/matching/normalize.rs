use unicode_normalization::UnicodeNormalization;

/// Lowercase, NFD, drop combining diacritics, trim.
pub fn normalize(s: Option<&str>) -> String {
    let lower = s.unwrap_or_default().to_lowercase();
    let stripped: String = lower.nfd().filter(|c| !is_diacritic(*c)).collect();
    stripped.trim().to_string()
}

// Combining Diacritical Marks block only.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
