//! Locale resolution for digit grouping
//!
//! Grouping separators vary by locale. Lookup normalizes the tag and walks a
//! fallback chain (`de-DE` -> `de` -> default) so region-specific tags still
//! resolve when only the language is known.

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (hosts often report `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create a fallback chain for separator lookup.
///
/// Example:
/// - `de-DE` -> `["de-DE", "de", "en-US"]`
/// - `en-US` -> `["en-US", "en", "en-US"]` (deduped to `["en-US", "en"]`)
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    // Hard fallback: English.
    chain.push("en-US".to_string());

    // Dedup, preserve order.
    let mut out = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for x in chain {
        if seen.insert(x.clone()) {
            out.push(x);
        }
    }
    out
}

/// Thousands separator for a locale tag, resolved through the fallback
/// chain. Unknown tags fall back to `,`.
pub fn thousands_separator(locale: &str) -> &'static str {
    for tag in locale_fallback_chain(locale) {
        if let Some(sep) = separator_for(&tag) {
            return sep;
        }
    }
    ","
}

fn separator_for(tag: &str) -> Option<&'static str> {
    // Region-specific conventions take precedence over the language default.
    match tag {
        "de-CH" | "fr-CH" | "it-CH" => return Some("\u{2019}"),
        _ => {}
    }

    let lang = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();
    match lang.as_str() {
        "en" | "ja" | "ko" | "zh" | "he" | "th" => Some(","),
        "de" | "it" | "es" | "pt" | "id" | "tr" | "nl" | "da" | "el" => Some("."),
        // Narrow no-break space per CLDR.
        "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "uk" => Some("\u{202f}"),
        _ => None,
    }
}
