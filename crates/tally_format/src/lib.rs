//! tally_format
//!
//! Display formatting for animated counter values: digit grouping with
//! locale-appropriate separators, percentages, and compact suffixes.
//!
//! The animation engine delivers plain `i64` values; these adapters turn
//! them into display strings. They hold no state and do no I/O.

pub mod locale;

use locale::thousands_separator;

/// Group the digits of `value` with the thousands separator for `locale`.
///
/// The sign is kept in front of the grouped magnitude.
pub fn group_digits(value: i64, locale: &str) -> String {
    let sep = thousands_separator(locale);
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + (digits.len() / 3) * sep.len() + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}

/// Host-default grouping (en-US).
pub fn format_number(value: i64) -> String {
    group_digits(value, "en-US")
}

/// Percentage display. Percentages are bounded, so no grouping is applied.
pub fn format_percentage(value: i64) -> String {
    format!("{value}%")
}

/// Compact suffix form for large counters.
pub fn format_compact(value: i64) -> String {
    let v = value as f64;
    let abs = v.abs();
    if abs >= 1_000_000_000.0 {
        return format_with_suffix(v / 1_000_000_000.0, "B");
    }
    if abs >= 1_000_000.0 {
        return format_with_suffix(v / 1_000_000.0, "M");
    }
    if abs >= 1_000.0 {
        return format_with_suffix(v / 1_000.0, "K");
    }
    value.to_string()
}

fn format_with_suffix(value: f64, suffix: &str) -> String {
    format!("{}{}", trim_trailing_zeroes(format!("{value:.2}")), suffix)
}

fn trim_trailing_zeroes(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.len() == dot + 1 {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_digits_with_the_host_default_separator() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
    }

    #[test]
    fn grouping_respects_the_locale_separator() {
        assert_eq!(group_digits(1_234_567, "de-DE"), "1.234.567");
        assert_eq!(group_digits(1_234_567, "fr-FR"), "1\u{202f}234\u{202f}567");
        assert_eq!(group_digits(1_234_567, "de-CH"), "1\u{2019}234\u{2019}567");
    }

    #[test]
    fn negative_values_keep_the_sign_in_front() {
        assert_eq!(format_number(-1_234_567), "-1,234,567");
        assert_eq!(group_digits(-1_000, "de"), "-1.000");
    }

    #[test]
    fn extreme_magnitudes_group_cleanly() {
        assert_eq!(
            format_number(i64::MIN),
            "-9,223,372,036,854,775,808"
        );
    }

    #[test]
    fn percentages_take_a_bare_suffix() {
        assert_eq!(format_percentage(42), "42%");
        assert_eq!(format_percentage(0), "0%");
        assert_eq!(format_percentage(-3), "-3%");
    }

    #[test]
    fn compact_uses_suffixes() {
        assert_eq!(format_compact(12_400), "12.4K");
        assert_eq!(format_compact(2_000_000), "2M");
        assert_eq!(format_compact(1_300_000_000), "1.3B");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn compact_keeps_useful_precision_for_close_values() {
        assert_eq!(format_compact(1_210), "1.21K");
        assert_eq!(format_compact(1_290), "1.29K");
    }
}
