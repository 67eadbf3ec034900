// crates/cli/src/parsers.rs
use icu_locale_core::Locale;

/// Parses a BCP 47 locale tag such as `en`, `de-DE` or `sv-u-co-trad`.
///
/// # Errors
///
/// Returns a message naming the tag when it is not well formed.
pub fn parse_locale(s: &str) -> Result<Locale, String> {
    s.trim()
        .parse::<Locale>()
        .map_err(|e| format!("Invalid locale `{s}`: {e}"))
}
