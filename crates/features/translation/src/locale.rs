//! Locale identifier handling.

/// Reduces a locale to its lower-case language part: `de_DE`, `de-AT` and `DE` all become `de`.
///
/// Only used to locate catalogs; translators keep the locale they were given.
///
/// ```
/// use cpv_translation::normalize_locale;
///
/// assert_eq!(normalize_locale("pt_BR"), "pt");
/// assert_eq!(normalize_locale("en-GB"), "en");
/// assert_eq!(normalize_locale("FR"), "fr");
/// ```
#[must_use]
pub fn normalize_locale(locale: &str) -> String {
    locale.split(['_', '-']).next().unwrap_or_default().to_lowercase()
}
