//! Resolution of the user's collation locale.
//!
//! POSIX systems name locales like `en_US.UTF-8` or `sv_SE@euro`, while ICU
//! expects BCP-47 tags such as `en-US`. The helpers here bridge the two.

use icu_locid::Locale;

use crate::error::{CoreError, CoreResult};

/// Environment variables consulted for the collation locale, highest
/// precedence first.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_COLLATE", "LANG"];

/// Parses a POSIX or BCP-47 locale name.
///
/// The codeset (`.UTF-8`) and modifier (`@euro`) are dropped and `_` becomes
/// `-`. `C`, `POSIX` and the empty string map to the root locale.
///
/// # Errors
///
/// [`CoreError::InvalidLocale`] if what remains is not a valid locale tag.
///
/// # Examples
///
/// ```
/// use finsort_core::collate::parse_posix_locale;
///
/// let locale = parse_posix_locale("en_US.UTF-8").unwrap();
/// assert_eq!(locale.to_string(), "en-US");
/// ```
pub fn parse_posix_locale(name: &str) -> CoreResult<Locale> {
    let base = name
        .trim()
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return Ok(Locale::UND);
    }

    base.replace('_', "-")
        .parse::<Locale>()
        .map_err(|_| CoreError::InvalidLocale(name.to_string()))
}

/// Resolves the collation locale from variables returned by `lookup`.
///
/// The first non-empty variable in [`LOCALE_VARS`] decides. An unparsable
/// value resolves to the root locale rather than consulting lower-precedence
/// variables, matching how the C library treats a broken `LC_ALL`.
pub fn locale_from_vars<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    for var in LOCALE_VARS {
        let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        return match parse_posix_locale(&value) {
            Ok(locale) => locale,
            Err(e) => {
                tracing::warn!("{var}: {e}; collating with the root locale");
                Locale::UND
            }
        };
    }

    tracing::debug!("no locale variables set; collating with the root locale");
    Locale::UND
}

/// The collation locale of the current process environment.
pub fn current_locale() -> Locale {
    locale_from_vars(|var| std::env::var(var).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn parse_strips_codeset() {
        assert_eq!(parse_posix_locale("en_US.UTF-8").unwrap().to_string(), "en-US");
    }

    #[test]
    fn parse_strips_modifier() {
        assert_eq!(parse_posix_locale("sv_SE@euro").unwrap().to_string(), "sv-SE");
        assert_eq!(
            parse_posix_locale("de_DE.ISO-8859-15@euro").unwrap().to_string(),
            "de-DE"
        );
    }

    #[test]
    fn parse_accepts_bcp47() {
        assert_eq!(parse_posix_locale("ja-JP").unwrap().to_string(), "ja-JP");
        assert_eq!(parse_posix_locale("fr").unwrap().to_string(), "fr");
    }

    #[test]
    fn parse_c_and_posix_are_root() {
        assert_eq!(parse_posix_locale("C").unwrap(), Locale::UND);
        assert_eq!(parse_posix_locale("C.UTF-8").unwrap(), Locale::UND);
        assert_eq!(parse_posix_locale("POSIX").unwrap(), Locale::UND);
        assert_eq!(parse_posix_locale("").unwrap(), Locale::UND);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_posix_locale("not a locale!").unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocale(ref s) if s == "not a locale!"));
    }

    #[test]
    fn lc_all_wins() {
        let locale = locale_from_vars(vars(&[
            ("LC_ALL", "sv_SE.UTF-8"),
            ("LC_COLLATE", "de_DE.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]));
        assert_eq!(locale.to_string(), "sv-SE");
    }

    #[test]
    fn lc_collate_beats_lang() {
        let locale = locale_from_vars(vars(&[
            ("LC_COLLATE", "de_DE.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]));
        assert_eq!(locale.to_string(), "de-DE");
    }

    #[test]
    fn empty_values_are_skipped() {
        let locale = locale_from_vars(vars(&[("LC_ALL", ""), ("LANG", "fr_FR.UTF-8")]));
        assert_eq!(locale.to_string(), "fr-FR");
    }

    #[test]
    fn nothing_set_is_root() {
        assert_eq!(locale_from_vars(vars(&[])), Locale::UND);
    }

    #[test]
    fn invalid_value_is_root() {
        let locale = locale_from_vars(vars(&[("LC_ALL", "???"), ("LANG", "en_US.UTF-8")]));
        assert_eq!(locale, Locale::UND);
    }
}
