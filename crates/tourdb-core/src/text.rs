// crates/tourdb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Māmallapuram` -> `Mamallapuram`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use tourdb_core::fold_key;
///
/// assert_eq!(fold_key("Māmallapuram"), "mamallapuram");
/// assert_eq!(fold_key("ZIRO Valley"), "ziro valley");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use tourdb_core::equals_folded;
///
/// assert!(equals_folded("Majuli", "MAJULI"));
/// assert!(equals_folded("Māmallapuram", "mamallapuram"));
/// assert!(!equals_folded("Palolem", "Agonda"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
