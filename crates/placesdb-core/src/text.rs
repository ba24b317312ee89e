// crates/placesdb-core/src/text.rs
/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Cañon` -> `Canon`)
/// 2\) Normalize to lowercase
///
/// The trie is built over the bytes of this key, so every label is a
/// lowercase ASCII byte.
///
/// # Examples
///
/// ```rust
/// use placesdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Cañon City"), "canon city");
/// assert_eq!(fold_key("SPRINGFIELD"), "springfield");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_ascii_lowercase()
}

/// Two-letter state codes are plain ASCII; no transliteration needed.
#[inline]
pub fn same_state(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
