/// Rewrite `key` from one separator convention to another.
///
/// Separators are literal strings; `"."` splits on dots, not on any character.
/// Empty segments survive the rewrite, so `"/a/"` with `/` → `.` gives `".a."`.
///
/// # Examples
///
/// ```
/// use keycheck::core::normalize_key;
///
/// assert_eq!(normalize_key("common/hello", "/", "."), "common.hello");
/// assert_eq!(normalize_key("common.hello", ".", "."), "common.hello");
/// assert_eq!(normalize_key("a::b::c", "::", "."), "a.b.c");
/// ```
pub fn normalize_key(key: &str, from: &str, to: &str) -> String {
    if from == to || from.is_empty() {
        return key.to_string();
    }
    key.split(from).collect::<Vec<_>>().join(to)
}
