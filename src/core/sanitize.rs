// src/core/sanitize.rs

/// Join text fragments with each fragment trimmed and blanks dropped.
/// `<td> 15 <b>JAN</b>24 </td>` reads as `15JAN24`.
pub fn stripped_text<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Case-insensitive "contains" on trimmed text (header labels like "INDIA").
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.trim().to_uppercase().contains(&needle.trim().to_uppercase())
}

/// Case-insensitive equality on trimmed text (row labels like "1st").
pub fn equals_ci(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
