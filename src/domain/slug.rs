use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, removed after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// URL-friendly id for a product name. Product ids depend on this staying stable.
///
/// Decomposes accents (NFD) and drops the combining marks, lowercases, trims,
/// turns whitespace runs into `-`, drops anything outside `[A-Za-z0-9_-]` and
/// collapses repeated `-`.
pub fn slugify(text: &str) -> String {
    let folded = text
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(folded.len());
    for c in folded.trim_matches(is_js_whitespace).chars() {
        let c = if is_js_whitespace(c) { '-' } else { c };
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

/// Whitespace as browsers match it with `\s` and `trim()`. Unlike
/// `char::is_whitespace` this excludes U+0085 and includes the BOM.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000d}'
            | '\u{0020}'
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}
