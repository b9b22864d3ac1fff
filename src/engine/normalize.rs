// src/engine/normalize.rs

use unicode_normalization::UnicodeNormalization;

/// Folds a place name into a comparable canonical form: diacritics
/// stripped (NFD decomposition, combining marks dropped), lowercased,
/// runs of whitespace/underscores/hyphens collapsed to a single space,
/// trimmed.
///
/// Total and idempotent; empty input yields empty output.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut out = String::with_capacity(folded.len());
    let mut pending_sep = false;
    for c in folded.chars() {
        if is_separator(c) {
            pending_sep = !out.is_empty();
        } else {
            if pending_sep {
                out.push(' ');
                pending_sep = false;
            }
            out.push(c);
        }
    }
    out
}

/// Splits on the same separator class as `normalize` (whitespace,
/// underscore, hyphen). Tokens keep whatever casing/accents the input had.
pub fn tokenize(s: &str) -> Vec<String> {
    s.split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// URL-friendly slug: lowercase, runs of anything non-alphanumeric become
/// a single hyphen, no leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(c);
        } else {
            pending_dash = !out.is_empty();
        }
    }
    out
}

/// Derives a human-readable name from a slug: hyphen segments, each
/// title-cased ("javea-xabia" -> "Javea Xabia").
pub fn name_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
