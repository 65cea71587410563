//! Identifier and path helpers used for entity matching.

use portage_core::path::{is_rooted, parent, to_slash};

/// Split an identifier into lowercase words on camel-case boundaries and
/// non-alphanumeric separators.
///
/// `UserProfileCard` → `["user", "profile", "card"]`,
/// `date-picker_v2` → `["date", "picker", "v2"]`.
pub fn camel_words(ident: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in ident.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Last segment of an import specifier with any extension removed.
///
/// `@/hooks/useAuth` → `useAuth`, `./Button.tsx` → `Button`, `react` → `react`.
pub fn import_stem(specifier: &str) -> &str {
    let last = specifier
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(specifier);
    match last.rfind('.') {
        Some(0) | None => last,
        Some(idx) => &last[..idx],
    }
}

/// Whether `tail` matches the trailing components of `full`.
fn ends_with_components(full: &str, tail: &str) -> bool {
    !tail.is_empty()
        && full
            .strip_suffix(tail)
            .is_some_and(|head| head.is_empty() || head.ends_with('/'))
}

/// Whether two file paths share a parent directory. A relative path is
/// matched against the tail of an absolute one.
pub fn same_directory(a: &str, b: &str) -> bool {
    let (a, b) = (to_slash(a), to_slash(b));
    let (da, db) = (parent(&a), parent(&b));
    if da == db {
        return true;
    }
    match (is_rooted(da), is_rooted(db)) {
        (true, false) => ends_with_components(da, db),
        (false, true) => ends_with_components(db, da),
        _ => false,
    }
}

/// Whether two paths name the same file, allowing a relative path to match
/// the tail of an absolute one.
pub fn same_file(a: &str, b: &str) -> bool {
    let (a, b) = (to_slash(a), to_slash(b));
    a == b
        || (is_rooted(&a) && ends_with_components(&a, &b))
        || (is_rooted(&b) && ends_with_components(&b, &a))
}
