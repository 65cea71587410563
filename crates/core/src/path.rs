//! Separator-agnostic path helpers.
//!
//! Context and entity paths can come from any platform, so both `/` and
//! `\` count as separators here. Nothing touches the file system.

use std::borrow::Cow;

const SEPARATORS: &[char] = &['/', '\\'];

/// `path` with every `\` replaced by `/`.
pub fn to_slash(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Last segment of `path`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(SEPARATORS).next().unwrap_or(path)
}

/// File name of `path` without its final extension.
///
/// `src/Button.tsx` → `Button`, `Button.test.tsx` → `Button.test`,
/// `.eslintrc` → `.eslintrc`.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// Everything before the last separator; empty for a bare file name.
pub fn parent(path: &str) -> &str {
    match path.rfind(SEPARATORS) {
        Some(0) => &path[..1],
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Whether `path` starts at a root: `/`, `\`, or a drive such as `C:`.
pub fn is_rooted(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with(SEPARATORS)
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
