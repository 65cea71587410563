//! Lexical path helpers for prompt sections.
//!
//! Nothing here touches the file system: paths are compared component by
//! component, which keeps enrichment pure. Both `/` and `\` are accepted
//! as separators; output always uses `/`.

use portage_core::path::{is_rooted, to_slash};
use std::borrow::Cow;

/// Resolve a relative `path` against `root`. Rooted paths, and every path
/// when there is no root, come back unchanged.
pub fn anchor<'a>(path: &'a str, root: Option<&str>) -> Cow<'a, str> {
    match root {
        Some(root) if !is_rooted(path) => {
            let root = to_slash(root);
            Cow::Owned(format!("{}/{}", root.trim_end_matches('/'), to_slash(path)))
        }
        _ => Cow::Borrowed(path),
    }
}

/// Path of `target` relative to the directory `from_dir`, using `/`
/// separators and `..` to climb out of `from_dir`.
///
/// Returns `None` when the two paths have different roots (one absolute
/// and one relative, or two different drives); [`anchor`] both sides
/// first to relate them.
pub fn relative_path(from_dir: &str, target: &str) -> Option<String> {
    let (from_dir, target) = (to_slash(from_dir), to_slash(target));
    let (from_root, from_parts) = split_root(&from_dir);
    let (to_root, to_parts) = split_root(&target);
    if !from_root.eq_ignore_ascii_case(to_root) {
        return None;
    }

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_parts.len() - common];
    parts.extend_from_slice(&to_parts[common..]);

    Some(if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    })
}

/// Root prefix (`""`, `/` or a drive like `C:`) and the normal components
/// of a `/`-separated path, with `.` and `..` resolved lexically.
fn split_root(path: &str) -> (&str, Vec<&str>) {
    let root = if path.starts_with('/') {
        "/"
    } else if is_rooted(path) {
        &path[..2]
    } else {
        ""
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in path[root.len()..].split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if root.is_empty() {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }
    (root, parts)
}
