//! Pattern guide table: detected-pattern identifier → recommended practice.
//!
//! Lookups are exact and case-sensitive. Unknown patterns have no guide.

/// Known patterns and their guidance, in display order.
pub const PATTERN_GUIDES: &[(&str, &str)] = &[
    (
        "auth",
        "Use the project's authentication context or hook instead of reading tokens from storage directly",
    ),
    (
        "fetch",
        "Move data fetching into a dedicated hook or service and handle loading and error states explicitly",
    ),
    (
        "form",
        "Use controlled inputs with a single submit handler and validate before submitting",
    ),
    (
        "router",
        "Navigate through the router's hooks and links rather than mutating window.location",
    ),
    (
        "state",
        "Keep state as local as possible and lift it only when siblings need to share it",
    ),
    (
        "effect",
        "Give every effect a complete dependency array and return a cleanup for subscriptions and timers",
    ),
    (
        "callback",
        "Wrap handlers passed to memoized children in useCallback with accurate dependencies",
    ),
    (
        "memo",
        "Memoize only measurably expensive computations with useMemo; avoid memoizing trivial values",
    ),
];

/// Guidance for `pattern`, if the pattern is known.
pub fn lookup(pattern: &str) -> Option<&'static str> {
    PATTERN_GUIDES
        .iter()
        .find(|(key, _)| *key == pattern)
        .map(|(_, guide)| *guide)
}
