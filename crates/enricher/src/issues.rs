//! Issue → solution resolution by substring triggers.
//!
//! A best-effort classifier over free-text issue descriptions. Triggers
//! are checked in table order and the first one contained in the issue
//! text wins. Unmatched issues simply have no solution.

/// Trigger phrase and the fix suggested when an issue mentions it.
pub const ISSUE_SOLUTIONS: &[(&str, &str)] = &[
    (
        "Class Component",
        "Convert the class component to a function component: move state to useState, lifecycle methods to useEffect, and instance methods to plain functions",
    ),
    (
        "dangerouslySetInnerHTML",
        "Render the content as React children, or sanitize the HTML with a vetted sanitizer before passing it to dangerouslySetInnerHTML",
    ),
    (
        "eval()",
        "Remove eval(); parse data with JSON.parse or replace dynamic code with an explicit lookup table",
    ),
    (
        "Inline function",
        "Hoist inline functions out of JSX, wrapping them in useCallback where they are passed to memoized children",
    ),
    (
        "Magic Number",
        "Extract magic numbers into named constants next to the code that uses them",
    ),
    (
        "Missing alt",
        "Add a descriptive alt attribute to every image, or alt=\"\" for purely decorative ones",
    ),
    (
        "Missing key",
        "Give every element rendered from a list a stable, unique key prop; avoid array indices",
    ),
    (
        "console.log",
        "Remove console.log calls or route them through the project logger",
    ),
    (
        "any type",
        "Replace `any` with a precise type or `unknown` narrowed by a type guard",
    ),
];

/// Suggested solution for an issue description, if any trigger matches.
pub fn resolve(issue: &str) -> Option<&'static str> {
    ISSUE_SOLUTIONS
        .iter()
        .find(|(trigger, _)| issue.contains(trigger))
        .map(|(_, solution)| *solution)
}
