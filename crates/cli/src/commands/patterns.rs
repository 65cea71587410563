//! `portage patterns` — List the pattern guide table.

use portage_enricher::patterns::PATTERN_GUIDES;

pub fn run() {
    println!("🎯 Known patterns");
    println!("=================");
    let width = PATTERN_GUIDES.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (pattern, guide) in PATTERN_GUIDES {
        println!("  {pattern:<width$}  {guide}");
    }
}
