//! Prompt enricher — the core assembly pipeline.
//!
//! Builds three kinds of prompts from a base instruction plus project
//! knowledge:
//!
//! 1. **Migration** — project context, recommendations, similar components,
//!    pattern guidance, then the fixed project constraints
//! 2. **Refactor** — detected issues and their suggested solutions
//! 3. **Test generation** — the component's type and props, then a fixed
//!    coverage checklist
//!
//! # Determinism
//!
//! Enrichment is a pure function of its inputs and the knowledge model's
//! answers. Missing data omits a section; it is never an error. Knowledge
//! model failures propagate to the caller unchanged.

use crate::assembly::{EnrichedPrompt, PromptBuilder};
use crate::constraints::PROJECT_CONSTRAINTS;
use crate::paths::{anchor, relative_path};
use crate::{issues, patterns};
use portage_core::context::MigrationContext;
use portage_core::entity::CodeEntity;
use portage_core::error::KnowledgeError;
use portage_core::knowledge::KnowledgeModel;
use portage_core::path::{file_name, file_stem, parent};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

const CONTEXT_HEADING: &str = "## 📋 Project Context";
const RECOMMENDATIONS_HEADING: &str = "## 💡 Recommendations";
const SIMILAR_HEADING: &str = "## 🔗 Similar Components";
const PATTERNS_HEADING: &str = "## 🎯 Pattern Guidance";
const ISSUES_HEADING: &str = "## 🔍 Issues Detected";
const SOLUTIONS_HEADING: &str = "## ✅ Suggested Solutions";
const COMPONENT_HEADING: &str = "## 🧪 Component Under Test";
const PROPS_HEADING: &str = "### Props";
const COVERAGE_HEADING: &str = "## ✔️ Required Test Coverage";

/// Test categories every generated suite must cover, in order.
pub const TEST_CHECKLIST: [&str; 5] = [
    "1. Smoke test: the component renders without crashing",
    "2. Props: each prop is rendered or applied as expected",
    "3. User interaction: events call their handlers with the right arguments",
    "4. Edge cases: empty, loading and error states are handled",
    "5. Accessibility: roles, labels and keyboard navigation work",
];

/// The prompt enricher. Holds only the knowledge model handle and an
/// optional project root, so one instance can serve any number of calls,
/// concurrently if the model allows.
pub struct PromptEnricher {
    knowledge: Arc<dyn KnowledgeModel>,
    project_root: Option<String>,
}

impl PromptEnricher {
    pub fn new(knowledge: Arc<dyn KnowledgeModel>) -> Self {
        Self {
            knowledge,
            project_root: None,
        }
    }

    /// Directory that relative file and entity paths are resolved against
    /// when relating them to each other.
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Name of the backing knowledge model.
    pub fn knowledge_name(&self) -> &str {
        self.knowledge.name()
    }

    /// Enrich a migration prompt. See [`Self::enrich_prompt_detailed`].
    pub fn enrich_prompt(
        &self,
        base_prompt: &str,
        context: &MigrationContext,
    ) -> Result<String, KnowledgeError> {
        Ok(self.enrich_prompt_detailed(base_prompt, context)?.text)
    }

    /// Enrich a migration prompt, returning the section report too.
    ///
    /// # Algorithm
    ///
    /// 1. Base prompt, verbatim
    /// 2. Project context for the file and its imports
    /// 3. Recommendations, one line each, in returned order
    /// 4. Similar components (components only), with paths relative to the
    ///    file's own directory. Relative paths are first resolved against
    ///    the project root; an entity that still cannot be related is shown
    ///    by file name alone
    /// 5. Guidance for each known detected pattern; unknown ones are skipped
    /// 6. Project constraints, always
    pub fn enrich_prompt_detailed(
        &self,
        base_prompt: &str,
        context: &MigrationContext,
    ) -> Result<EnrichedPrompt, KnowledgeError> {
        let mut builder = PromptBuilder::new(base_prompt);

        let project_context = self
            .knowledge
            .relevant_context(&context.file_path, &context.dependencies)?;
        builder.section("context", CONTEXT_HEADING, non_blank_lines(&project_context));

        let recommendations = self.knowledge.recommendations(context)?;
        builder.section(
            "recommendations",
            RECOMMENDATIONS_HEADING,
            recommendations.iter().map(|r| format!("- {r}")).collect(),
        );

        if context.is_component {
            let similar = self
                .knowledge
                .find_similar_components(file_stem(&context.file_name))?;
            builder.section(
                "similar_components",
                SIMILAR_HEADING,
                self.similar_component_lines(&similar, parent(&context.file_path)),
            );
        }

        builder.section(
            "patterns",
            PATTERNS_HEADING,
            pattern_lines(&context.detected_patterns),
        );

        builder.block("constraints", PROJECT_CONSTRAINTS);

        let prompt = builder.finish();
        debug!(
            file = %context.file_path,
            knowledge = self.knowledge.name(),
            sections = prompt.sections.len(),
            tokens = prompt.estimated_tokens,
            "Migration prompt enriched"
        );
        Ok(prompt)
    }

    /// Enrich a refactor prompt. See [`Self::enrich_refactor_prompt_detailed`].
    pub fn enrich_refactor_prompt(
        &self,
        base_prompt: &str,
        file_path: &str,
        issues: &[String],
    ) -> Result<String, KnowledgeError> {
        Ok(self
            .enrich_refactor_prompt_detailed(base_prompt, file_path, issues)?
            .text)
    }

    /// List every issue verbatim, then the solutions for the issues that
    /// match a known trigger, both in issue order.
    pub fn enrich_refactor_prompt_detailed(
        &self,
        base_prompt: &str,
        file_path: &str,
        issues: &[String],
    ) -> Result<EnrichedPrompt, KnowledgeError> {
        let mut builder = PromptBuilder::new(base_prompt);
        builder
            .section(
                "issues",
                ISSUES_HEADING,
                issues.iter().map(|i| format!("- {i}")).collect(),
            )
            .section(
                "solutions",
                SOLUTIONS_HEADING,
                issues
                    .iter()
                    .filter_map(|i| issues::resolve(i))
                    .map(|s| format!("- {s}"))
                    .collect(),
            );

        let prompt = builder.finish();
        debug!(
            file = %file_path,
            issues = issues.len(),
            sections = prompt.sections.len(),
            tokens = prompt.estimated_tokens,
            "Refactor prompt enriched"
        );
        Ok(prompt)
    }

    /// Enrich a test-generation prompt. See [`Self::enrich_test_prompt_detailed`].
    pub fn enrich_test_prompt(
        &self,
        base_prompt: &str,
        component_path: &str,
    ) -> Result<String, KnowledgeError> {
        Ok(self
            .enrich_test_prompt_detailed(base_prompt, component_path)?
            .text)
    }

    /// Look the component up by base name and describe the first match.
    /// With no match the base prompt comes back unchanged.
    pub fn enrich_test_prompt_detailed(
        &self,
        base_prompt: &str,
        component_path: &str,
    ) -> Result<EnrichedPrompt, KnowledgeError> {
        let query = file_stem(component_path);
        let mut builder = PromptBuilder::new(base_prompt);

        let Some(entity) = self.knowledge.search(query)?.into_iter().next() else {
            debug!(component = %component_path, "No indexed entity for test prompt");
            return Ok(builder.finish());
        };

        builder.section(
            "component",
            COMPONENT_HEADING,
            vec![format!("Type: {}", entity.kind)],
        );
        if let Some(props) = &entity.props {
            builder.section(
                "props",
                PROPS_HEADING,
                props.iter().map(|(name, ty)| format!("- {name}: {ty}")).collect(),
            );
        }
        builder.section(
            "coverage",
            COVERAGE_HEADING,
            TEST_CHECKLIST.iter().map(|item| item.to_string()).collect(),
        );

        let prompt = builder.finish();
        debug!(
            component = %component_path,
            entity = %entity.name,
            sections = prompt.sections.len(),
            tokens = prompt.estimated_tokens,
            "Test prompt enriched"
        );
        Ok(prompt)
    }

    fn similar_component_lines(&self, similar: &[CodeEntity], current_dir: &str) -> Vec<String> {
        let root = self.project_root.as_deref();
        let current_dir = anchor(current_dir, root);
        let mut lines = Vec::with_capacity(similar.len() * 2);
        for entity in similar {
            let shown = relative_path(&current_dir, &anchor(&entity.file_path, root))
                .unwrap_or_else(|| {
                    debug!(entity = %entity.name, "No common root for similar component path");
                    file_name(&entity.file_path).to_string()
                });
            lines.push(format!("- **{}** (`{shown}`)", entity.name));
            if let Some(description) = entity.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("  {description}"));
            }
        }
        lines
    }
}

/// Lines of `text`, or none when it is blank.
fn non_blank_lines(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.lines().map(str::to_string).collect()
}

/// Guidance lines for known patterns, first occurrence only.
fn pattern_lines(detected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    detected
        .iter()
        .filter(|p| seen.insert(p.as_str()))
        .filter_map(|p| patterns::lookup(p).map(|guide| format!("- **{p}**: {guide}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingKnowledge, StubKnowledge};
    use std::collections::BTreeMap;

    const BASE: &str = "Migrate this file to the new router.";

    fn enricher(stub: StubKnowledge) -> (PromptEnricher, Arc<StubKnowledge>) {
        let stub = Arc::new(stub);
        (PromptEnricher::new(stub.clone()), stub)
    }

    fn component_context() -> MigrationContext {
        MigrationContext::new("/app/src/pages/admin/UserPage.tsx", "export function UserPage() {}")
            .with_dependencies(vec!["react".into(), "@/hooks/useAuth".into()])
            .component(true)
    }

    // ── Migration ──────────────────────────────────────────────────────

    #[test]
    fn minimal_migration_prompt_is_base_plus_constraints() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let ctx = MigrationContext::new("src/util.ts", "");
        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert_eq!(out, format!("{BASE}\n\n{PROJECT_CONSTRAINTS}"));
    }

    #[test]
    fn output_starts_with_base_and_ends_with_constraints() {
        let (enricher, _) = enricher(
            StubKnowledge::new()
                .with_context("Uses the legacy store")
                .with_recommendations(&["Prefer hooks"]),
        );
        let ctx = component_context().with_patterns(vec!["auth".into()]);
        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(out.starts_with(BASE));
        assert!(out.ends_with(PROJECT_CONSTRAINTS));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let (enricher, _) = enricher(
            StubKnowledge::new()
                .with_context("Uses the legacy store")
                .with_recommendations(&["Prefer hooks", "Drop PropTypes"])
                .with_similar(vec![CodeEntity::new(
                    "UserCard",
                    "component",
                    "/app/src/components/UserCard.tsx",
                )]),
        );
        let ctx = component_context().with_patterns(vec!["fetch".into()]);
        let prompt = enricher.enrich_prompt_detailed(BASE, &ctx).unwrap();

        let names: Vec<_> = prompt.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["base", "context", "recommendations", "similar_components", "patterns", "constraints"]
        );

        let text = &prompt.text;
        let pos = |needle: &str| text.find(needle).unwrap();
        assert!(pos(CONTEXT_HEADING) < pos(RECOMMENDATIONS_HEADING));
        assert!(pos(RECOMMENDATIONS_HEADING) < pos(SIMILAR_HEADING));
        assert!(pos(SIMILAR_HEADING) < pos(PATTERNS_HEADING));
        assert!(pos(PATTERNS_HEADING) < pos("## ⚠️ Project Constraints"));
        assert!(pos("- Prefer hooks") < pos("- Drop PropTypes"));
    }

    #[test]
    fn knowledge_model_receives_file_and_dependencies() {
        let (enricher, stub) = enricher(StubKnowledge::new());
        enricher.enrich_prompt(BASE, &component_context()).unwrap();
        assert_eq!(
            stub.calls(),
            vec![
                "relevant_context(/app/src/pages/admin/UserPage.tsx, [react, @/hooks/useAuth])",
                "recommendations(/app/src/pages/admin/UserPage.tsx)",
                "find_similar_components(UserPage)",
            ]
        );
    }

    #[test]
    fn blank_context_is_omitted() {
        let (enricher, _) = enricher(StubKnowledge::new().with_context("  \n "));
        let out = enricher.enrich_prompt(BASE, &component_context()).unwrap();
        assert!(!out.contains(CONTEXT_HEADING));
    }

    #[test]
    fn empty_recommendations_have_no_heading() {
        let (enricher, _) = enricher(StubKnowledge::new().with_context("ctx"));
        let out = enricher.enrich_prompt(BASE, &component_context()).unwrap();
        assert!(!out.contains("Recommendations"));
    }

    #[test]
    fn non_components_skip_similar_lookup() {
        let (enricher, stub) = enricher(StubKnowledge::new().with_similar(vec![CodeEntity::new(
            "UserCard",
            "component",
            "/app/src/components/UserCard.tsx",
        )]));
        let ctx = component_context().component(false);
        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(!out.contains("Similar Components"));
        assert!(!stub.calls().iter().any(|c| c.starts_with("find_similar_components")));
    }

    #[test]
    fn similar_components_use_paths_relative_to_file() {
        let (enricher, _) = enricher(StubKnowledge::new().with_similar(vec![
            CodeEntity::new("UserCard", "component", "/app/src/components/UserCard.tsx")
                .with_description("Compact user summary"),
            CodeEntity::new("UserRow", "component", "/app/src/pages/admin/UserRow.tsx"),
        ]));
        let out = enricher.enrich_prompt(BASE, &component_context()).unwrap();
        assert!(out.contains(
            "## 🔗 Similar Components\n- **UserCard** (`../../components/UserCard.tsx`)\n  Compact user summary\n- **UserRow** (`UserRow.tsx`)\n"
        ));
        assert!(!out.contains("/app/src/components/UserCard.tsx"));
    }

    #[test]
    fn relative_file_path_is_anchored_at_project_root() {
        let stub = Arc::new(StubKnowledge::new().with_similar(vec![CodeEntity::new(
            "UserCard",
            "component",
            "/app/src/components/UserCard.tsx",
        )]));
        let enricher = PromptEnricher::new(stub).with_project_root("/app");
        let ctx = MigrationContext::new("src/pages/UserPage.tsx", "").component(true);

        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(out.contains("- **UserCard** (`../components/UserCard.tsx`)"));
        assert!(!out.contains("/app/src/components/UserCard.tsx"));
    }

    #[test]
    fn unrelated_roots_never_leak_the_index_path() {
        let (enricher, _) = enricher(StubKnowledge::new().with_similar(vec![CodeEntity::new(
            "UserCard",
            "component",
            "/app/src/components/UserCard.tsx",
        )]));
        let ctx = MigrationContext::new("src/pages/UserPage.tsx", "").component(true);

        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(out.contains("- **UserCard** (`UserCard.tsx`)"));
        assert!(!out.contains("/app/src/components"));
    }

    #[test]
    fn windows_file_path_flows_through_similar_components() {
        let (enricher, stub) = enricher(StubKnowledge::new().with_similar(vec![CodeEntity::new(
            "UserCard",
            "component",
            r"C:\app\src\components\UserCard.tsx",
        )]));
        let ctx = MigrationContext::new(r"C:\app\src\pages\UserPage.tsx", "").component(true);
        assert_eq!(ctx.file_name, "UserPage.tsx");

        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(stub.calls().contains(&"find_similar_components(UserPage)".to_string()));
        assert!(out.contains("- **UserCard** (`../components/UserCard.tsx`)"));
    }

    #[test]
    fn component_without_similar_results_has_no_heading() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let prompt = enricher
            .enrich_prompt_detailed(BASE, &component_context())
            .unwrap();
        assert!(!prompt.has_section("similar_components"));
    }

    #[test]
    fn unknown_patterns_are_skipped() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let ctx = component_context().with_patterns(vec!["auth".into(), "unknown-pattern".into()]);
        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        let auth_line = format!("- **auth**: {}", patterns::lookup("auth").unwrap());
        assert!(out.contains(&auth_line));
        assert!(!out.contains("unknown-pattern"));
    }

    #[test]
    fn only_unknown_patterns_omit_guidance_section() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let ctx = component_context().with_patterns(vec!["graphql".into()]);
        let out = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert!(!out.contains(PATTERNS_HEADING));
    }

    #[test]
    fn duplicate_patterns_emit_once_in_input_order() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let ctx = component_context().with_patterns(vec![
            "state".into(),
            "auth".into(),
            "state".into(),
        ]);
        let prompt = enricher.enrich_prompt_detailed(BASE, &ctx).unwrap();
        assert_eq!(prompt.text.matches("- **state**").count(), 1);
        assert!(prompt.text.find("- **state**").unwrap() < prompt.text.find("- **auth**").unwrap());
        let stats = prompt.sections.iter().find(|s| s.name == "patterns").unwrap();
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn enrichment_is_repeatable() {
        let (enricher, _) = enricher(
            StubKnowledge::new()
                .with_context("ctx")
                .with_recommendations(&["r1"]),
        );
        let ctx = component_context().with_patterns(vec!["memo".into()]);
        let first = enricher.enrich_prompt(BASE, &ctx).unwrap();
        let second = enricher.enrich_prompt(BASE, &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn knowledge_failure_propagates() {
        let enricher = PromptEnricher::new(Arc::new(FailingKnowledge));
        let err = enricher
            .enrich_prompt(BASE, &component_context())
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::QueryFailed(_)));
    }

    // ── Refactor ───────────────────────────────────────────────────────

    #[test]
    fn refactor_lists_issue_and_solution() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let out = enricher
            .enrich_refactor_prompt(BASE, "src/Legacy.jsx", &["Found Class Component usage".into()])
            .unwrap();
        assert!(out.contains("## 🔍 Issues Detected\n- Found Class Component usage"));
        let solution = issues::resolve("Class Component").unwrap();
        assert!(out.contains(&format!("## ✅ Suggested Solutions\n- {solution}")));
    }

    #[test]
    fn refactor_omits_unmatched_solutions_but_keeps_order() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let issues_in = vec![
            "Magic Number 42 in layout".to_string(),
            "Unused import".to_string(),
            "Missing alt on hero image".to_string(),
        ];
        let prompt = enricher
            .enrich_refactor_prompt_detailed(BASE, "src/Hero.tsx", &issues_in)
            .unwrap();

        assert!(prompt.text.contains("- Unused import"));
        let solutions = prompt.sections.iter().find(|s| s.name == "solutions").unwrap();
        assert_eq!(solutions.lines, 2);
        let magic = issues::resolve("Magic Number").unwrap();
        let alt = issues::resolve("Missing alt").unwrap();
        assert!(prompt.text.find(magic).unwrap() < prompt.text.find(alt).unwrap());
    }

    #[test]
    fn refactor_without_matches_has_no_solutions_heading() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let out = enricher
            .enrich_refactor_prompt(BASE, "src/a.ts", &["Something odd".into()])
            .unwrap();
        assert!(out.contains("- Something odd"));
        assert!(!out.contains(SOLUTIONS_HEADING));
    }

    #[test]
    fn refactor_with_no_issues_returns_base() {
        let (enricher, stub) = enricher(StubKnowledge::new());
        let out = enricher.enrich_refactor_prompt(BASE, "src/a.ts", &[]).unwrap();
        assert_eq!(out, BASE);
        assert!(stub.calls().is_empty());
    }

    // ── Test generation ────────────────────────────────────────────────

    fn button() -> CodeEntity {
        CodeEntity::new("Button", "component", "/app/src/components/Button.tsx")
            .with_prop("label", "string")
            .with_prop("onClick", "function")
    }

    #[test]
    fn test_prompt_lists_props_and_checklist() {
        let (enricher, stub) = enricher(StubKnowledge::new().with_search_results(vec![button()]));
        let out = enricher.enrich_test_prompt(BASE, "Button.tsx").unwrap();

        assert_eq!(stub.calls(), vec!["search(Button)"]);
        assert!(out.contains("Type: component"));
        assert!(out.contains("- label: string"));
        assert!(out.contains("- onClick: function"));

        let mut last = 0;
        for item in TEST_CHECKLIST {
            let at = out.find(item).unwrap();
            assert!(at > last);
            last = at;
        }
        assert!(out.ends_with(TEST_CHECKLIST[4]));
    }

    #[test]
    fn test_prompt_uses_first_result_only() {
        let other = CodeEntity::new("ButtonGroup", "component", "/app/src/ButtonGroup.tsx")
            .with_prop("spacing", "number");
        let (enricher, _) =
            enricher(StubKnowledge::new().with_search_results(vec![button(), other]));
        let out = enricher
            .enrich_test_prompt(BASE, "/app/src/components/Button.tsx")
            .unwrap();
        assert!(!out.contains("spacing"));
    }

    #[test]
    fn test_prompt_without_props_skips_props_section() {
        let hook = CodeEntity::new("useAuth", "hook", "/app/src/hooks/useAuth.ts");
        let (enricher, _) = enricher(StubKnowledge::new().with_search_results(vec![hook]));
        let prompt = enricher
            .enrich_test_prompt_detailed(BASE, "src/hooks/useAuth.ts")
            .unwrap();
        assert!(prompt.text.contains("Type: hook"));
        assert!(!prompt.has_section("props"));
        assert!(prompt.has_section("coverage"));
    }

    #[test]
    fn test_prompt_with_empty_props_map_skips_props_section() {
        let mut modal = CodeEntity::new("Modal", "component", "/app/src/components/Modal.tsx");
        modal.props = Some(BTreeMap::new());
        let (enricher, _) = enricher(StubKnowledge::new().with_search_results(vec![modal]));
        let prompt = enricher.enrich_test_prompt_detailed(BASE, "Modal.tsx").unwrap();

        assert!(!prompt.text.contains(PROPS_HEADING));
        assert!(!prompt.has_section("props"));
        assert!(prompt.text.contains("Type: component"));
        assert!(prompt.has_section("coverage"));
    }

    #[test]
    fn test_prompt_without_match_is_base_unchanged() {
        let (enricher, _) = enricher(StubKnowledge::new());
        let out = enricher.enrich_test_prompt(BASE, "Missing.tsx").unwrap();
        assert_eq!(out, BASE);
    }

    #[test]
    fn test_prompt_search_failure_propagates() {
        let enricher = PromptEnricher::new(Arc::new(FailingKnowledge));
        let err = enricher.enrich_test_prompt(BASE, "Button.tsx").unwrap_err();
        assert!(matches!(err, KnowledgeError::Storage(_)));
    }
}
