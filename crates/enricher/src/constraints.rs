//! Project constraints appended to every migration prompt.

/// Policy text closing each migration prompt. Identical on every call.
pub const PROJECT_CONSTRAINTS: &str = "\
## ⚠️ Project Constraints
- Preserve the public API: exported names, props and return types stay the same
- Keep TypeScript strict mode compliance and do not introduce `any`
- Reuse existing project components, hooks and utilities before writing new ones
- Follow the project's file layout and naming conventions
- Do not add third-party dependencies without explicit approval
- Runtime behaviour must not change as a side effect of the migration";
