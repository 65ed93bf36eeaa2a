pub mod boomer;
pub mod hogwarts;
pub mod red_flag;

/// appended to every prompt so the model never wraps its answer in prose
pub const JSON_ONLY_FOOTER: &str = "Return VALID JSON only - no markdown fences, no extra text before or after the object.";

/// joins a rubric with the shared JSON-only footer
pub fn with_footer(rubric: &str) -> String {
    format!("{}\n\n{}", rubric.trim_end(), JSON_ONLY_FOOTER)
}
