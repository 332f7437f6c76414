// Shared prompt fragments. Each evaluation component builds its own prompt in
// evaluation/prompts.rs; this file holds the cross-cutting output constraints.

/// Appended to every prompt whose response is parsed as a single 0–10 integer.
pub const SINGLE_SCORE_INSTRUCTION: &str = "\
    Respond with the final score only: a single whole number from 0 to 10. \
    Do NOT include words, explanations, units or formatting.";

/// Appended to the skill-analysis prompt, whose response is parsed positionally.
pub const FOUR_SCORES_INSTRUCTION: &str = "\
    Respond with exactly four whole numbers from 0 to 10 separated by commas, in this order: \
    communication,grammar,attitude,soft_skills. \
    Do NOT include labels, words or formatting.";

/// Appended to free-text prompts so the response can be shown to the candidate verbatim.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with plain prose only. Do NOT use markdown headings, bullet symbols or code fences.";
