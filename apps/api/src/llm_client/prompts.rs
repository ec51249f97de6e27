// Shared prompt constants and prompt-building utilities.
// Each handler that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces bare-list output.
pub const LIST_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with the requested JSON value only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
