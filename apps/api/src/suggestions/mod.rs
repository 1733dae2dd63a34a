// Suggestion pipeline: prompt construction, completion call, validation and
// coercion of the model's JSON, link rebuilding, budget clamp, fallback.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod validate;
