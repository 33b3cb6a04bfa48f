// Resume analysis: local heuristic engine, remote adapter and the HTTP surface.
// Remote model calls go through llm_client; everything else here is deterministic.

pub mod engine;
pub mod handlers;
pub mod job_fit;
pub mod matcher;
pub mod narrative;
pub mod prompts;
pub mod record;
pub mod remote;
pub mod score;
pub mod service;
pub mod taxonomy;
pub mod validation;
